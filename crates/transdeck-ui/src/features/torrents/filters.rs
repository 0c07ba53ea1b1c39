//! Filter predicates over a single torrent.
//!
//! # Design
//! - Each predicate is pure and answers one dimension; callers AND them.
//! - Empty filter sets mean "no restriction".
//! - Undecodable labels are invisible to the label predicate.

use std::collections::BTreeSet;

use transdeck_config::ActivityRule;
use transdeck_torrent_core::{Torrent, TorrentStatus};

/// Coarse status view shown as tabs above the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum StatusTab {
    /// Every torrent.
    #[default]
    All,
    /// Torrents currently transferring (see [`ActivityRule`]).
    Active,
    /// Downloading torrents.
    Downloading,
    /// Seeding torrents.
    Seeding,
    /// Stopped torrents.
    Stopped,
}

impl StatusTab {
    /// Tabs in display order.
    pub const ALL: [Self; 5] = [
        Self::All,
        Self::Active,
        Self::Downloading,
        Self::Seeding,
        Self::Stopped,
    ];

    /// Stable key used for labels and test output.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Active => "active",
            Self::Downloading => "downloading",
            Self::Seeding => "seeding",
            Self::Stopped => "stopped",
        }
    }
}

/// Whether `torrent` counts as active under `rule`.
#[must_use]
pub const fn is_active(torrent: &Torrent, rule: ActivityRule) -> bool {
    match rule {
        ActivityRule::TransferRate => torrent.rate_download > 0 || torrent.rate_upload > 0,
        ActivityRule::PeerActivity => {
            torrent.peers_sending_to_us > 0 || torrent.peers_getting_from_us > 0
        }
    }
}

/// Tab predicate.
#[must_use]
pub fn tab_matches(tab: StatusTab, torrent: &Torrent, rule: ActivityRule) -> bool {
    match tab {
        StatusTab::All => true,
        StatusTab::Active => is_active(torrent, rule),
        StatusTab::Downloading => torrent.status == TorrentStatus::Downloading,
        StatusTab::Seeding => torrent.status == TorrentStatus::Seeding,
        StatusTab::Stopped => torrent.status == TorrentStatus::Stopped,
    }
}

/// Case-insensitive substring match on the torrent name.
#[must_use]
pub fn text_matches(query: &str, torrent: &Torrent) -> bool {
    query.is_empty() || torrent.name.to_lowercase().contains(&query.to_lowercase())
}

/// True when any tracker host of the torrent is selected.
#[must_use]
pub fn tracker_matches(selected: &BTreeSet<String>, torrent: &Torrent) -> bool {
    selected.is_empty() || torrent.hosts().any(|host| selected.contains(host))
}

/// True when any decodable label of the torrent is selected.
#[must_use]
pub fn label_matches(selected: &BTreeSet<String>, torrent: &Torrent) -> bool {
    selected.is_empty()
        || torrent
            .decoded_labels()
            .iter()
            .any(|label| selected.contains(&label.text))
}

/// Column filters that apply on top of the tab.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct ColumnFilters {
    /// Free-text name filter.
    pub query: String,
    /// Selected tracker hosts.
    pub trackers: BTreeSet<String>,
    /// Selected label texts.
    pub labels: BTreeSet<String>,
}

impl ColumnFilters {
    /// AND of the text, tracker, and label predicates.
    #[must_use]
    pub fn matches(&self, torrent: &Torrent) -> bool {
        text_matches(&self.query, torrent)
            && tracker_matches(&self.trackers, torrent)
            && label_matches(&self.labels, torrent)
    }

    /// Whether no column filter restricts the collection.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.query.is_empty() && self.trackers.is_empty() && self.labels.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use transdeck_test_support::fixtures::TorrentBuilder;

    fn set(values: &[&str]) -> BTreeSet<String> {
        values.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn active_follows_configured_rule() {
        let uploading = TorrentBuilder::new(1).rates(0, 10).build();
        let connected = TorrentBuilder::new(2).peers(1, 0).build();
        assert!(tab_matches(StatusTab::Active, &uploading, ActivityRule::TransferRate));
        assert!(!tab_matches(StatusTab::Active, &connected, ActivityRule::TransferRate));
        assert!(tab_matches(StatusTab::Active, &connected, ActivityRule::PeerActivity));
        assert!(!tab_matches(StatusTab::Active, &uploading, ActivityRule::PeerActivity));
    }

    #[test]
    fn status_tabs_match_exact_status() {
        let queued = TorrentBuilder::new(1)
            .status(TorrentStatus::QueuedDownload)
            .build();
        assert!(tab_matches(StatusTab::All, &queued, ActivityRule::TransferRate));
        assert!(!tab_matches(StatusTab::Downloading, &queued, ActivityRule::TransferRate));
        assert!(!tab_matches(StatusTab::Stopped, &queued, ActivityRule::TransferRate));
    }

    #[test]
    fn text_match_ignores_case() {
        let torrent = TorrentBuilder::new(1).name("Ubuntu Desktop").build();
        assert!(text_matches("", &torrent));
        assert!(text_matches("DESKTOP", &torrent));
        assert!(!text_matches("server", &torrent));
    }

    #[test]
    fn tracker_match_uses_any_host() {
        let torrent = TorrentBuilder::new(1)
            .tracker("http://a")
            .tracker("http://b")
            .build();
        assert!(tracker_matches(&set(&[]), &torrent));
        assert!(tracker_matches(&set(&["http://b"]), &torrent));
        assert!(!tracker_matches(&set(&["http://c"]), &torrent));
    }

    #[test]
    fn undecodable_labels_behave_as_absent() {
        let torrent = TorrentBuilder::new(1).raw_label("not-json").build();
        assert!(label_matches(&set(&[]), &torrent));
        assert!(!label_matches(&set(&["not-json"]), &torrent));
    }

    #[test]
    fn column_filters_combine_with_and() {
        let torrent = TorrentBuilder::new(1)
            .name("debian")
            .tracker("http://a")
            .label("linux")
            .build();
        let mut filters = ColumnFilters {
            query: "deb".into(),
            trackers: set(&["http://a"]),
            labels: set(&["linux"]),
        };
        assert!(filters.matches(&torrent));
        filters.labels = set(&["windows"]);
        assert!(!filters.matches(&torrent));
        assert!(!filters.is_empty());
        assert!(ColumnFilters::default().is_empty());
    }
}
