//! Bulk tracker replacement across loaded torrents.
//!
//! # Design
//! - Matching is a case-insensitive exact comparison on announce URLs.
//! - Each matched torrent gets its own request carrying its full new list, so
//!   one failed update never blocks or rolls back another.

use transdeck_torrent_core::{MutationRequest, Torrent};

use crate::features::torrents::actions::RowAction;

/// Replace-tracker dialog inputs.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct ReplaceTrackerForm {
    /// Announce URL to replace.
    pub old_tracker: String,
    /// Replacement announce URL.
    pub new_tracker: String,
}

fn same_url(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

impl ReplaceTrackerForm {
    /// Candidates with at least one announce URL equal to `old_tracker`.
    #[must_use]
    pub fn matched<'a>(&self, candidates: &'a [Torrent]) -> Vec<&'a Torrent> {
        if self.old_tracker.trim().is_empty() {
            return Vec::new();
        }
        candidates
            .iter()
            .filter(|torrent| {
                torrent
                    .tracker_stats
                    .iter()
                    .any(|tracker| same_url(&tracker.announce, &self.old_tracker))
            })
            .collect()
    }

    /// Whether submit is enabled for `candidates`.
    #[must_use]
    pub fn can_submit(&self, candidates: &[Torrent]) -> bool {
        !self.old_tracker.trim().is_empty()
            && !self.new_tracker.trim().is_empty()
            && self.old_tracker != self.new_tracker
            && !self.matched(candidates).is_empty()
    }

    /// Distinct announce URLs across `candidates`, in first-seen order.
    #[must_use]
    pub fn known_announces(candidates: &[Torrent]) -> Vec<String> {
        let mut seen: Vec<String> = Vec::new();
        for tracker in candidates.iter().flat_map(|t| t.tracker_stats.iter()) {
            if !seen.contains(&tracker.announce) {
                seen.push(tracker.announce.clone());
            }
        }
        seen
    }

    /// One tracker-list replacement per matched torrent; nothing when disabled.
    #[must_use]
    pub fn submit(&self, candidates: &[Torrent]) -> Vec<MutationRequest> {
        if !self.can_submit(candidates) {
            return Vec::new();
        }
        self.matched(candidates)
            .into_iter()
            .map(|torrent| MutationRequest::SetTrackerList {
                ids: vec![torrent.id],
                announce_list: torrent
                    .tracker_stats
                    .iter()
                    .map(|tracker| {
                        if same_url(&tracker.announce, &self.old_tracker) {
                            self.new_tracker.clone()
                        } else {
                            tracker.announce.clone()
                        }
                    })
                    .collect(),
            })
            .collect()
    }

    /// Submit against the candidates of an open replace-tracker action.
    #[must_use]
    pub fn submit_for(&self, action: &RowAction) -> Vec<MutationRequest> {
        self.submit(action.target_rows())
    }
}
