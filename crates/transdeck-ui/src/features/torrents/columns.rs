//! Column catalogue for the torrent table.
//!
//! # Design
//! - Each column owns its comparator so sorting never inspects column keys.
//! - Keys are snake_case and stable; they are persisted for column visibility.

use std::cmp::Ordering;

use transdeck_torrent_core::Torrent;

/// Data columns of the torrent table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ColumnId {
    /// Torrent name.
    Name,
    /// Payload size.
    TotalSize,
    /// Completion percentage.
    Percentage,
    /// Remaining time.
    Eta,
    /// Status badge.
    Status,
    /// Download rate.
    DownloadSpeed,
    /// Upload rate.
    UploadSpeed,
    /// Leechers reported by trackers.
    DownloadPeers,
    /// Seeders reported by trackers.
    UploadPeers,
    /// Share ratio.
    UploadRatio,
    /// Lifetime upload.
    Uploaded,
    /// Tracker hosts.
    Tracker,
    /// Time the torrent was added.
    AddedDate,
    /// Decoded labels.
    Labels,
}

impl ColumnId {
    /// Columns in display order.
    pub const ALL: [Self; 14] = [
        Self::Name,
        Self::TotalSize,
        Self::Percentage,
        Self::Eta,
        Self::Status,
        Self::DownloadSpeed,
        Self::UploadSpeed,
        Self::DownloadPeers,
        Self::UploadPeers,
        Self::UploadRatio,
        Self::Uploaded,
        Self::Tracker,
        Self::AddedDate,
        Self::Labels,
    ];

    /// Stable persistence key.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::TotalSize => "total_size",
            Self::Percentage => "percentage",
            Self::Eta => "eta",
            Self::Status => "status",
            Self::DownloadSpeed => "download_speed",
            Self::UploadSpeed => "upload_speed",
            Self::DownloadPeers => "download_peers",
            Self::UploadPeers => "upload_peers",
            Self::UploadRatio => "upload_ratio",
            Self::Uploaded => "uploaded",
            Self::Tracker => "tracker",
            Self::AddedDate => "added_date",
            Self::Labels => "labels",
        }
    }

    /// Resolve a persistence key.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|column| column.key() == key)
    }

    /// Whether the user may hide the column.
    #[must_use]
    pub const fn hideable(self) -> bool {
        !matches!(self, Self::Name)
    }

    /// Whether the column offers a sort toggle.
    #[must_use]
    pub const fn sortable(self) -> bool {
        !matches!(self, Self::Labels)
    }

    /// First sort direction when the column becomes active.
    ///
    /// Text columns start ascending; numeric and date columns start descending.
    #[must_use]
    pub const fn starts_descending(self) -> bool {
        !matches!(self, Self::Name | Self::Tracker)
    }

    /// Ascending comparator for the column.
    #[must_use]
    pub fn compare(self, a: &Torrent, b: &Torrent) -> Ordering {
        match self {
            Self::Name => a.name.cmp(&b.name),
            Self::TotalSize => a.total_size.cmp(&b.total_size),
            Self::Percentage => a.percent_done.total_cmp(&b.percent_done),
            Self::Eta => a.eta.cmp(&b.eta),
            Self::Status => a.status.code().cmp(&b.status.code()),
            Self::DownloadSpeed => a.rate_download.cmp(&b.rate_download),
            Self::UploadSpeed => a.rate_upload.cmp(&b.rate_upload),
            Self::DownloadPeers => a.total_leechers().cmp(&b.total_leechers()),
            Self::UploadPeers => a.total_seeders().cmp(&b.total_seeders()),
            Self::UploadRatio => a.upload_ratio.total_cmp(&b.upload_ratio),
            Self::Uploaded => a.uploaded_ever.cmp(&b.uploaded_ever),
            Self::Tracker => a.primary_host().cmp(b.primary_host()),
            Self::AddedDate => a.added_date.cmp(&b.added_date),
            Self::Labels => Ordering::Equal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use transdeck_test_support::fixtures::TorrentBuilder;

    #[test]
    fn keys_round_trip_through_lookup() {
        for column in ColumnId::ALL {
            assert_eq!(ColumnId::from_key(column.key()), Some(column));
        }
        assert_eq!(ColumnId::from_key("Added Date"), None);
    }

    #[test]
    fn tracker_comparator_treats_missing_trackers_as_empty() {
        let none = TorrentBuilder::new(1).build();
        let alpha = TorrentBuilder::new(2).tracker("http://alpha").build();
        assert_eq!(ColumnId::Tracker.compare(&none, &alpha), Ordering::Less);
        assert_eq!(ColumnId::Tracker.compare(&none, &none), Ordering::Equal);
    }

    #[test]
    fn float_columns_order_negative_ratios_first() {
        let unknown = TorrentBuilder::new(1).progress(0.0, -1.0).build();
        let shared = TorrentBuilder::new(2).progress(1.0, 2.5).build();
        assert_eq!(
            ColumnId::UploadRatio.compare(&unknown, &shared),
            Ordering::Less
        );
        assert_eq!(
            ColumnId::Percentage.compare(&shared, &unknown),
            Ordering::Greater
        );
    }

    #[test]
    fn flags_follow_column_kind() {
        assert!(!ColumnId::Name.hideable());
        assert!(ColumnId::Labels.hideable());
        assert!(!ColumnId::Labels.sortable());
        assert!(!ColumnId::Name.starts_descending());
        assert!(ColumnId::AddedDate.starts_descending());
    }
}
