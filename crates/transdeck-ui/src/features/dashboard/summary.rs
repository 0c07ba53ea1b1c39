//! Summary card figures computed from the polled collection.

use transdeck_config::ActivityRule;
use transdeck_torrent_core::{Torrent, TorrentStatus};

use crate::features::torrents::filters::is_active;

/// Figures shown on the summary cards above the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct SummaryCards {
    /// Sum of download rates in bytes per second.
    pub download_rate: u64,
    /// Sum of upload rates in bytes per second.
    pub upload_rate: u64,
    /// Torrents in the collection.
    pub total: usize,
    /// Active torrents under the configured rule.
    pub active: usize,
    /// Stopped torrents.
    pub stopped: usize,
    /// Sum of payload sizes in bytes.
    pub total_size: u64,
    /// Sum of lifetime uploads in bytes.
    pub uploaded: u64,
}

/// Aggregate the collection into summary figures.
#[must_use]
pub fn summarize(torrents: &[Torrent], rule: ActivityRule) -> SummaryCards {
    torrents
        .iter()
        .fold(SummaryCards::default(), |mut cards, torrent| {
            cards.download_rate = cards.download_rate.saturating_add(torrent.rate_download);
            cards.upload_rate = cards.upload_rate.saturating_add(torrent.rate_upload);
            cards.total += 1;
            cards.active += usize::from(is_active(torrent, rule));
            cards.stopped += usize::from(torrent.status == TorrentStatus::Stopped);
            cards.total_size = cards.total_size.saturating_add(torrent.total_size);
            cards.uploaded = cards.uploaded.saturating_add(torrent.uploaded_ever);
            cards
        })
}
