//! Torrent snapshots as reported by the remote daemon on each poll.

use serde::{Deserialize, Serialize};

use crate::error::{TorrentCoreError, TorrentCoreResult};
use crate::label::{self, Label};

/// Stable daemon-assigned torrent identifier, unique within a collection.
pub type TorrentId = i64;

/// Transfer status codes reported by the daemon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum TorrentStatus {
    /// Torrent is stopped.
    Stopped = 0,
    /// Queued for local data verification.
    QueuedVerify = 1,
    /// Verifying local data.
    Verifying = 2,
    /// Queued to download.
    QueuedDownload = 3,
    /// Downloading.
    Downloading = 4,
    /// Queued to seed.
    QueuedSeed = 5,
    /// Seeding.
    Seeding = 6,
}

impl TorrentStatus {
    /// Raw status code used on the wire.
    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Whether the torrent is waiting in one of the daemon queues.
    #[must_use]
    pub const fn is_queued(self) -> bool {
        matches!(
            self,
            Self::QueuedVerify | Self::QueuedDownload | Self::QueuedSeed
        )
    }

    /// Translation key used by the status badge.
    #[must_use]
    pub const fn display_key(self) -> &'static str {
        match self {
            Self::Stopped => "Stopped",
            Self::QueuedVerify | Self::QueuedDownload | Self::QueuedSeed => "Queued",
            Self::Verifying => "Verifying",
            Self::Downloading => "Downloading",
            Self::Seeding => "Seeding",
        }
    }
}

impl TryFrom<u8> for TorrentStatus {
    type Error = TorrentCoreError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Self::Stopped),
            1 => Ok(Self::QueuedVerify),
            2 => Ok(Self::Verifying),
            3 => Ok(Self::QueuedDownload),
            4 => Ok(Self::Downloading),
            5 => Ok(Self::QueuedSeed),
            6 => Ok(Self::Seeding),
            other => Err(TorrentCoreError::UnknownStatus { code: other }),
        }
    }
}

impl From<TorrentStatus> for u8 {
    fn from(value: TorrentStatus) -> Self {
        value.code()
    }
}

/// Per-tracker announce statistics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct TrackerStat {
    /// Tracker host (scheme + authority), used for filtering.
    pub host: String,
    /// Full announce URL, used for tracker replacement.
    pub announce: String,
    /// Seeders reported by the tracker; the daemon uses -1 for unknown.
    #[serde(default)]
    pub seeder_count: i64,
    /// Leechers reported by the tracker; the daemon uses -1 for unknown.
    #[serde(default)]
    pub leecher_count: i64,
    /// Whether the most recent announce succeeded.
    #[serde(default)]
    pub last_announce_succeeded: bool,
    /// Human-readable result of the most recent announce.
    #[serde(default)]
    pub last_announce_result: String,
}

/// Health classification rendered on the status badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TorrentHealth {
    /// No system or tracker error.
    Ok,
    /// The daemon reported a system error for the torrent.
    SystemError,
    /// The primary tracker's last announce failed.
    TrackerWarning,
}

/// Torrent record refreshed on every poll cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Torrent {
    /// Stable identifier used as the row key.
    pub id: TorrentId,
    /// Display name.
    pub name: String,
    /// Transfer status.
    pub status: TorrentStatus,
    /// Zero when healthy, otherwise a daemon error code.
    #[serde(default)]
    pub error: i64,
    /// Message paired with a nonzero `error`.
    #[serde(default)]
    pub error_string: String,
    /// Download rate in bytes per second.
    #[serde(default)]
    pub rate_download: u64,
    /// Upload rate in bytes per second.
    #[serde(default)]
    pub rate_upload: u64,
    /// Payload size in bytes.
    #[serde(default)]
    pub total_size: u64,
    /// Bytes uploaded over the torrent's lifetime.
    #[serde(default)]
    pub uploaded_ever: u64,
    /// Completion fraction in `[0, 1]`.
    #[serde(default)]
    pub percent_done: f64,
    /// Share ratio; the daemon uses negative values for "not available".
    #[serde(default)]
    pub upload_ratio: f64,
    /// Remaining seconds, or -1 when unknown.
    #[serde(default = "unknown_eta")]
    pub eta: i64,
    /// Absolute download directory.
    #[serde(default)]
    pub download_dir: String,
    /// Unix timestamp (seconds) when the torrent was added.
    #[serde(default)]
    pub added_date: i64,
    /// Peers currently sending data to us.
    #[serde(default)]
    pub peers_sending_to_us: u32,
    /// Peers currently receiving data from us.
    #[serde(default)]
    pub peers_getting_from_us: u32,
    /// Tracker statistics in announce order.
    #[serde(default)]
    pub tracker_stats: Vec<TrackerStat>,
    /// Encoded label strings.
    #[serde(default)]
    pub labels: Vec<String>,
}

const fn unknown_eta() -> i64 {
    -1
}

impl Torrent {
    /// Parse a polled collection payload.
    ///
    /// # Errors
    ///
    /// Returns [`TorrentCoreError::InvalidPayload`] when the JSON does not describe
    /// a list of torrents.
    pub fn parse_collection(payload: &str) -> TorrentCoreResult<Vec<Self>> {
        serde_json::from_str(payload).map_err(|source| TorrentCoreError::InvalidPayload { source })
    }

    /// Sum of leechers across all trackers.
    #[must_use]
    pub fn total_leechers(&self) -> i64 {
        self.tracker_stats.iter().map(|t| t.leecher_count).sum()
    }

    /// Sum of seeders across all trackers.
    #[must_use]
    pub fn total_seeders(&self) -> i64 {
        self.tracker_stats.iter().map(|t| t.seeder_count).sum()
    }

    /// Host of the first tracker, or an empty string without trackers.
    #[must_use]
    pub fn primary_host(&self) -> &str {
        self.tracker_stats.first().map_or("", |t| t.host.as_str())
    }

    /// Tracker hosts in announce order.
    pub fn hosts(&self) -> impl Iterator<Item = &str> {
        self.tracker_stats.iter().map(|t| t.host.as_str())
    }

    /// Announce URLs in announce order.
    #[must_use]
    pub fn announce_urls(&self) -> Vec<String> {
        self.tracker_stats.iter().map(|t| t.announce.clone()).collect()
    }

    /// Labels that decode successfully, in their original order.
    #[must_use]
    pub fn decoded_labels(&self) -> Vec<Label> {
        label::decode_all(&self.labels)
    }

    /// Health classification for the status badge.
    #[must_use]
    pub fn health(&self) -> TorrentHealth {
        if self.error != 0 {
            return TorrentHealth::SystemError;
        }
        match self.tracker_stats.first() {
            Some(tracker) if !tracker.last_announce_succeeded => TorrentHealth::TrackerWarning,
            _ => TorrentHealth::Ok,
        }
    }

    /// Tooltip text explaining a non-ok health state.
    #[must_use]
    pub fn health_detail(&self) -> Option<&str> {
        match self.health() {
            TorrentHealth::Ok => None,
            TorrentHealth::SystemError => Some(self.error_string.as_str()),
            TorrentHealth::TrackerWarning => self
                .tracker_stats
                .first()
                .map(|t| t.last_announce_result.as_str()),
        }
    }
}

/// Session-level values consumed by the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct SessionInfo {
    /// Daemon default save directory.
    #[serde(rename = "download-dir", default)]
    pub download_dir: String,
}
