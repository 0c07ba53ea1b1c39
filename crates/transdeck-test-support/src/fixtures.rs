//! Torrent fixtures for table, dialog, and store tests.

use transdeck_torrent_core::{Label, Torrent, TorrentId, TorrentStatus, TrackerStat, encode};

/// Build a tracker entry whose announce URL is `{host}/announce`.
#[must_use]
pub fn tracker(host: &str) -> TrackerStat {
    tracker_with_announce(host, &format!("{host}/announce"))
}

/// Build a tracker entry with an explicit announce URL.
#[must_use]
pub fn tracker_with_announce(host: &str, announce: &str) -> TrackerStat {
    TrackerStat {
        host: host.to_string(),
        announce: announce.to_string(),
        seeder_count: 0,
        leecher_count: 0,
        last_announce_succeeded: true,
        last_announce_result: "Success".to_string(),
    }
}

/// Fluent builder over [`Torrent`] with quiet defaults.
#[derive(Debug, Clone)]
pub struct TorrentBuilder {
    torrent: Torrent,
}

impl TorrentBuilder {
    /// Start a stopped, idle torrent named `torrent-{id}`.
    #[must_use]
    pub fn new(id: TorrentId) -> Self {
        Self {
            torrent: Torrent {
                id,
                name: format!("torrent-{id}"),
                status: TorrentStatus::Stopped,
                error: 0,
                error_string: String::new(),
                rate_download: 0,
                rate_upload: 0,
                total_size: 0,
                uploaded_ever: 0,
                percent_done: 0.0,
                upload_ratio: 0.0,
                eta: -1,
                download_dir: "/downloads".to_string(),
                added_date: id,
                peers_sending_to_us: 0,
                peers_getting_from_us: 0,
                tracker_stats: Vec::new(),
                labels: Vec::new(),
            },
        }
    }

    /// Override the display name.
    #[must_use]
    pub fn name(mut self, name: &str) -> Self {
        self.torrent.name = name.to_string();
        self
    }

    /// Override the status.
    #[must_use]
    pub const fn status(mut self, status: TorrentStatus) -> Self {
        self.torrent.status = status;
        self
    }

    /// Set download and upload rates in bytes per second.
    #[must_use]
    pub const fn rates(mut self, download: u64, upload: u64) -> Self {
        self.torrent.rate_download = download;
        self.torrent.rate_upload = upload;
        self
    }

    /// Set connected peer counts.
    #[must_use]
    pub const fn peers(mut self, sending_to_us: u32, getting_from_us: u32) -> Self {
        self.torrent.peers_sending_to_us = sending_to_us;
        self.torrent.peers_getting_from_us = getting_from_us;
        self
    }

    /// Set payload size and lifetime upload in bytes.
    #[must_use]
    pub const fn sizes(mut self, total_size: u64, uploaded_ever: u64) -> Self {
        self.torrent.total_size = total_size;
        self.torrent.uploaded_ever = uploaded_ever;
        self
    }

    /// Set completion fraction and ratio.
    #[must_use]
    pub const fn progress(mut self, percent_done: f64, upload_ratio: f64) -> Self {
        self.torrent.percent_done = percent_done;
        self.torrent.upload_ratio = upload_ratio;
        self
    }

    /// Set remaining seconds.
    #[must_use]
    pub const fn eta(mut self, eta: i64) -> Self {
        self.torrent.eta = eta;
        self
    }

    /// Set the added timestamp.
    #[must_use]
    pub const fn added(mut self, added_date: i64) -> Self {
        self.torrent.added_date = added_date;
        self
    }

    /// Set the download directory.
    #[must_use]
    pub fn download_dir(mut self, dir: &str) -> Self {
        self.torrent.download_dir = dir.to_string();
        self
    }

    /// Append a tracker derived from `host`.
    #[must_use]
    pub fn tracker(mut self, host: &str) -> Self {
        self.torrent.tracker_stats.push(tracker(host));
        self
    }

    /// Append a tracker with an explicit announce URL.
    #[must_use]
    pub fn announce(mut self, host: &str, announce: &str) -> Self {
        self.torrent
            .tracker_stats
            .push(tracker_with_announce(host, announce));
        self
    }

    /// Append a tracker entry as-is.
    #[must_use]
    pub fn tracker_stat(mut self, stat: TrackerStat) -> Self {
        self.torrent.tracker_stats.push(stat);
        self
    }

    /// Append an encoded label.
    #[must_use]
    pub fn label(mut self, text: &str) -> Self {
        self.torrent.labels.push(encode(&Label::new(text)));
        self
    }

    /// Append a raw label string without encoding.
    #[must_use]
    pub fn raw_label(mut self, raw: &str) -> Self {
        self.torrent.labels.push(raw.to_string());
        self
    }

    /// Record a daemon error.
    #[must_use]
    pub fn error(mut self, code: i64, message: &str) -> Self {
        self.torrent.error = code;
        self.torrent.error_string = message.to_string();
        self
    }

    /// Finish the torrent.
    #[must_use]
    pub fn build(self) -> Torrent {
        self.torrent
    }
}

/// Five torrents covering every status tab, two trackers, and two labels.
///
/// | id | status      | rates    | tracker              | labels       |
/// |----|-------------|----------|----------------------|--------------|
/// | 1  | Downloading | 500 / 0  | `http://alpha.test`  | linux        |
/// | 2  | Seeding     | 0 / 200  | `http://beta.test`   | linux, iso   |
/// | 3  | Seeding     | 0 / 0    | `http://alpha.test`  |              |
/// | 4  | Stopped     | 0 / 0    | none                 | iso          |
/// | 5  | Downloading | 0 / 0    | `http://beta.test`   |              |
#[must_use]
pub fn sample_collection() -> Vec<Torrent> {
    vec![
        TorrentBuilder::new(1)
            .name("ubuntu-24.04.iso")
            .status(TorrentStatus::Downloading)
            .rates(500, 0)
            .sizes(4_000, 0)
            .tracker("http://alpha.test")
            .label("linux")
            .build(),
        TorrentBuilder::new(2)
            .name("debian-12.iso")
            .status(TorrentStatus::Seeding)
            .rates(0, 200)
            .sizes(3_000, 9_000)
            .tracker("http://beta.test")
            .label("linux")
            .label("iso")
            .build(),
        TorrentBuilder::new(3)
            .name("Big Buck Bunny")
            .status(TorrentStatus::Seeding)
            .sizes(1_000, 500)
            .tracker("http://alpha.test")
            .download_dir("/media")
            .build(),
        TorrentBuilder::new(4)
            .name("archlinux.iso")
            .status(TorrentStatus::Stopped)
            .sizes(2_000, 0)
            .label("iso")
            .build(),
        TorrentBuilder::new(5)
            .name("Sintel")
            .status(TorrentStatus::Downloading)
            .sizes(500, 0)
            .tracker("http://beta.test")
            .build(),
    ]
}

/// Torrents sharing the announce URL `http://a/ann`, with one case variant.
#[must_use]
pub fn shared_tracker_collection() -> Vec<Torrent> {
    vec![
        TorrentBuilder::new(1)
            .announce("http://a", "http://a/ann")
            .announce("http://c", "http://c/ann")
            .build(),
        TorrentBuilder::new(2)
            .announce("http://a", "HTTP://A/ANN")
            .build(),
        TorrentBuilder::new(3)
            .announce("http://z", "http://z/ann")
            .build(),
    ]
}
