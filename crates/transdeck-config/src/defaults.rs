//! Default values for dashboard configuration.
//!
//! # Design
//! - Keep defaults aligned with the daemon's observed behavior (5s polling).
//! - Page size defaults mirror the page-size picker options.

/// Poll cadence of the external collection refresher.
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 5_000;
/// Rows per page when nothing was persisted.
pub const DEFAULT_PAGE_SIZE: usize = 50;
/// Page sizes offered by the picker.
pub const DEFAULT_PAGE_SIZE_OPTIONS: [usize; 5] = [10, 20, 30, 40, 50];
/// Largest `.torrent` file accepted for upload (5 MiB).
pub const DEFAULT_MAX_UPLOAD_BYTES: u64 = 5 * 1024 * 1024;
/// Column key sorted on first load.
pub(crate) const DEFAULT_SORT_COLUMN: &str = "added_date";
/// Log level used when neither config nor `RUST_LOG` provide one.
pub(crate) const DEFAULT_LOG_LEVEL: &str = "info";
/// Accepted poll interval range in milliseconds.
pub(crate) const POLL_INTERVAL_RANGE_MS: std::ops::RangeInclusive<u64> = 500..=600_000;
