//! Typed configuration models.
//!
//! # Design
//! - Pure data carriers; validation lives in `validate.rs`.
//! - Every field has a default so partial documents load.

use serde::{Deserialize, Serialize};

use crate::defaults::{
    DEFAULT_LOG_LEVEL, DEFAULT_MAX_UPLOAD_BYTES, DEFAULT_PAGE_SIZE, DEFAULT_PAGE_SIZE_OPTIONS,
    DEFAULT_POLL_INTERVAL_MS, DEFAULT_SORT_COLUMN,
};

/// Definition of "active" used by the Active tab and summary cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ActivityRule {
    /// Active when either transfer rate is above zero.
    #[default]
    TransferRate,
    /// Active when any peer is exchanging data with us.
    PeerActivity,
}

impl ActivityRule {
    /// Render the rule as its configuration string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TransferRate => "transfer_rate",
            Self::PeerActivity => "peer_activity",
        }
    }
}

/// Initial sort applied to the torrent table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SortPreference {
    /// Column key (see the table column catalogue).
    pub column: String,
    /// Sort descending when true.
    pub descending: bool,
}

impl Default for SortPreference {
    fn default() -> Self {
        Self {
            column: DEFAULT_SORT_COLUMN.to_string(),
            descending: true,
        }
    }
}

/// Log output format selection; `None` infers from the build profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormatChoice {
    /// Human-readable output.
    Pretty,
    /// Structured JSON output.
    Json,
}

/// Logging section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingSettings {
    /// Level directive used when `RUST_LOG` is unset.
    pub level: String,
    /// Output format override.
    pub format: Option<LogFormatChoice>,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
            format: None,
        }
    }
}

/// Dashboard configuration document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DashboardConfig {
    /// Refresh cadence of the external poller in milliseconds.
    pub poll_interval_ms: u64,
    /// Rows per page when no preference was persisted.
    pub default_page_size: usize,
    /// Page sizes offered by the picker, strictly increasing.
    pub page_size_options: Vec<usize>,
    /// Definition of the Active tab.
    pub activity_rule: ActivityRule,
    /// Initial sort.
    pub default_sort: SortPreference,
    /// Largest accepted `.torrent` upload in bytes.
    pub max_upload_bytes: u64,
    /// Logging section.
    pub logging: LoggingSettings,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
            default_page_size: DEFAULT_PAGE_SIZE,
            page_size_options: DEFAULT_PAGE_SIZE_OPTIONS.to_vec(),
            activity_rule: ActivityRule::default(),
            default_sort: SortPreference::default(),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            logging: LoggingSettings::default(),
        }
    }
}

impl DashboardConfig {
    /// Whether `size` is one of the offered page sizes.
    #[must_use]
    pub fn is_page_size_option(&self, size: usize) -> bool {
        self.page_size_options.contains(&size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_dashboard_conventions() {
        let config = DashboardConfig::default();
        assert_eq!(config.poll_interval_ms, 5_000);
        assert_eq!(config.default_page_size, 50);
        assert!(config.is_page_size_option(50));
        assert!(!config.is_page_size_option(25));
        assert_eq!(config.activity_rule, ActivityRule::TransferRate);
        assert_eq!(config.default_sort.column, "added_date");
        assert!(config.default_sort.descending);
    }

    #[test]
    fn activity_rule_uses_snake_case() {
        let rule: ActivityRule = serde_json::from_str("\"peer_activity\"").expect("rule");
        assert_eq!(rule, ActivityRule::PeerActivity);
        assert_eq!(rule.as_str(), "peer_activity");
    }
}
