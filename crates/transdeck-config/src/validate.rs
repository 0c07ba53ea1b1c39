//! Validation helpers for configuration documents.

use crate::defaults::POLL_INTERVAL_RANGE_MS;
use crate::error::{ConfigError, ConfigResult};
use crate::model::DashboardConfig;

fn invalid(field: &str, value: impl ToString, reason: &'static str) -> ConfigError {
    ConfigError::InvalidField {
        section: "dashboard".to_string(),
        field: field.to_string(),
        value: Some(value.to_string()),
        reason,
    }
}

/// Validate cross-field constraints of a loaded document.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidField`] for the first constraint that fails.
pub fn validate(config: &DashboardConfig) -> ConfigResult<()> {
    if !POLL_INTERVAL_RANGE_MS.contains(&config.poll_interval_ms) {
        return Err(invalid(
            "poll_interval_ms",
            config.poll_interval_ms,
            "must be between 500 and 600000",
        ));
    }

    validate_page_sizes(&config.page_size_options)?;
    if !config.is_page_size_option(config.default_page_size) {
        return Err(invalid(
            "default_page_size",
            config.default_page_size,
            "must be one of page_size_options",
        ));
    }

    if config.max_upload_bytes == 0 {
        return Err(invalid("max_upload_bytes", 0, "must be positive"));
    }

    if config.default_sort.column.trim().is_empty() {
        return Err(invalid(
            "default_sort.column",
            &config.default_sort.column,
            "must not be empty",
        ));
    }

    if config.logging.level.trim().is_empty() {
        return Err(invalid(
            "logging.level",
            &config.logging.level,
            "must not be empty",
        ));
    }

    Ok(())
}

fn validate_page_sizes(options: &[usize]) -> ConfigResult<()> {
    if options.is_empty() {
        return Err(ConfigError::InvalidField {
            section: "dashboard".to_string(),
            field: "page_size_options".to_string(),
            value: None,
            reason: "must not be empty",
        });
    }
    if options.contains(&0) {
        return Err(invalid("page_size_options", 0, "must not contain zero"));
    }
    if options.windows(2).any(|pair| pair[0] >= pair[1]) {
        return Err(invalid(
            "page_size_options",
            format!("{options:?}"),
            "must be strictly increasing",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_document_is_valid() {
        validate(&DashboardConfig::default()).expect("defaults validate");
    }

    #[test]
    fn poll_interval_out_of_range_is_rejected() {
        let config = DashboardConfig {
            poll_interval_ms: 10,
            ..DashboardConfig::default()
        };
        let err = validate(&config).expect_err("too fast");
        assert!(err.to_string().contains("poll_interval_ms"));
    }

    #[test]
    fn default_page_size_must_be_offered() {
        let config = DashboardConfig {
            default_page_size: 25,
            ..DashboardConfig::default()
        };
        assert!(matches!(
            validate(&config),
            Err(ConfigError::InvalidField { ref field, .. }) if field == "default_page_size"
        ));
    }

    #[test]
    fn page_sizes_must_increase() {
        let config = DashboardConfig {
            page_size_options: vec![10, 50, 20],
            default_page_size: 10,
            ..DashboardConfig::default()
        };
        let err = validate(&config).expect_err("unordered options");
        assert!(err.to_string().contains("strictly increasing"));

        let empty = DashboardConfig {
            page_size_options: Vec::new(),
            ..DashboardConfig::default()
        };
        assert!(validate(&empty).is_err());
    }

    #[test]
    fn zero_upload_limit_is_rejected() {
        let config = DashboardConfig {
            max_upload_bytes: 0,
            ..DashboardConfig::default()
        };
        assert!(validate(&config).is_err());
    }
}
