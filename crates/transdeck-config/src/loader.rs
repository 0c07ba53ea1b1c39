//! Reading configuration documents from strings and files.

use std::fs;
use std::path::Path;

use tracing::warn;

use crate::error::{ConfigError, ConfigResult};
use crate::model::DashboardConfig;
use crate::validate::validate;

/// Parse and validate a JSON configuration document.
///
/// # Errors
///
/// Returns [`ConfigError::Parse`] for malformed JSON or unknown fields, and
/// [`ConfigError::InvalidField`] when validation fails.
pub fn from_json_str(document: &str) -> ConfigResult<DashboardConfig> {
    let config: DashboardConfig =
        serde_json::from_str(document).map_err(|source| ConfigError::Parse { source })?;
    validate(&config)?;
    Ok(config)
}

/// Read, parse, and validate a configuration file.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] when the file cannot be read, plus any error
/// reported by [`from_json_str`].
pub fn load_from_path(path: &Path) -> ConfigResult<DashboardConfig> {
    let document = fs::read_to_string(path)
        .map_err(|source| ConfigError::Io {
            operation: "config.read",
            path: path.to_path_buf(),
            source,
        })
        .inspect_err(|err| {
            warn!(path = %path.display(), error = %err, "configuration unreadable");
        })?;
    from_json_str(&document).inspect_err(|err| {
        warn!(path = %path.display(), error = %err, "configuration rejected");
    })
}
