//! Label string codec.
//!
//! Labels travel as JSON objects (`{"text":"..."}`) inside the daemon's plain
//! string label list. Decoding is tolerant: a malformed entry is dropped from
//! the effective label set and never fails the surrounding row.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// User-assigned tag attached to a torrent.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Label {
    /// Display text, also the identity used by label filters.
    pub text: String,
}

impl Label {
    /// Build a label from display text.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// Reasons a raw label string is rejected.
#[derive(Debug, Error)]
pub enum LabelDecodeError {
    /// Not valid JSON at all.
    #[error("label is not valid JSON")]
    Syntax(#[source] serde_json::Error),
    /// Valid JSON, but not an object.
    #[error("label is not an object")]
    NotAnObject,
    /// An object without a string `text` field.
    #[error("label object has no text")]
    MissingText(#[source] serde_json::Error),
}

/// Decode a raw label string, reporting why it was rejected.
///
/// # Errors
///
/// Returns [`LabelDecodeError::Syntax`] for invalid JSON,
/// [`LabelDecodeError::NotAnObject`] for scalars and arrays, and
/// [`LabelDecodeError::MissingText`] for objects without a string `text`.
pub fn try_decode(raw: &str) -> Result<Label, LabelDecodeError> {
    let value: serde_json::Value = serde_json::from_str(raw).map_err(LabelDecodeError::Syntax)?;
    if !value.is_object() {
        return Err(LabelDecodeError::NotAnObject);
    }
    serde_json::from_value(value).map_err(LabelDecodeError::MissingText)
}

/// Decode a raw label string, collapsing failures to `None`.
#[must_use]
pub fn decode(raw: &str) -> Option<Label> {
    match try_decode(raw) {
        Ok(label) => Some(label),
        Err(err) => {
            debug!(raw, error = %err, "dropping undecodable label");
            None
        }
    }
}

/// Encode a label for persistence through the daemon.
#[must_use]
pub fn encode(label: &Label) -> String {
    // Serializing a struct holding a single String cannot fail.
    serde_json::to_string(label).unwrap_or_else(|_| String::from("{}"))
}

/// Decode every raw label, preserving order and dropping failures.
#[must_use]
pub fn decode_all(raw: &[String]) -> Vec<Label> {
    raw.iter().filter_map(|entry| decode(entry)).collect()
}
