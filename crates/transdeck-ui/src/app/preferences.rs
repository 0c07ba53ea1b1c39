//! Persisted dashboard preferences.
//!
//! # Design
//! - Only page size and column visibility are persisted; torrent data never is.
//! - Storage sits behind [`PreferenceStore`] so the browser backend stays
//!   wasm-only and tests run against [`MemoryPreferences`].
//! - Unreadable values fall back to configured defaults.

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};

use thiserror::Error;
use tracing::warn;
use transdeck_config::DashboardConfig;

use crate::features::torrents::columns::ColumnId;

pub(crate) const PAGE_SIZE_KEY: &str = "transdeck.page_size";
pub(crate) const COLUMNS_KEY: &str = "transdeck.columns";

/// Storage failure reported by a preference backend.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("preference '{key}' could not be stored: {detail}")]
pub struct PreferenceError {
    /// Key being written.
    pub key: String,
    /// Backend-specific detail.
    pub detail: String,
}

/// String key/value preference backend.
pub trait PreferenceStore {
    /// Read a stored value.
    fn get(&self, key: &str) -> Option<String>;

    /// Store a value.
    ///
    /// # Errors
    ///
    /// Returns [`PreferenceError`] when the backend rejects the write.
    fn set(&self, key: &str, value: &str) -> Result<(), PreferenceError>;

    /// Delete a value; missing keys are ignored.
    fn remove(&self, key: &str);
}

/// In-memory backend for native builds and tests.
#[derive(Debug, Default)]
pub struct MemoryPreferences {
    values: RefCell<BTreeMap<String, String>>,
}

impl PreferenceStore for MemoryPreferences {
    fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PreferenceError> {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) {
        self.values.borrow_mut().remove(key);
    }
}

/// Restored page size, or the configured default when missing or invalid.
#[must_use]
pub fn load_page_size(store: &dyn PreferenceStore, config: &DashboardConfig) -> usize {
    store
        .get(PAGE_SIZE_KEY)
        .and_then(|raw| raw.trim().parse::<usize>().ok())
        .filter(|size| *size > 0)
        .unwrap_or(config.default_page_size)
}

/// Persist the page size; failures are logged and otherwise ignored.
pub fn save_page_size(store: &dyn PreferenceStore, page_size: usize) {
    if let Err(err) = store.set(PAGE_SIZE_KEY, &page_size.to_string()) {
        warn!(error = %err, "page size not persisted");
    }
}

/// Restored hidden columns; unknown keys are skipped.
#[must_use]
pub fn load_hidden_columns(store: &dyn PreferenceStore) -> Vec<ColumnId> {
    let Some(raw) = store.get(COLUMNS_KEY) else {
        return Vec::new();
    };
    match serde_json::from_str::<Vec<String>>(&raw) {
        Ok(keys) => keys
            .iter()
            .filter_map(|key| ColumnId::from_key(key))
            .collect(),
        Err(err) => {
            warn!(error = %err, "discarding unreadable column preferences");
            store.remove(COLUMNS_KEY);
            Vec::new()
        }
    }
}

/// Persist hidden columns by key.
pub fn save_hidden_columns(store: &dyn PreferenceStore, hidden: &BTreeSet<ColumnId>) {
    let keys: Vec<&str> = hidden.iter().map(|column| column.key()).collect();
    let result = serde_json::to_string(&keys)
        .map_err(|err| PreferenceError {
            key: COLUMNS_KEY.to_string(),
            detail: err.to_string(),
        })
        .and_then(|encoded| store.set(COLUMNS_KEY, &encoded));
    if let Err(err) = result {
        warn!(error = %err, "column visibility not persisted");
    }
}
