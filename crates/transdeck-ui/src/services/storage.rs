//! `localStorage` preference backend.

use gloo::console;
use gloo::storage::{LocalStorage, Storage};

use crate::app::preferences::{PreferenceError, PreferenceStore};

/// Preferences persisted in the browser's `localStorage`.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalStoragePreferences;

impl PreferenceStore for LocalStoragePreferences {
    fn get(&self, key: &str) -> Option<String> {
        LocalStorage::get::<String>(key).ok()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PreferenceError> {
        LocalStorage::set(key, value).map_err(|err| {
            let detail = err.to_string();
            log_storage_error("set", key, &detail);
            PreferenceError {
                key: key.to_string(),
                detail,
            }
        })
    }

    fn remove(&self, key: &str) {
        LocalStorage::delete(key);
    }
}

fn log_storage_error(operation: &'static str, key: &str, detail: &str) {
    console::error!("storage operation failed", operation, key, detail);
}
