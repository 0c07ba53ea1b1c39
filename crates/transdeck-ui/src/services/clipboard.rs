//! Clipboard access for the Add dialog's paste button.

use wasm_bindgen_futures::JsFuture;

use crate::features::torrents::dialogs::ClipboardError;

/// Read clipboard text through the async Clipboard API.
///
/// # Errors
///
/// Returns [`ClipboardError::Unavailable`] without a window, and
/// [`ClipboardError::ReadFailed`] when the browser denies or fails the read.
pub async fn read_text() -> Result<String, ClipboardError> {
    let window = web_sys::window().ok_or(ClipboardError::Unavailable)?;
    let promise = window.navigator().clipboard().read_text();
    let value = JsFuture::from(promise)
        .await
        .map_err(|err| ClipboardError::ReadFailed(format!("{err:?}")))?;
    value
        .as_string()
        .ok_or_else(|| ClipboardError::ReadFailed("clipboard returned non-text".to_string()))
}
