//! Add-torrent form.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use thiserror::Error;
use tracing::debug;
use transdeck_torrent_core::{AddSource, MutationRequest};

use crate::features::torrents::actions::{PendingUpload, RowAction};
use crate::models::Notification;

/// Local validation failures of the add form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddFormError {
    /// Both a file and a link were provided.
    #[error("Please select only one file or magnet link.")]
    Ambiguous,
    /// Neither a file nor a link was provided.
    #[error("Please select a file or magnet link.")]
    Empty,
    /// The selected file is not a `.torrent` file.
    #[error("{name} is not a .torrent file.")]
    NotTorrentFile {
        /// Rejected file name.
        name: String,
    },
    /// The selected file exceeds the upload limit.
    #[error("{name} is larger than {limit} bytes.")]
    TooLarge {
        /// Rejected file name.
        name: String,
        /// Configured limit in bytes.
        limit: u64,
    },
}

/// Reasons a clipboard read failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClipboardError {
    /// The browser exposes no clipboard API.
    #[error("clipboard is unavailable")]
    Unavailable,
    /// Reading was denied or failed.
    #[error("failed to read clipboard: {0}")]
    ReadFailed(String),
}

/// Add dialog inputs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AddForm {
    /// Save directory.
    pub directory: String,
    /// Magnet link or `.torrent` URL.
    pub magnet_or_url: String,
    upload: Option<PendingUpload>,
    upload_error: Option<AddFormError>,
    max_upload_bytes: u64,
}

impl AddForm {
    /// Fresh form seeded with the first directory option.
    #[must_use]
    pub fn new(download_dirs: &[String], max_upload_bytes: u64) -> Self {
        Self {
            directory: download_dirs.first().cloned().unwrap_or_default(),
            magnet_or_url: String::new(),
            upload: None,
            upload_error: None,
            max_upload_bytes,
        }
    }

    /// Form for an open Add action, taking over any dropped file.
    #[must_use]
    pub fn for_action(action: &RowAction, download_dirs: &[String], max_upload_bytes: u64) -> Self {
        let mut form = Self::new(download_dirs, max_upload_bytes);
        if let Some(upload) = action.upload() {
            form.upload_error = form.set_upload(upload.clone()).err();
        }
        form
    }

    /// Selected file, if accepted.
    #[must_use]
    pub const fn upload(&self) -> Option<&PendingUpload> {
        self.upload.as_ref()
    }

    /// Why the most recent file was rejected.
    #[must_use]
    pub const fn upload_error(&self) -> Option<&AddFormError> {
        self.upload_error.as_ref()
    }

    /// Accept a picked or dropped file.
    ///
    /// # Errors
    ///
    /// Returns [`AddFormError::NotTorrentFile`] or [`AddFormError::TooLarge`];
    /// the previously accepted file is kept in that case.
    pub fn set_upload(&mut self, upload: PendingUpload) -> Result<(), AddFormError> {
        if !upload.is_torrent_file() {
            return Err(AddFormError::NotTorrentFile { name: upload.name });
        }
        if upload.size() > self.max_upload_bytes {
            return Err(AddFormError::TooLarge {
                name: upload.name,
                limit: self.max_upload_bytes,
            });
        }
        self.upload = Some(upload);
        self.upload_error = None;
        Ok(())
    }

    /// Forget the selected file.
    pub fn clear_upload(&mut self) {
        self.upload = None;
        self.upload_error = None;
    }

    /// Apply a clipboard read. Failures leave the form untouched and yield a
    /// notification for the user.
    pub fn paste_from_clipboard(
        &mut self,
        read: Result<String, ClipboardError>,
    ) -> Option<Notification> {
        match read {
            Ok(text) => {
                self.magnet_or_url = text;
                None
            }
            Err(err) => {
                debug!(error = %err, "clipboard paste failed");
                Some(Notification::error(err.to_string()))
            }
        }
    }

    /// Validate and build the add mutation.
    ///
    /// # Errors
    ///
    /// Returns [`AddFormError::Ambiguous`] when both a file and a link are set
    /// and [`AddFormError::Empty`] when neither is.
    pub fn submit(&self) -> Result<MutationRequest, AddFormError> {
        let link = self.magnet_or_url.trim();
        let source = match (&self.upload, link.is_empty()) {
            (Some(_), false) => return Err(AddFormError::Ambiguous),
            (None, true) => return Err(AddFormError::Empty),
            (Some(upload), true) => AddSource::Metainfo {
                base64: STANDARD.encode(&upload.bytes),
            },
            (None, false) => AddSource::Filename {
                value: link.to_string(),
            },
        };
        Ok(MutationRequest::Add {
            directory: self.directory.clone(),
            source,
        })
    }
}
