//! Edit-torrent form: rename, relocate, relabel.

use transdeck_torrent_core::{MutationRequest, Torrent, TorrentId};

use crate::features::labels::logic::LabelEditor;
use crate::features::torrents::actions::RowAction;

#[derive(Clone, Debug, PartialEq, Eq)]
struct EditTarget {
    id: TorrentId,
    name: String,
    location: String,
}

/// Edit dialog inputs, built from the first target row.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct EditForm {
    target: Option<EditTarget>,
    /// New name for the torrent's top-level path.
    pub name: String,
    /// New download location.
    pub location: String,
    /// Move existing data when relocating.
    pub move_data: bool,
    /// Labels being edited.
    pub labels: LabelEditor,
}

impl EditForm {
    /// Form for `row`, or an inert form when there is none.
    #[must_use]
    pub fn new(row: Option<&Torrent>) -> Self {
        row.map_or_else(Self::default, |row| Self {
            target: Some(EditTarget {
                id: row.id,
                name: row.name.clone(),
                location: row.download_dir.clone(),
            }),
            name: row.name.clone(),
            location: row.download_dir.clone(),
            move_data: false,
            labels: LabelEditor::new(row.decoded_labels()),
        })
    }

    /// Form for an open Edit action.
    #[must_use]
    pub fn for_action(action: &RowAction) -> Self {
        Self::new(action.target_rows().first())
    }

    /// Id of the edited torrent.
    #[must_use]
    pub fn target_id(&self) -> Option<TorrentId> {
        self.target.as_ref().map(|target| target.id)
    }

    /// Mutations for the fields that changed.
    ///
    /// Labels are sent whenever the edited set is non-empty; clearing every
    /// label is not propagated.
    #[must_use]
    pub fn submit(&self) -> Vec<MutationRequest> {
        let Some(target) = &self.target else {
            return Vec::new();
        };
        let ids = vec![target.id];
        let mut requests = Vec::new();
        if self.name != target.name {
            requests.push(MutationRequest::RenamePath {
                ids: ids.clone(),
                path: target.name.clone(),
                name: self.name.clone(),
            });
        }
        if self.location != target.location {
            requests.push(MutationRequest::SetLocation {
                ids: ids.clone(),
                location: self.location.clone(),
                move_data: self.move_data,
            });
        }
        if !self.labels.is_empty() {
            requests.push(MutationRequest::SetLabels {
                ids,
                labels: self.labels.encoded(),
            });
        }
        requests
    }
}
