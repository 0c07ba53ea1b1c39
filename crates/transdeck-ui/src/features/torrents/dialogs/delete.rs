//! Delete confirmation form.

use transdeck_torrent_core::{MutationRequest, TorrentId};

use crate::features::torrents::actions::RowAction;

/// Delete dialog inputs.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct DeleteForm {
    ids: Vec<TorrentId>,
    /// Remove downloaded data as well.
    pub delete_data: bool,
}

impl DeleteForm {
    /// Form for an open Delete action; `delete_data` starts unchecked.
    #[must_use]
    pub fn for_action(action: &RowAction) -> Self {
        Self {
            ids: action.target_ids(),
            delete_data: false,
        }
    }

    /// A single delete for every target, or nothing without targets.
    #[must_use]
    pub fn submit(&self) -> Option<MutationRequest> {
        (!self.ids.is_empty()).then(|| MutationRequest::Delete {
            ids: self.ids.clone(),
            delete_data: self.delete_data,
        })
    }
}
