//! Row action dispatcher and quick torrent actions.
//!
//! # Design
//! - One optional [`RowAction`] drives every dialog; visibility is derived from
//!   its `dialog_type`, so opening a new action closes the previous one.
//! - Actions are replaced, never edited: target rows are an `Rc<[Torrent]>`
//!   snapshot that background polls cannot change.
//! - `generation` increases on every open and close; dialog forms rebuild from
//!   defaults whenever it moves.

use std::rc::Rc;

use transdeck_torrent_core::{MutationRequest, Torrent, TorrentId, TorrentStatus};

/// Dialogs that can be requested from the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DialogType {
    /// Add a torrent from a file or link.
    Add,
    /// Rename, relocate, or relabel a torrent.
    Edit,
    /// Remove torrents.
    Delete,
    /// Replace a tracker URL across torrents.
    ReplaceTracker,
}

/// File picked or dropped for upload, read into memory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingUpload {
    /// File name as reported by the browser.
    pub name: String,
    /// File contents.
    pub bytes: Rc<[u8]>,
}

impl PendingUpload {
    /// Wrap a file read from the browser.
    #[must_use]
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            bytes: bytes.into(),
        }
    }

    /// Size in bytes.
    #[must_use]
    pub fn size(&self) -> u64 {
        u64::try_from(self.bytes.len()).unwrap_or(u64::MAX)
    }

    /// Whether the name carries the `.torrent` extension.
    #[must_use]
    pub fn is_torrent_file(&self) -> bool {
        self.name.to_ascii_lowercase().ends_with(".torrent")
    }
}

/// Pending dialog request.
#[derive(Clone, Debug, PartialEq)]
pub struct RowAction {
    dialog_type: DialogType,
    target_rows: Rc<[Torrent]>,
    upload: Option<PendingUpload>,
}

impl RowAction {
    /// Requested dialog.
    #[must_use]
    pub const fn dialog_type(&self) -> DialogType {
        self.dialog_type
    }

    /// Snapshot of the rows the dialog operates on.
    #[must_use]
    pub fn target_rows(&self) -> &[Torrent] {
        &self.target_rows
    }

    /// Ids of the target rows, in snapshot order.
    #[must_use]
    pub fn target_ids(&self) -> Vec<TorrentId> {
        self.target_rows.iter().map(|row| row.id).collect()
    }

    /// File handed over by a drop event, for Add actions.
    #[must_use]
    pub const fn upload(&self) -> Option<&PendingUpload> {
        self.upload.as_ref()
    }
}

/// Single-writer holder of the current [`RowAction`].
#[derive(Clone, Debug, PartialEq, Default)]
pub struct RowActionDispatcher {
    current: Option<RowAction>,
    generation: u64,
}

impl RowActionDispatcher {
    /// Replace the current action. Empty targets are allowed; the dialog
    /// decides how to render them.
    pub fn open(&mut self, dialog_type: DialogType, target_rows: Vec<Torrent>) {
        self.replace(Some(RowAction {
            dialog_type,
            target_rows: target_rows.into(),
            upload: None,
        }));
    }

    /// Open an empty Add dialog.
    pub fn open_add(&mut self) {
        self.open(DialogType::Add, Vec::new());
    }

    /// Open the Add dialog carrying a dropped file.
    pub fn open_add_with_upload(&mut self, upload: PendingUpload) {
        self.replace(Some(RowAction {
            dialog_type: DialogType::Add,
            target_rows: Rc::from(Vec::new()),
            upload: Some(upload),
        }));
    }

    /// Close whatever dialog is open.
    pub fn close(&mut self) {
        self.replace(None);
    }

    fn replace(&mut self, next: Option<RowAction>) {
        self.current = next;
        self.generation = self.generation.wrapping_add(1);
    }

    /// Current action, if a dialog is open.
    #[must_use]
    pub const fn current(&self) -> Option<&RowAction> {
        self.current.as_ref()
    }

    /// Whether the dialog of `dialog_type` is the one shown.
    #[must_use]
    pub fn is_open(&self, dialog_type: DialogType) -> bool {
        self.current
            .as_ref()
            .is_some_and(|action| action.dialog_type == dialog_type)
    }

    /// Open/close counter used to reset dialog forms.
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Single-row menu: act on the row the menu belongs to.
    pub fn row_menu(&mut self, row: &Torrent, dialog_type: DialogType) {
        self.open(dialog_type, vec![row.clone()]);
    }

    /// Context menu: act on the selection when several rows are checked,
    /// otherwise on the clicked row.
    pub fn context_menu(&mut self, row: &Torrent, selection: &[Torrent], dialog_type: DialogType) {
        self.open(dialog_type, context_targets(row, selection));
    }

    /// Toolbar "Add" button.
    pub fn toolbar_add(&mut self) {
        self.open_add();
    }

    /// Toolbar "Replace tracker" button; candidates are all loaded rows.
    pub fn replace_tracker(&mut self, loaded_rows: &[Torrent]) {
        self.open(DialogType::ReplaceTracker, loaded_rows.to_vec());
    }
}

/// Rows a context-menu action applies to.
#[must_use]
pub fn context_targets(row: &Torrent, selection: &[Torrent]) -> Vec<Torrent> {
    if selection.len() > 1 {
        selection.to_vec()
    } else {
        vec![row.clone()]
    }
}

/// Quick actions issued without a dialog.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TorrentAction {
    /// Start transfers.
    Start,
    /// Stop transfers.
    Stop,
}

impl TorrentAction {
    /// Start/stop entry offered for a row in `status`.
    #[must_use]
    pub const fn for_status(status: TorrentStatus) -> Self {
        match status {
            TorrentStatus::Stopped => Self::Start,
            _ => Self::Stop,
        }
    }

    /// Mutation for `ids`, or `None` when nothing is targeted.
    #[must_use]
    pub fn request(self, ids: Vec<TorrentId>) -> Option<MutationRequest> {
        if ids.is_empty() {
            return None;
        }
        Some(match self {
            Self::Start => MutationRequest::Start { ids },
            Self::Stop => MutationRequest::Stop { ids },
        })
    }
}

/// Bulk start for the effective selection.
#[must_use]
pub fn start_selected(selection: Vec<TorrentId>) -> Option<MutationRequest> {
    TorrentAction::Start.request(selection)
}

/// Bulk stop for the effective selection.
#[must_use]
pub fn stop_selected(selection: Vec<TorrentId>) -> Option<MutationRequest> {
    TorrentAction::Stop.request(selection)
}

#[cfg(test)]
mod tests {
    use super::*;
    use transdeck_test_support::fixtures::TorrentBuilder;

    #[test]
    fn last_open_wins_and_visibility_is_exclusive() {
        let row = TorrentBuilder::new(1).build();
        let mut dispatcher = RowActionDispatcher::default();
        dispatcher.row_menu(&row, DialogType::Edit);
        dispatcher.row_menu(&row, DialogType::Delete);
        assert!(dispatcher.is_open(DialogType::Delete));
        assert!(!dispatcher.is_open(DialogType::Edit));
        dispatcher.close();
        assert!(dispatcher.current().is_none());
        assert_eq!(dispatcher.generation(), 3);
    }

    #[test]
    fn snapshot_is_independent_of_source_rows() {
        let mut rows = vec![TorrentBuilder::new(1).name("before").build()];
        let mut dispatcher = RowActionDispatcher::default();
        dispatcher.open(DialogType::Edit, rows.clone());
        rows[0].name = "after".into();
        let action = dispatcher.current().expect("open action");
        assert_eq!(action.target_rows()[0].name, "before");
        assert_eq!(action.target_ids(), vec![1]);
    }

    #[test]
    fn context_menu_prefers_multi_selection() {
        let row = TorrentBuilder::new(1).build();
        let selection = vec![TorrentBuilder::new(2).build(), TorrentBuilder::new(3).build()];
        assert_eq!(context_targets(&row, &selection).len(), 2);
        assert_eq!(context_targets(&row, &selection[..1])[0].id, 1);

        let mut dispatcher = RowActionDispatcher::default();
        dispatcher.context_menu(&row, &selection, DialogType::Delete);
        let ids = dispatcher.current().map(RowAction::target_ids);
        assert_eq!(ids, Some(vec![2, 3]));
    }

    #[test]
    fn drop_upload_rides_on_add_action() {
        let mut dispatcher = RowActionDispatcher::default();
        dispatcher.open_add_with_upload(PendingUpload::new("a.torrent", vec![1, 2]));
        let action = dispatcher.current().expect("add open");
        assert_eq!(action.dialog_type(), DialogType::Add);
        assert!(action.target_rows().is_empty());
        assert_eq!(action.upload().map(PendingUpload::size), Some(2));

        dispatcher.toolbar_add();
        assert!(dispatcher.current().and_then(RowAction::upload).is_none());
    }

    #[test]
    fn quick_actions_follow_status() {
        assert_eq!(
            TorrentAction::for_status(TorrentStatus::Stopped),
            TorrentAction::Start
        );
        assert_eq!(
            TorrentAction::for_status(TorrentStatus::QueuedSeed),
            TorrentAction::Stop
        );
        assert_eq!(
            start_selected(vec![1, 2]),
            Some(MutationRequest::Start { ids: vec![1, 2] })
        );
        assert_eq!(stop_selected(Vec::new()), None);
    }

    #[test]
    fn upload_extension_check_ignores_case() {
        assert!(PendingUpload::new("Linux.TORRENT", Vec::new()).is_torrent_file());
        assert!(!PendingUpload::new("notes.txt", Vec::new()).is_torrent_file());
    }
}
