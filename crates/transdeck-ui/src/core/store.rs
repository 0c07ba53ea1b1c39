//! App-wide yewdux store and its reducers.
//!
//! # Design
//! - Keep shared dashboard state in one store to avoid ad-hoc contexts.
//! - Reducers are plain functions over `&mut DashboardStore` so they run in
//!   native tests; components call them through `Dispatch::reduce_mut`.
//! - The table itself is derived, never stored; see [`DashboardStore::table`].

use std::rc::Rc;

use transdeck_config::DashboardConfig;
use transdeck_torrent_core::{MutationOutcome, SessionInfo, Torrent};
use yewdux::store::Store;

use crate::app::preferences::{
    PreferenceStore, load_hidden_columns, load_page_size, save_hidden_columns, save_page_size,
};
use crate::features::dashboard::summary::{SummaryCards, summarize};
use crate::features::torrents::actions::{DialogType, PendingUpload, RowActionDispatcher};
use crate::features::torrents::columns::ColumnId;
use crate::features::torrents::drag::{DragSignal, DragTracker};
use crate::features::torrents::state::{TorrentsState, select_rows, set_torrents};
use crate::features::torrents::table::{TableEngine, TableView};
use crate::features::torrents::view_state::ViewState;
use crate::models::Notification;

/// Global dashboard store.
#[derive(Clone, Debug, PartialEq, Store, Default)]
pub struct DashboardStore {
    /// Loaded configuration.
    pub config: DashboardConfig,
    /// Latest polled collection.
    pub torrents: TorrentsState,
    /// Table view configuration.
    pub view: ViewState,
    /// Open dialog, if any.
    pub dispatcher: RowActionDispatcher,
    /// Window drag state.
    pub drag: DragTracker,
    /// Latest session values.
    pub session: SessionInfo,
    /// Visible notifications, oldest first.
    pub notifications: Vec<Notification>,
    next_notification_id: u64,
}

impl DashboardStore {
    /// Build the store from configuration and persisted preferences.
    #[must_use]
    pub fn new(config: DashboardConfig, preferences: &dyn PreferenceStore) -> Self {
        let mut view = ViewState::from_config(&config, load_page_size(preferences, &config));
        view.restore_hidden_columns(load_hidden_columns(preferences));
        Self {
            config,
            view,
            ..Self::default()
        }
    }

    /// Current table view, memoized by `engine`.
    #[must_use]
    pub fn table(&self, engine: &TableEngine) -> Rc<TableView> {
        engine.view(
            &self.torrents,
            &self.view,
            self.config.activity_rule,
            &self.session.download_dir,
        )
    }

    /// Summary card figures for the loaded collection.
    #[must_use]
    pub fn summary(&self) -> SummaryCards {
        summarize(&self.torrents.torrents, self.config.activity_rule)
    }

    /// Selected rows still present in the collection.
    #[must_use]
    pub fn selected_rows(&self) -> Vec<Torrent> {
        select_rows(
            &self.torrents,
            &self.view.effective_selection(&self.torrents),
        )
    }

    /// Whether the "drop to upload" overlay is shown.
    #[must_use]
    pub fn drop_overlay_visible(&self) -> bool {
        self.drag.overlay_visible(&self.dispatcher)
    }
}

/// Replace the collection with a poll result and prune stale selection.
pub fn apply_poll(store: &mut DashboardStore, torrents: Vec<Torrent>) {
    set_torrents(&mut store.torrents, torrents);
    store.view.prune_selection(&store.torrents);
}

/// Record new session values.
pub fn apply_session(store: &mut DashboardStore, session: SessionInfo) {
    store.session = session;
}

/// Show a notification and return its id.
pub fn push_notification(store: &mut DashboardStore, mut notification: Notification) -> u64 {
    store.next_notification_id = store.next_notification_id.wrapping_add(1);
    notification.id = store.next_notification_id;
    store.notifications.push(notification);
    store.next_notification_id
}

/// Remove a notification by id.
pub fn dismiss_notification(store: &mut DashboardStore, id: u64) {
    store.notifications.retain(|notification| notification.id != id);
}

/// Feed a window drag event; a dropped file opens the Add dialog with it.
pub fn handle_drag(store: &mut DashboardStore, signal: DragSignal<PendingUpload>) {
    if let Some(upload) = store.drag.apply(signal) {
        store.dispatcher.open_add_with_upload(upload);
    }
}

/// Deliver a dropped file once it has been read.
///
/// The drop itself has already ended the drag; a failed read becomes an
/// error notification naming the file.
pub fn handle_dropped_file(store: &mut DashboardStore, read: Result<PendingUpload, String>) {
    match read {
        Ok(upload) => store.dispatcher.open_add_with_upload(upload),
        Err(name) => {
            push_notification(store, Notification::error(format!("{name} could not be read.")));
        }
    }
}

/// Close the open dialog; closing Add also ends any drag in progress.
pub fn close_dialog(store: &mut DashboardStore) {
    if store.dispatcher.is_open(DialogType::Add) {
        store.drag.reset();
    }
    store.dispatcher.close();
}

/// Change and persist the page size.
pub fn set_page_size(
    store: &mut DashboardStore,
    preferences: &dyn PreferenceStore,
    page_size: usize,
) {
    if page_size == 0 {
        return;
    }
    store.view.set_page_size(page_size);
    save_page_size(preferences, page_size);
}

/// Change and persist column visibility.
pub fn set_column_visible(
    store: &mut DashboardStore,
    preferences: &dyn PreferenceStore,
    column: ColumnId,
    visible: bool,
) {
    store.view.set_column_visible(column, visible);
    save_hidden_columns(preferences, store.view.hidden_columns());
}

/// Surface failed mutations as error notifications.
pub fn report_outcomes(store: &mut DashboardStore, outcomes: &[MutationOutcome]) {
    for outcome in outcomes {
        if let Some(err) = &outcome.error {
            let message = format!("{} failed: {err}", outcome.request.operation());
            push_notification(store, Notification::error(message));
        }
    }
}
