//! End-to-end behavior of the dashboard table engine and dialogs.

use std::cell::RefCell;

use async_trait::async_trait;
use transdeck_config::{ActivityRule, DashboardConfig};
use transdeck_test_support::fixtures::{TorrentBuilder, sample_collection};
use transdeck_torrent_core::{
    AddSource, Label, MutationRequest, TorrentId, TorrentMutations, TorrentStatus, issue_all,
};
use transdeck_ui::app::preferences::MemoryPreferences;
use transdeck_ui::core::store::{DashboardStore, apply_poll, close_dialog, handle_drag};
use transdeck_ui::features::torrents::actions::{DialogType, PendingUpload};
use transdeck_ui::features::torrents::dialogs::{AddForm, EditForm};
use transdeck_ui::features::torrents::drag::{DragPhase, DragSignal, DragTracker};
use transdeck_ui::features::torrents::filters::StatusTab;
use transdeck_ui::features::torrents::table::{TableEngine, compute_view};
use transdeck_ui::features::torrents::tracker_replace::ReplaceTrackerForm;
use transdeck_ui::features::torrents::view_state::ViewState;

#[derive(Default)]
struct RecordingClient {
    tracker_lists: RefCell<Vec<(Vec<TorrentId>, Vec<String>)>>,
}

#[async_trait(?Send)]
impl TorrentMutations for RecordingClient {
    async fn start(&self, _ids: &[TorrentId]) -> anyhow::Result<()> {
        anyhow::bail!("unexpected start")
    }

    async fn stop(&self, _ids: &[TorrentId]) -> anyhow::Result<()> {
        anyhow::bail!("unexpected stop")
    }

    async fn delete(&self, _ids: &[TorrentId], _delete_data: bool) -> anyhow::Result<()> {
        anyhow::bail!("unexpected delete")
    }

    async fn add(&self, _directory: &str, _source: &AddSource) -> anyhow::Result<()> {
        anyhow::bail!("unexpected add")
    }

    async fn rename_path(
        &self,
        _ids: &[TorrentId],
        _path: &str,
        _name: &str,
    ) -> anyhow::Result<()> {
        anyhow::bail!("unexpected rename")
    }

    async fn set_location(
        &self,
        _ids: &[TorrentId],
        _location: &str,
        _move_data: bool,
    ) -> anyhow::Result<()> {
        anyhow::bail!("unexpected set_location")
    }

    async fn set_labels(&self, _ids: &[TorrentId], _labels: &[String]) -> anyhow::Result<()> {
        anyhow::bail!("unexpected set_labels")
    }

    async fn set_tracker_list(
        &self,
        ids: &[TorrentId],
        announce_list: &[String],
    ) -> anyhow::Result<()> {
        self.tracker_lists
            .borrow_mut()
            .push((ids.to_vec(), announce_list.to_vec()));
        Ok(())
    }
}

#[test]
fn active_tab_shows_transferring_torrents_only() {
    let torrents = vec![
        TorrentBuilder::new(1).status(TorrentStatus::Stopped).build(),
        TorrentBuilder::new(2)
            .status(TorrentStatus::Downloading)
            .rates(100, 0)
            .build(),
    ];
    let mut view = ViewState::default();
    view.set_tab(StatusTab::Active);

    let table = compute_view(&torrents, &view, ActivityRule::TransferRate, "");
    assert_eq!(table.page_ids(), vec![2]);
    assert_eq!(table.tab_counts.stopped, 1);
    assert_eq!(table.tab_counts.active, 1);
    assert_eq!(table.tab_counts.all, 2);
}

#[test]
fn tab_counts_match_each_tab_regardless_of_selection() {
    let torrents = sample_collection();
    for query in ["", "iso", "sintel", "nothing"] {
        for label in [None, Some("linux")] {
            let mut base = ViewState::default();
            base.set_query(query);
            if let Some(label) = label {
                base.toggle_label(label);
            }
            let reference = compute_view(&torrents, &base, ActivityRule::TransferRate, "");
            for tab in StatusTab::ALL {
                let mut view = base.clone();
                view.set_tab(tab);
                let table = compute_view(&torrents, &view, ActivityRule::TransferRate, "");
                assert_eq!(table.tab_counts, reference.tab_counts);
                assert_eq!(table.total, reference.tab_counts.get(tab), "{query:?} {tab:?}");
                assert_eq!(table.tracker_options, reference.tracker_options);
                assert_eq!(table.label_options, reference.label_options);
            }
        }
    }
}

#[test]
fn malformed_labels_are_skipped_by_the_label_filter() {
    let torrents = vec![
        TorrentBuilder::new(1)
            .raw_label(r#"{"text":"x"}"#)
            .raw_label("not-json")
            .build(),
    ];
    assert_eq!(torrents[0].decoded_labels(), vec![Label::new("x")]);

    let mut view = ViewState::default();
    let unfiltered = compute_view(&torrents, &view, ActivityRule::TransferRate, "");
    assert_eq!(unfiltered.total, 1);
    assert_eq!(unfiltered.label_options, vec!["x".to_string()]);

    view.toggle_label("y");
    assert_eq!(
        compute_view(&torrents, &view, ActivityRule::TransferRate, "").total,
        0
    );

    view.toggle_label("y");
    view.toggle_label("x");
    assert_eq!(
        compute_view(&torrents, &view, ActivityRule::TransferRate, "").total,
        1
    );
}

#[tokio::test]
async fn replace_tracker_issues_one_request_per_match() {
    let candidates = vec![
        TorrentBuilder::new(1)
            .announce("http://a", "http://a/announce")
            .build(),
        TorrentBuilder::new(2)
            .announce("http://c", "http://c/announce")
            .build(),
    ];
    let form = ReplaceTrackerForm {
        old_tracker: "http://a/announce".into(),
        new_tracker: "http://b/announce".into(),
    };
    let matched: Vec<TorrentId> = form.matched(&candidates).iter().map(|t| t.id).collect();
    assert_eq!(matched, vec![1]);

    let client = RecordingClient::default();
    let outcomes = issue_all(&client, form.submit(&candidates)).await;
    assert!(outcomes.iter().all(|outcome| outcome.succeeded()));
    assert_eq!(
        client.tracker_lists.into_inner(),
        vec![(vec![1], vec!["http://b/announce".to_string()])]
    );
}

#[test]
fn drag_sequences_follow_nesting() {
    let mut tracker = DragTracker::default();
    for signal in [DragSignal::Enter, DragSignal::Enter, DragSignal::Leave] {
        tracker.apply::<()>(signal);
    }
    assert_eq!((tracker.phase(), tracker.depth()), (DragPhase::Dragging, 1));

    let mut tracker = DragTracker::default();
    for signal in [DragSignal::Enter, DragSignal::Leave, DragSignal::Leave] {
        tracker.apply::<()>(signal);
    }
    assert_eq!((tracker.phase(), tracker.depth()), (DragPhase::Idle, 0));

    let mut tracker = DragTracker::default();
    for _ in 0..5 {
        tracker.enter();
    }
    tracker.apply::<()>(DragSignal::Drop(None));
    assert_eq!((tracker.phase(), tracker.depth()), (DragPhase::Idle, 0));
}

#[test]
fn add_after_edit_starts_from_defaults() {
    let mut store = DashboardStore::new(DashboardConfig::default(), &MemoryPreferences::default());
    apply_poll(&mut store, sample_collection());
    let engine = TableEngine::new();
    let dirs = store.table(&engine).download_dirs.clone();
    let max = store.config.max_upload_bytes;

    let row = store.torrents.torrents[2].clone();
    store.dispatcher.row_menu(&row, DialogType::Edit);
    let edit_generation = store.dispatcher.generation();
    let mut edit = EditForm::for_action(store.dispatcher.current().expect("edit open"));
    edit.name = "renamed".into();
    edit.location = "/elsewhere".into();
    close_dialog(&mut store);

    store.dispatcher.toolbar_add();
    assert_ne!(store.dispatcher.generation(), edit_generation);
    let add = AddForm::for_action(store.dispatcher.current().expect("add open"), &dirs, max);
    assert_eq!(add.directory, "/downloads");
    assert!(add.magnet_or_url.is_empty());
    assert!(add.upload().is_none());
    assert!(add.upload_error().is_none());
}

#[test]
fn dropped_file_reaches_the_add_form() {
    let mut store = DashboardStore::new(DashboardConfig::default(), &MemoryPreferences::default());
    handle_drag(&mut store, DragSignal::Enter);
    handle_drag(
        &mut store,
        DragSignal::Drop(Some(PendingUpload::new("movie.torrent", vec![1, 2, 3]))),
    );
    let action = store.dispatcher.current().expect("add open");
    assert_eq!(action.dialog_type(), DialogType::Add);

    let form = AddForm::for_action(action, &["/srv".to_string()], 1024);
    assert_eq!(form.upload().map(PendingUpload::size), Some(3));
    let request = form.submit().expect("valid upload");
    assert!(matches!(
        request,
        MutationRequest::Add {
            source: AddSource::Metainfo { .. },
            ..
        }
    ));
}

#[test]
fn engine_memo_tracks_poll_versions() {
    let mut store = DashboardStore::new(DashboardConfig::default(), &MemoryPreferences::default());
    let engine = TableEngine::new();
    apply_poll(&mut store, sample_collection());
    let first = store.table(&engine);
    assert!(std::rc::Rc::ptr_eq(&first, &store.table(&engine)));

    apply_poll(&mut store, sample_collection());
    let second = store.table(&engine);
    assert!(!std::rc::Rc::ptr_eq(&first, &second));
    assert_eq!(first.page_ids(), second.page_ids());
}
