//! Window drag-and-drop listeners feeding the store's drag tracker.
//!
//! # Design
//! - Listeners are registered on `window` and removed when the handle drops.
//! - `dragover` and `drop` must prevent the default so the browser does not
//!   navigate to the dropped file.
//! - A drop ends the drag synchronously. The first dropped file is read
//!   afterwards and delivered separately, as bytes or as the name of the file
//!   that could not be read.

use std::rc::Rc;

use gloo::console;
use gloo::events::{EventListener, EventListenerOptions};
use gloo::utils::window;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{JsFuture, spawn_local};
use web_sys::{DragEvent, File};
use yewdux::dispatch::Dispatch;

use crate::core::store::{DashboardStore, handle_drag, handle_dropped_file};
use crate::features::torrents::actions::PendingUpload;
use crate::features::torrents::drag::DragSignal;

type SignalSink = Rc<dyn Fn(DragSignal<PendingUpload>)>;
type UploadSink = Rc<dyn Fn(Result<PendingUpload, String>)>;

/// Registered window drag listeners; dropping the handle removes them.
pub struct DragListener {
    _listeners: [EventListener; 4],
}

impl DragListener {
    /// Attach listeners that forward every signal to `sink` and every read
    /// dropped file to `on_file`.
    #[must_use]
    pub fn attach(
        sink: impl Fn(DragSignal<PendingUpload>) + 'static,
        on_file: impl Fn(Result<PendingUpload, String>) + 'static,
    ) -> Self {
        let sink: SignalSink = Rc::new(sink);
        let on_file: UploadSink = Rc::new(on_file);
        let target = window();
        let enter = EventListener::new(&target, "dragenter", {
            let sink = sink.clone();
            move |_event| sink(DragSignal::Enter)
        });
        let leave = EventListener::new(&target, "dragleave", {
            let sink = sink.clone();
            move |_event| sink(DragSignal::Leave)
        });
        let over = EventListener::new_with_options(
            &target,
            "dragover",
            EventListenerOptions::enable_prevent_default(),
            {
                let sink = sink.clone();
                move |event| {
                    event.prevent_default();
                    sink(DragSignal::Over);
                }
            },
        );
        let dropped = EventListener::new_with_options(
            &target,
            "drop",
            EventListenerOptions::enable_prevent_default(),
            move |event| {
                event.prevent_default();
                let file = event
                    .dyn_ref::<DragEvent>()
                    .and_then(DragEvent::data_transfer)
                    .and_then(|transfer| transfer.files())
                    .and_then(|files| files.get(0));
                sink(DragSignal::Drop(None));
                if let Some(file) = file {
                    let on_file = on_file.clone();
                    spawn_local(async move {
                        on_file(read_upload(file).await);
                    });
                }
            },
        );
        Self {
            _listeners: [enter, leave, over, dropped],
        }
    }

    /// Attach listeners that reduce into the global dashboard store.
    #[must_use]
    pub fn for_store(dispatch: Dispatch<DashboardStore>) -> Self {
        let files = dispatch.clone();
        Self::attach(
            move |signal| dispatch.reduce_mut(|store| handle_drag(store, signal)),
            move |read| files.reduce_mut(|store| handle_dropped_file(store, read)),
        )
    }
}

async fn read_upload(file: File) -> Result<PendingUpload, String> {
    match JsFuture::from(file.array_buffer()).await {
        Ok(buffer) => {
            let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
            Ok(PendingUpload::new(file.name(), bytes))
        }
        Err(err) => {
            console::error!("dropped file read failed", file.name(), err);
            Err(file.name())
        }
    }
}
