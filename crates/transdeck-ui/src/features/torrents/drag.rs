//! Window-level drag-and-drop tracking.
//!
//! # Design
//! - Nested elements fire their own enter/leave pairs; a depth counter decides
//!   when the pointer actually left the window.
//! - `dragover` only suppresses the browser's default navigation.
//! - The tracker is generic over the dropped item so it runs natively in tests
//!   and over `web_sys::File` in the browser.

use crate::features::torrents::actions::{DialogType, RowActionDispatcher};

/// Whether a drag is over the window.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum DragPhase {
    /// Nothing is being dragged over the window.
    #[default]
    Idle,
    /// Something is being dragged over the window.
    Dragging,
}

/// Drag events after the browser payload has been read.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DragSignal<F> {
    /// `dragenter` on the window or a descendant.
    Enter,
    /// `dragleave` on the window or a descendant.
    Leave,
    /// `dragover`.
    Over,
    /// `drop`, with the first dropped file when there is one.
    Drop(Option<F>),
}

/// Nesting-aware drag state machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct DragTracker {
    depth: i32,
    phase: DragPhase,
}

impl DragTracker {
    /// Current phase.
    #[must_use]
    pub const fn phase(&self) -> DragPhase {
        self.phase
    }

    /// Current nesting depth, never negative.
    #[must_use]
    pub const fn depth(&self) -> i32 {
        self.depth
    }

    /// Whether a drag is in progress.
    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        matches!(self.phase, DragPhase::Dragging)
    }

    /// Handle `dragenter`.
    pub const fn enter(&mut self) {
        self.depth = self.depth.saturating_add(1);
        self.phase = DragPhase::Dragging;
    }

    /// Handle `dragleave`; reaching depth zero ends the drag.
    pub const fn leave(&mut self) {
        self.depth = self.depth.saturating_sub(1);
        if self.depth <= 0 {
            self.depth = 0;
            self.phase = DragPhase::Idle;
        }
    }

    /// Handle `dragover`. Returns whether the default action must be prevented.
    #[must_use]
    pub const fn over(&self) -> bool {
        true
    }

    /// Handle `drop`: end the drag and hand back the first file.
    pub fn drop<F>(&mut self, files: impl IntoIterator<Item = F>) -> Option<F> {
        self.reset();
        files.into_iter().next()
    }

    /// Forget any drag in progress; used when the Add dialog closes.
    pub const fn reset(&mut self) {
        self.depth = 0;
        self.phase = DragPhase::Idle;
    }

    /// Whether the "drop to upload" overlay is shown.
    #[must_use]
    pub fn overlay_visible(&self, dispatcher: &RowActionDispatcher) -> bool {
        self.is_dragging() && !dispatcher.is_open(DialogType::Add)
    }

    /// Feed one signal; returns the dropped file, if any.
    pub fn apply<F>(&mut self, signal: DragSignal<F>) -> Option<F> {
        match signal {
            DragSignal::Enter => {
                self.enter();
                None
            }
            DragSignal::Leave => {
                self.leave();
                None
            }
            DragSignal::Over => None,
            DragSignal::Drop(file) => self.drop(file),
        }
    }
}
