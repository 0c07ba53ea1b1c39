//! Torrent table surface: collection state, filters, view state, table
//! computation, row actions, dialogs, drag ingestion, and tracker replacement.

pub mod actions;
pub mod columns;
pub mod dialogs;
pub mod drag;
pub mod filters;
pub mod state;
pub mod table;
pub mod tracker_replace;
pub mod view_state;
