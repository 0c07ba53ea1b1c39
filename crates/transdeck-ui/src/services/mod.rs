//! Browser bindings for the dashboard engine (wasm only).

pub mod clipboard;
pub mod drag_listener;
pub mod storage;
