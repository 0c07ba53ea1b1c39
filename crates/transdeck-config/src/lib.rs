#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]

//! Typed dashboard configuration loaded from JSON documents.
//!
//! Layout: `model.rs` (typed config models), `defaults.rs` (default values),
//! `validate.rs` (validation helpers), `loader.rs` (reading documents).

mod defaults;
pub mod error;
pub mod loader;
pub mod model;
pub mod validate;

pub use defaults::{
    DEFAULT_MAX_UPLOAD_BYTES, DEFAULT_PAGE_SIZE, DEFAULT_PAGE_SIZE_OPTIONS, DEFAULT_POLL_INTERVAL_MS,
};
pub use error::{ConfigError, ConfigResult};
pub use loader::{from_json_str, load_from_path};
pub use model::{ActivityRule, DashboardConfig, LogFormatChoice, LoggingSettings, SortPreference};
