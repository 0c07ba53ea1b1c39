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
#![allow(clippy::module_name_repetitions)]

//! Daemon-agnostic torrent records, label codec, and mutation requests.
//!
//! Layout: `model` (torrent snapshots as polled from the daemon), `label`
//! (label string codec), `service` (mutation requests and the collaborator
//! trait that executes them), `error.rs` (crate errors).

pub mod error;
pub mod label;
pub mod model;
pub mod service;

pub use error::{TorrentCoreError, TorrentCoreResult};
pub use label::{Label, LabelDecodeError, decode, decode_all, encode, try_decode};
pub use model::{
    SessionInfo, Torrent, TorrentHealth, TorrentId, TorrentStatus, TrackerStat,
};
pub use service::{
    AddSource, MutationOutcome, MutationRequest, TorrentMutations, issue_all,
};
