//! Label editing feature slice.
//!
//! # Design
//! - Keep label list editing in one place shared by the edit dialog.
//! - Encoding for the daemon goes through the torrent-core codec only.

pub mod logic;
