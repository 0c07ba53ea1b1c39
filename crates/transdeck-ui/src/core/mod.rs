//! Cross-feature state and helpers.

pub mod logic;
pub mod store;
