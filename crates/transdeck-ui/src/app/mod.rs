//! App shell helpers that outlive a single view.

pub mod preferences;
