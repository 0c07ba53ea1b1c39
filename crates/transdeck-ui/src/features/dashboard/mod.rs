//! Dashboard summary surface.

pub mod summary;
