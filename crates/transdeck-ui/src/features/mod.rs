//! Feature slices of the dashboard.

pub mod dashboard;
pub mod labels;
pub mod torrents;
