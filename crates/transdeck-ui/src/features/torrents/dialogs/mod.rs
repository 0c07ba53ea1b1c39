//! Dialog form models.
//!
//! Every form is built from an open [`RowAction`](crate::features::torrents::actions::RowAction)
//! and dropped when the dispatcher's generation moves, so a reopened dialog
//! always starts from defaults. Submitting returns the mutations to issue; it
//! never performs I/O.

pub mod add;
pub mod delete;
pub mod edit;

pub use add::{AddForm, AddFormError, ClipboardError};
pub use delete::DeleteForm;
pub use edit::EditForm;
