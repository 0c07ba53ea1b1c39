//! Shared UI data carriers.

/// Notification variants used across the UI.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    /// Success toast.
    Success,
    /// Error toast.
    Error,
}

/// Transient, non-blocking notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    /// Monotonic identifier assigned by the store; zero until pushed.
    pub id: u64,
    /// Display message.
    pub message: String,
    /// Severity classification.
    pub kind: ToastKind,
}

impl Notification {
    /// Build an error notification.
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            id: 0,
            message: message.into(),
            kind: ToastKind::Error,
        }
    }

    /// Build a success notification.
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            id: 0,
            message: message.into(),
            kind: ToastKind::Success,
        }
    }
}
