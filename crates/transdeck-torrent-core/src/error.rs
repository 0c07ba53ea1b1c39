//! Error types for torrent core services.

use thiserror::Error;

use crate::model::TorrentId;

/// Primary error type for torrent record handling.
#[derive(Debug, Error)]
pub enum TorrentCoreError {
    /// Daemon reported a status code outside the known range.
    #[error("unknown torrent status code")]
    UnknownStatus {
        /// Raw status code from the daemon payload.
        code: u8,
    },
    /// Torrent collection payload could not be parsed.
    #[error("invalid torrent payload")]
    InvalidPayload {
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },
    /// A mutation was rejected by the collaborator.
    #[error("torrent mutation failed")]
    MutationFailed {
        /// Operation identifier.
        operation: &'static str,
        /// Torrents the mutation targeted.
        ids: Vec<TorrentId>,
        /// Underlying failure.
        #[source]
        source: anyhow::Error,
    },
}

impl TorrentCoreError {
    /// Operation identifier when the error stems from a mutation.
    #[must_use]
    pub const fn operation(&self) -> Option<&'static str> {
        match self {
            Self::MutationFailed { operation, .. } => Some(operation),
            Self::UnknownStatus { .. } | Self::InvalidPayload { .. } => None,
        }
    }
}

/// Convenience alias for torrent core results.
pub type TorrentCoreResult<T> = Result<T, TorrentCoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operation_is_only_reported_for_mutations() {
        let err = TorrentCoreError::MutationFailed {
            operation: "torrent-start",
            ids: vec![1],
            source: anyhow::anyhow!("boom"),
        };
        assert_eq!(err.operation(), Some("torrent-start"));
        assert_eq!(TorrentCoreError::UnknownStatus { code: 9 }.operation(), None);
    }
}
