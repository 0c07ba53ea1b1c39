//! Mutation requests and the collaborator trait that carries them to the daemon.
//!
//! The dashboard only decides *what* to call and *with which ids*; the transport
//! lives behind [`TorrentMutations`]. Requests are fire-and-forget: each one runs
//! to completion or failure on its own and a failure never affects its siblings.

use async_trait::async_trait;
use futures::future::join_all;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::TorrentCoreError;
use crate::model::TorrentId;

/// Source for a newly added torrent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AddSource {
    /// Base64-encoded `.torrent` metainfo.
    Metainfo {
        /// Encoded file contents.
        base64: String,
    },
    /// Magnet link or URL to a `.torrent` file.
    Filename {
        /// Link text as entered by the user.
        value: String,
    },
}

/// A single remote mutation the dashboard wants to issue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum MutationRequest {
    /// Start torrents.
    Start {
        /// Target torrents.
        ids: Vec<TorrentId>,
    },
    /// Stop torrents.
    Stop {
        /// Target torrents.
        ids: Vec<TorrentId>,
    },
    /// Remove torrents, optionally deleting local data.
    Delete {
        /// Target torrents.
        ids: Vec<TorrentId>,
        /// Whether downloaded data is removed as well.
        delete_data: bool,
    },
    /// Add a torrent into a save directory.
    Add {
        /// Save directory.
        directory: String,
        /// Metainfo or link.
        source: AddSource,
    },
    /// Rename a path inside torrents.
    RenamePath {
        /// Target torrents.
        ids: Vec<TorrentId>,
        /// Path being renamed.
        path: String,
        /// New name for the path.
        name: String,
    },
    /// Change the data location of torrents.
    SetLocation {
        /// Target torrents.
        ids: Vec<TorrentId>,
        /// New download directory.
        location: String,
        /// Whether existing data is moved to the new location.
        move_data: bool,
    },
    /// Replace the label set of torrents with encoded labels.
    SetLabels {
        /// Target torrents.
        ids: Vec<TorrentId>,
        /// Encoded label strings.
        labels: Vec<String>,
    },
    /// Replace the tracker announce list of torrents.
    SetTrackerList {
        /// Target torrents.
        ids: Vec<TorrentId>,
        /// Full replacement announce list.
        announce_list: Vec<String>,
    },
}

impl MutationRequest {
    /// Stable operation name used in logs and errors.
    #[must_use]
    pub const fn operation(&self) -> &'static str {
        match self {
            Self::Start { .. } => "torrent-start",
            Self::Stop { .. } => "torrent-stop",
            Self::Delete { .. } => "torrent-remove",
            Self::Add { .. } => "torrent-add",
            Self::RenamePath { .. } => "torrent-rename-path",
            Self::SetLocation { .. } => "torrent-set-location",
            Self::SetLabels { .. } => "torrent-set-labels",
            Self::SetTrackerList { .. } => "torrent-set-tracker-list",
        }
    }

    /// Torrents this request targets (empty for additions).
    #[must_use]
    pub fn ids(&self) -> &[TorrentId] {
        match self {
            Self::Start { ids }
            | Self::Stop { ids }
            | Self::Delete { ids, .. }
            | Self::RenamePath { ids, .. }
            | Self::SetLocation { ids, .. }
            | Self::SetLabels { ids, .. }
            | Self::SetTrackerList { ids, .. } => ids,
            Self::Add { .. } => &[],
        }
    }

    async fn dispatch(&self, client: &dyn TorrentMutations) -> anyhow::Result<()> {
        match self {
            Self::Start { ids } => client.start(ids).await,
            Self::Stop { ids } => client.stop(ids).await,
            Self::Delete { ids, delete_data } => client.delete(ids, *delete_data).await,
            Self::Add { directory, source } => client.add(directory, source).await,
            Self::RenamePath { ids, path, name } => client.rename_path(ids, path, name).await,
            Self::SetLocation {
                ids,
                location,
                move_data,
            } => client.set_location(ids, location, *move_data).await,
            Self::SetLabels { ids, labels } => client.set_labels(ids, labels).await,
            Self::SetTrackerList { ids, announce_list } => {
                client.set_tracker_list(ids, announce_list).await
            }
        }
    }
}

/// Remote mutation surface, implemented by the RPC client.
///
/// Implementations run on the UI event loop, so no `Send` bound is imposed.
#[async_trait(?Send)]
pub trait TorrentMutations {
    /// Start the given torrents.
    async fn start(&self, ids: &[TorrentId]) -> anyhow::Result<()>;

    /// Stop the given torrents.
    async fn stop(&self, ids: &[TorrentId]) -> anyhow::Result<()>;

    /// Remove the given torrents.
    async fn delete(&self, ids: &[TorrentId], delete_data: bool) -> anyhow::Result<()>;

    /// Add a torrent into `directory`.
    async fn add(&self, directory: &str, source: &AddSource) -> anyhow::Result<()>;

    /// Rename `path` to `name` inside the given torrents.
    async fn rename_path(&self, ids: &[TorrentId], path: &str, name: &str)
    -> anyhow::Result<()>;

    /// Point the given torrents at a new location.
    async fn set_location(
        &self,
        ids: &[TorrentId],
        location: &str,
        move_data: bool,
    ) -> anyhow::Result<()>;

    /// Replace the labels of the given torrents.
    async fn set_labels(&self, ids: &[TorrentId], labels: &[String]) -> anyhow::Result<()>;

    /// Replace the announce list of the given torrents.
    async fn set_tracker_list(
        &self,
        ids: &[TorrentId],
        announce_list: &[String],
    ) -> anyhow::Result<()>;
}

/// Result of one issued request.
#[derive(Debug)]
pub struct MutationOutcome {
    /// The request that was issued.
    pub request: MutationRequest,
    /// Failure reported by the collaborator, if any.
    pub error: Option<TorrentCoreError>,
}

impl MutationOutcome {
    /// Whether the collaborator accepted the request.
    #[must_use]
    pub const fn succeeded(&self) -> bool {
        self.error.is_none()
    }
}

/// Issue every request concurrently; failures are logged and reported per request.
pub async fn issue_all(
    client: &dyn TorrentMutations,
    requests: Vec<MutationRequest>,
) -> Vec<MutationOutcome> {
    let pending = requests.into_iter().map(|request| async move {
        let error = match request.dispatch(client).await {
            Ok(()) => {
                debug!(operation = request.operation(), ids = ?request.ids(), "mutation issued");
                None
            }
            Err(source) => {
                warn!(
                    operation = request.operation(),
                    ids = ?request.ids(),
                    error = %source,
                    "mutation failed"
                );
                Some(TorrentCoreError::MutationFailed {
                    operation: request.operation(),
                    ids: request.ids().to_vec(),
                    source,
                })
            }
        };
        MutationOutcome { request, error }
    });
    join_all(pending).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingClient {
        calls: RefCell<Vec<(&'static str, Vec<TorrentId>)>>,
        fail_ids: Vec<TorrentId>,
    }

    impl RecordingClient {
        fn record(&self, op: &'static str, ids: &[TorrentId]) -> anyhow::Result<()> {
            self.calls.borrow_mut().push((op, ids.to_vec()));
            if ids.iter().any(|id| self.fail_ids.contains(id)) {
                anyhow::bail!("daemon rejected {op}");
            }
            Ok(())
        }
    }

    #[async_trait(?Send)]
    impl TorrentMutations for RecordingClient {
        async fn start(&self, ids: &[TorrentId]) -> anyhow::Result<()> {
            self.record("start", ids)
        }

        async fn stop(&self, ids: &[TorrentId]) -> anyhow::Result<()> {
            self.record("stop", ids)
        }

        async fn delete(&self, ids: &[TorrentId], _delete_data: bool) -> anyhow::Result<()> {
            self.record("delete", ids)
        }

        async fn add(&self, _directory: &str, _source: &AddSource) -> anyhow::Result<()> {
            self.record("add", &[])
        }

        async fn rename_path(
            &self,
            ids: &[TorrentId],
            _path: &str,
            _name: &str,
        ) -> anyhow::Result<()> {
            self.record("rename", ids)
        }

        async fn set_location(
            &self,
            ids: &[TorrentId],
            _location: &str,
            _move_data: bool,
        ) -> anyhow::Result<()> {
            self.record("location", ids)
        }

        async fn set_labels(&self, ids: &[TorrentId], _labels: &[String]) -> anyhow::Result<()> {
            self.record("labels", ids)
        }

        async fn set_tracker_list(
            &self,
            ids: &[TorrentId],
            _announce_list: &[String],
        ) -> anyhow::Result<()> {
            self.record("trackers", ids)
        }
    }

    #[tokio::test]
    async fn one_failure_does_not_block_siblings() {
        let client = RecordingClient {
            fail_ids: vec![2],
            ..RecordingClient::default()
        };
        let requests = vec![
            MutationRequest::SetTrackerList {
                ids: vec![1],
                announce_list: vec!["http://b".into()],
            },
            MutationRequest::SetTrackerList {
                ids: vec![2],
                announce_list: vec!["http://b".into()],
            },
            MutationRequest::SetTrackerList {
                ids: vec![3],
                announce_list: vec!["http://b".into()],
            },
        ];

        let outcomes = issue_all(&client, requests).await;

        assert_eq!(client.calls.borrow().len(), 3);
        let failed: Vec<_> = outcomes.iter().filter(|o| !o.succeeded()).collect();
        assert_eq!(failed.len(), 1);
        assert_eq!(failed[0].request.ids(), &[2]);
        let error = failed[0].error.as_ref().expect("failure recorded");
        assert_eq!(error.operation(), Some("torrent-set-tracker-list"));
    }

    #[tokio::test]
    async fn each_request_reaches_its_operation() {
        let client = RecordingClient::default();
        let requests = vec![
            MutationRequest::Start { ids: vec![1] },
            MutationRequest::Stop { ids: vec![2] },
            MutationRequest::Delete {
                ids: vec![3],
                delete_data: true,
            },
            MutationRequest::Add {
                directory: "/data".into(),
                source: AddSource::Filename {
                    value: "magnet:?xt=urn:btih:abc".into(),
                },
            },
        ];
        let outcomes = issue_all(&client, requests).await;
        assert!(outcomes.iter().all(MutationOutcome::succeeded));
        let ops: Vec<_> = client.calls.borrow().iter().map(|(op, _)| *op).collect();
        assert_eq!(ops, vec!["start", "stop", "delete", "add"]);
    }

    #[test]
    fn add_requests_target_no_ids() {
        let add = MutationRequest::Add {
            directory: "/d".into(),
            source: AddSource::Metainfo {
                base64: "ZGF0YQ==".into(),
            },
        };
        assert!(add.ids().is_empty());
        assert_eq!(add.operation(), "torrent-add");
    }
}
