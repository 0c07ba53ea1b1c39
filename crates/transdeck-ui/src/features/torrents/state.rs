//! Polled torrent collection and pure state transformations for testing outside wasm.

use std::collections::HashSet;
use std::rc::Rc;

use transdeck_torrent_core::{Torrent, TorrentId};

/// Current torrents slice stored in the dashboard state.
///
/// `version` increases on every poll so derived views can be memoized without
/// comparing whole collections.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct TorrentsState {
    /// Most recent successful poll, in daemon order.
    pub torrents: Rc<Vec<Torrent>>,
    /// Ids present in `torrents`.
    pub ids: HashSet<TorrentId>,
    /// Poll counter; zero before the first poll.
    pub version: u64,
}

/// Replace the collection with a new poll result.
pub fn set_torrents(state: &mut TorrentsState, torrents: Vec<Torrent>) {
    state.ids = torrents.iter().map(|torrent| torrent.id).collect();
    state.torrents = Rc::new(torrents);
    state.version = state.version.wrapping_add(1);
}

/// Whether `id` is present in the latest poll.
#[must_use]
pub fn contains(state: &TorrentsState, id: TorrentId) -> bool {
    state.ids.contains(&id)
}

/// Look up a torrent by id.
#[must_use]
pub fn select_torrent(state: &TorrentsState, id: TorrentId) -> Option<&Torrent> {
    state.torrents.iter().find(|torrent| torrent.id == id)
}

/// Torrents whose ids appear in `ids`, in collection order.
#[must_use]
pub fn select_rows(state: &TorrentsState, ids: &[TorrentId]) -> Vec<Torrent> {
    state
        .torrents
        .iter()
        .filter(|torrent| ids.contains(&torrent.id))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use transdeck_test_support::fixtures::TorrentBuilder;

    #[test]
    fn set_torrents_bumps_version_and_indexes_ids() {
        let mut state = TorrentsState::default();
        set_torrents(
            &mut state,
            vec![TorrentBuilder::new(1).build(), TorrentBuilder::new(2).build()],
        );
        assert_eq!(state.version, 1);
        assert!(contains(&state, 2));

        set_torrents(&mut state, vec![TorrentBuilder::new(2).build()]);
        assert_eq!(state.version, 2);
        assert!(!contains(&state, 1));
        assert!(select_torrent(&state, 1).is_none());
    }

    #[test]
    fn select_rows_keeps_collection_order() {
        let mut state = TorrentsState::default();
        set_torrents(
            &mut state,
            (1..=4).map(|id| TorrentBuilder::new(id).build()).collect(),
        );
        let rows = select_rows(&state, &[4, 2, 9]);
        let ids: Vec<_> = rows.iter().map(|row| row.id).collect();
        assert_eq!(ids, vec![2, 4]);
    }
}
