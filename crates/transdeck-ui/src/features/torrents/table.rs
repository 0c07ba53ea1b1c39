//! Table computation: filter, count, sort, and paginate the polled collection.
//!
//! # Design
//! - `compute_view` is pure; [`TableEngine`] memoizes it on the identity of
//!   the polled collection and the content of every view input, so two
//!   different views never share a cached result.
//! - Tab counts apply the column filters but not the tab, so each badge shows
//!   what switching to that tab would display.
//! - Picker options come from the whole collection and ignore every filter.

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};
use std::rc::Rc;

use transdeck_config::ActivityRule;
use transdeck_torrent_core::{Torrent, TorrentId};

use crate::features::torrents::filters::{ColumnFilters, StatusTab, tab_matches};
use crate::features::torrents::state::TorrentsState;
use crate::features::torrents::view_state::{Pagination, SortState, ViewState};

/// Badge count per status tab.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct TabCounts {
    /// Rows passing the column filters.
    pub all: usize,
    /// Active rows passing the column filters.
    pub active: usize,
    /// Downloading rows passing the column filters.
    pub downloading: usize,
    /// Seeding rows passing the column filters.
    pub seeding: usize,
    /// Stopped rows passing the column filters.
    pub stopped: usize,
}

impl TabCounts {
    /// Count shown on `tab`.
    #[must_use]
    pub const fn get(&self, tab: StatusTab) -> usize {
        match tab {
            StatusTab::All => self.all,
            StatusTab::Active => self.active,
            StatusTab::Downloading => self.downloading,
            StatusTab::Seeding => self.seeding,
            StatusTab::Stopped => self.stopped,
        }
    }

    const fn slot(&mut self, tab: StatusTab) -> &mut usize {
        match tab {
            StatusTab::All => &mut self.all,
            StatusTab::Active => &mut self.active,
            StatusTab::Downloading => &mut self.downloading,
            StatusTab::Seeding => &mut self.seeding,
            StatusTab::Stopped => &mut self.stopped,
        }
    }
}

/// Tracker filter option: a host plus the first announce URL seen for it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrackerOption {
    /// Host used by the tracker filter.
    pub host: String,
    /// Representative announce URL.
    pub announce: String,
}

/// Result of one table computation.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct TableView {
    /// Rows on the current page, sorted.
    pub rows: Vec<Torrent>,
    /// Rows in the filtered set before pagination.
    pub total: usize,
    /// Pages available for `total`.
    pub page_count: usize,
    /// Per-tab badge counts.
    pub tab_counts: TabCounts,
    /// Distinct tracker hosts, sorted by host.
    pub tracker_options: Vec<TrackerOption>,
    /// Distinct decoded label texts, sorted.
    pub label_options: Vec<String>,
    /// Distinct download directories in first-seen order, session default last.
    pub download_dirs: Vec<String>,
}

impl TableView {
    /// Ids of the rows on the current page.
    #[must_use]
    pub fn page_ids(&self) -> Vec<TorrentId> {
        self.rows.iter().map(|row| row.id).collect()
    }
}

/// Compute the visible page and its derived counts and options.
#[must_use]
pub fn compute_view(
    torrents: &[Torrent],
    view: &ViewState,
    rule: ActivityRule,
    session_download_dir: &str,
) -> TableView {
    let mut tab_counts = TabCounts::default();
    let mut filtered: Vec<&Torrent> = Vec::new();

    for torrent in torrents {
        if !view.filters().matches(torrent) {
            continue;
        }
        for tab in StatusTab::ALL {
            if tab_matches(tab, torrent, rule) {
                *tab_counts.slot(tab) += 1;
            }
        }
        if tab_matches(view.tab(), torrent, rule) {
            filtered.push(torrent);
        }
    }

    let sort = view.sort();
    // sort_by is stable; reversing the comparator keeps ties in input order.
    if sort.descending {
        filtered.sort_by(|a, b| sort.column.compare(b, a));
    } else {
        filtered.sort_by(|a, b| sort.column.compare(a, b));
    }

    let pagination = view.pagination();
    let total = filtered.len();
    let rows = filtered
        .into_iter()
        .skip(pagination.offset())
        .take(pagination.page_size)
        .cloned()
        .collect();

    TableView {
        rows,
        total,
        page_count: pagination.page_count(total),
        tab_counts,
        tracker_options: tracker_options(torrents),
        label_options: label_options(torrents),
        download_dirs: download_dirs(torrents, session_download_dir),
    }
}

/// Distinct tracker hosts across the whole collection.
#[must_use]
pub fn tracker_options(torrents: &[Torrent]) -> Vec<TrackerOption> {
    let mut by_host: BTreeMap<&str, &str> = BTreeMap::new();
    for tracker in torrents.iter().flat_map(|t| t.tracker_stats.iter()) {
        by_host
            .entry(tracker.host.as_str())
            .or_insert(tracker.announce.as_str());
    }
    by_host
        .into_iter()
        .map(|(host, announce)| TrackerOption {
            host: host.to_string(),
            announce: announce.to_string(),
        })
        .collect()
}

/// Distinct decodable label texts across the whole collection.
#[must_use]
pub fn label_options(torrents: &[Torrent]) -> Vec<String> {
    torrents
        .iter()
        .flat_map(Torrent::decoded_labels)
        .map(|label| label.text)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Directory picker options: torrent directories, then the session default.
#[must_use]
pub fn download_dirs(torrents: &[Torrent], session_download_dir: &str) -> Vec<String> {
    let mut dirs: Vec<String> = Vec::new();
    let candidates = torrents
        .iter()
        .map(|t| t.download_dir.as_str())
        .chain(std::iter::once(session_download_dir));
    for dir in candidates {
        if !dirs.iter().any(|seen| seen == dir) {
            dirs.push(dir.to_string());
        }
    }
    dirs
}

#[derive(Debug)]
struct CacheKey {
    collection: Rc<Vec<Torrent>>,
    tab: StatusTab,
    filters: ColumnFilters,
    sort: SortState,
    pagination: Pagination,
    rule: ActivityRule,
    session_download_dir: String,
}

impl CacheKey {
    fn new(
        torrents: &TorrentsState,
        view: &ViewState,
        rule: ActivityRule,
        session_download_dir: &str,
    ) -> Self {
        Self {
            collection: Rc::clone(&torrents.torrents),
            tab: view.tab(),
            filters: view.filters().clone(),
            sort: view.sort(),
            pagination: view.pagination(),
            rule,
            session_download_dir: session_download_dir.to_string(),
        }
    }

    // Holding the collection keeps its allocation alive, so pointer equality
    // cannot be fooled by a reused address.
    fn matches(
        &self,
        torrents: &TorrentsState,
        view: &ViewState,
        rule: ActivityRule,
        session_download_dir: &str,
    ) -> bool {
        Rc::ptr_eq(&self.collection, &torrents.torrents)
            && self.tab == view.tab()
            && self.filters == *view.filters()
            && self.sort == view.sort()
            && self.pagination == view.pagination()
            && self.rule == rule
            && self.session_download_dir == session_download_dir
    }
}

/// Memoizing front for [`compute_view`].
#[derive(Debug, Default)]
pub struct TableEngine {
    cached: RefCell<Option<(CacheKey, Rc<TableView>)>>,
}

impl TableEngine {
    /// Create an engine with an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached view when no input changed, otherwise recompute.
    pub fn view(
        &self,
        torrents: &TorrentsState,
        view: &ViewState,
        rule: ActivityRule,
        session_download_dir: &str,
    ) -> Rc<TableView> {
        if let Some((key, table)) = self.cached.borrow().as_ref()
            && key.matches(torrents, view, rule, session_download_dir)
        {
            return Rc::clone(table);
        }
        let table = Rc::new(compute_view(
            &torrents.torrents,
            view,
            rule,
            session_download_dir,
        ));
        let key = CacheKey::new(torrents, view, rule, session_download_dir);
        *self.cached.borrow_mut() = Some((key, Rc::clone(&table)));
        table
    }
}
