//! Mutable view configuration for the torrent table.
//!
//! # Design
//! - Every change that alters the computed view bumps `revision`; selection and
//!   column visibility never do, so checking a row does not recompute the table.
//! - Selection may briefly hold ids removed by a poll; readers go through
//!   [`ViewState::effective_selection`].

use std::collections::BTreeSet;

use transdeck_config::DashboardConfig;
use transdeck_torrent_core::TorrentId;

use crate::features::torrents::columns::ColumnId;
use crate::features::torrents::filters::{ColumnFilters, StatusTab};
use crate::features::torrents::state::{TorrentsState, contains};

/// Active sort column and direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SortState {
    /// Column being sorted.
    pub column: ColumnId,
    /// Descending when true.
    pub descending: bool,
}

impl Default for SortState {
    fn default() -> Self {
        Self {
            column: ColumnId::AddedDate,
            descending: true,
        }
    }
}

/// Zero-based page cursor and page size.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pagination {
    /// Current page.
    pub page_index: usize,
    /// Rows per page, never zero.
    pub page_size: usize,
}

impl Pagination {
    /// Pages needed for `total` rows (zero when empty).
    #[must_use]
    pub const fn page_count(&self, total: usize) -> usize {
        total.div_ceil(self.page_size)
    }

    /// Offset of the first row on the current page.
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.page_index.saturating_mul(self.page_size)
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page_index: 0,
            page_size: transdeck_config::DEFAULT_PAGE_SIZE,
        }
    }
}

/// View configuration owned by the dashboard for its lifetime.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct ViewState {
    tab: StatusTab,
    filters: ColumnFilters,
    sort: SortState,
    pagination: Pagination,
    selection: BTreeSet<TorrentId>,
    hidden_columns: BTreeSet<ColumnId>,
    revision: u64,
}

impl ViewState {
    /// Build the initial view from configuration and a restored page size.
    ///
    /// An unknown or unsortable default sort column falls back to the added date.
    #[must_use]
    pub fn from_config(config: &DashboardConfig, page_size: usize) -> Self {
        let sort = ColumnId::from_key(&config.default_sort.column)
            .filter(|column| column.sortable())
            .map_or_else(SortState::default, |column| SortState {
                column,
                descending: config.default_sort.descending,
            });
        Self {
            sort,
            pagination: Pagination {
                page_index: 0,
                page_size: page_size.max(1),
            },
            ..Self::default()
        }
    }

    /// Active tab.
    #[must_use]
    pub const fn tab(&self) -> StatusTab {
        self.tab
    }

    /// Column filters.
    #[must_use]
    pub const fn filters(&self) -> &ColumnFilters {
        &self.filters
    }

    /// Sort column and direction.
    #[must_use]
    pub const fn sort(&self) -> SortState {
        self.sort
    }

    /// Page cursor.
    #[must_use]
    pub const fn pagination(&self) -> Pagination {
        self.pagination
    }

    /// Raw selection, possibly holding ids no longer polled.
    #[must_use]
    pub const fn selection(&self) -> &BTreeSet<TorrentId> {
        &self.selection
    }

    /// Counter bumped by every change that affects the computed view.
    #[must_use]
    pub const fn revision(&self) -> u64 {
        self.revision
    }

    const fn touch(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }

    /// Switch tabs, returning to the first page with an empty selection.
    pub fn set_tab(&mut self, tab: StatusTab) {
        self.tab = tab;
        self.pagination.page_index = 0;
        self.selection.clear();
        self.touch();
    }

    /// Replace the free-text query.
    pub fn set_query(&mut self, query: impl Into<String>) {
        let query = query.into();
        if self.filters.query == query {
            return;
        }
        self.filters.query = query;
        self.pagination.page_index = 0;
        self.touch();
    }

    /// Add or remove a tracker host from the tracker filter.
    pub fn toggle_tracker(&mut self, host: &str) {
        if !self.filters.trackers.remove(host) {
            self.filters.trackers.insert(host.to_string());
        }
        self.pagination.page_index = 0;
        self.touch();
    }

    /// Add or remove a label text from the label filter.
    pub fn toggle_label(&mut self, text: &str) {
        if !self.filters.labels.remove(text) {
            self.filters.labels.insert(text.to_string());
        }
        self.pagination.page_index = 0;
        self.touch();
    }

    /// Drop every tracker restriction.
    pub fn clear_tracker_filter(&mut self) {
        if self.filters.trackers.is_empty() {
            return;
        }
        self.filters.trackers.clear();
        self.pagination.page_index = 0;
        self.touch();
    }

    /// Drop every label restriction.
    pub fn clear_label_filter(&mut self) {
        if self.filters.labels.is_empty() {
            return;
        }
        self.filters.labels.clear();
        self.pagination.page_index = 0;
        self.touch();
    }

    /// Sort by `column`; repeated clicks flip the direction.
    pub fn toggle_sort(&mut self, column: ColumnId) {
        if !column.sortable() {
            return;
        }
        self.sort = if self.sort.column == column {
            SortState {
                column,
                descending: !self.sort.descending,
            }
        } else {
            SortState {
                column,
                descending: column.starts_descending(),
            }
        };
        self.touch();
    }

    /// Jump to `page_index` without bounds checking; the table yields an empty
    /// page past the end.
    pub fn set_page_index(&mut self, page_index: usize) {
        if self.pagination.page_index == page_index {
            return;
        }
        self.pagination.page_index = page_index;
        self.touch();
    }

    /// Pages needed for `total` filtered rows.
    #[must_use]
    pub const fn page_count(&self, total: usize) -> usize {
        self.pagination.page_count(total)
    }

    /// Whether a previous page exists.
    #[must_use]
    pub const fn can_previous_page(&self) -> bool {
        self.pagination.page_index > 0
    }

    /// Whether a next page exists for `total` filtered rows.
    #[must_use]
    pub const fn can_next_page(&self, total: usize) -> bool {
        self.pagination.page_index.saturating_add(1) < self.page_count(total)
    }

    /// Advance one page when possible.
    pub fn next_page(&mut self, total: usize) {
        if self.can_next_page(total) {
            self.set_page_index(self.pagination.page_index + 1);
        }
    }

    /// Go back one page when possible.
    pub fn previous_page(&mut self) {
        if self.can_previous_page() {
            self.set_page_index(self.pagination.page_index - 1);
        }
    }

    /// Go to the first page.
    pub fn first_page(&mut self) {
        self.set_page_index(0);
    }

    /// Go to the last page for `total` filtered rows.
    pub fn last_page(&mut self, total: usize) {
        self.set_page_index(self.page_count(total).saturating_sub(1));
    }

    /// Pull the cursor back onto the last page when the collection shrank.
    pub fn clamp_page_index(&mut self, total: usize) {
        let last = self.page_count(total).saturating_sub(1);
        if self.pagination.page_index > last {
            self.set_page_index(last);
        }
    }

    /// Change the page size while keeping the first visible row on screen.
    ///
    /// Zero is ignored.
    pub fn set_page_size(&mut self, page_size: usize) {
        if page_size == 0 || page_size == self.pagination.page_size {
            return;
        }
        let first_row = self.pagination.offset();
        self.pagination = Pagination {
            page_index: first_row / page_size,
            page_size,
        };
        self.touch();
    }

    /// Flip the checked state of one row.
    pub fn toggle_row(&mut self, id: TorrentId) {
        if !self.selection.remove(&id) {
            self.selection.insert(id);
        }
    }

    /// Set the checked state of one row.
    pub fn set_row_selected(&mut self, id: TorrentId, selected: bool) {
        if selected {
            self.selection.insert(id);
        } else {
            self.selection.remove(&id);
        }
    }

    /// Header checkbox: clear the page when fully selected, otherwise select it.
    pub fn toggle_page_selection(&mut self, page_ids: &[TorrentId]) {
        let all_selected =
            !page_ids.is_empty() && page_ids.iter().all(|id| self.selection.contains(id));
        if all_selected {
            for id in page_ids {
                self.selection.remove(id);
            }
        } else {
            self.selection.extend(page_ids.iter().copied());
        }
    }

    /// Uncheck every row.
    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// Drop selected ids that the latest poll no longer reports.
    pub fn prune_selection(&mut self, torrents: &TorrentsState) {
        self.selection.retain(|id| contains(torrents, *id));
    }

    /// Selected ids present in the latest poll, ascending.
    #[must_use]
    pub fn effective_selection(&self, torrents: &TorrentsState) -> Vec<TorrentId> {
        self.selection
            .iter()
            .copied()
            .filter(|id| contains(torrents, *id))
            .collect()
    }

    /// Show or hide a column; non-hideable columns are ignored.
    pub fn set_column_visible(&mut self, column: ColumnId, visible: bool) {
        if !column.hideable() {
            return;
        }
        if visible {
            self.hidden_columns.remove(&column);
        } else {
            self.hidden_columns.insert(column);
        }
    }

    /// Whether a column is shown.
    #[must_use]
    pub fn is_column_visible(&self, column: ColumnId) -> bool {
        !column.hideable() || !self.hidden_columns.contains(&column)
    }

    /// Hidden columns, for persistence.
    #[must_use]
    pub const fn hidden_columns(&self) -> &BTreeSet<ColumnId> {
        &self.hidden_columns
    }

    /// Restore persisted hidden columns, skipping non-hideable ones.
    pub fn restore_hidden_columns(&mut self, hidden: impl IntoIterator<Item = ColumnId>) {
        self.hidden_columns = hidden.into_iter().filter(|c| c.hideable()).collect();
    }
}
