//! Paginated, filtered notice list.
//!
//! DESIGN
//! ======
//! Every fetch is tagged with a generation from `begin_fetch`. Only the
//! response for the latest generation may touch the view; anything older is
//! dropped, so overlapping requests always settle on the most recently
//! requested `(page, filters)` tuple. Rows, page count and counters are
//! replaced together on success and reset together on failure, so the view
//! never shows counters from a previous filter set.

#[cfg(test)]
#[path = "list_test.rs"]
mod list_test;

use std::collections::BTreeSet;
use std::ops::RangeInclusive;

use crate::net::error::ApiError;
use crate::net::types::{Notice, NoticeFilters, NoticeListResponse, NoticeStatus};

/// A page outside `1..=pages` was requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("page {page} is out of range (1..={pages})")]
pub struct PageOutOfRange {
    pub page: u32,
    pub pages: u32,
}

/// Snapshot of what a list request was issued for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchTicket {
    pub generation: u64,
    pub page: u32,
    pub filters: NoticeFilters,
}

/// What happened to a completed list request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FetchOutcome {
    /// Response replaced the view.
    Applied,
    /// Request failed; the view was reset to its empty state.
    Failed,
    /// A newer request was issued meanwhile; the response was discarded.
    Stale,
}

#[derive(Clone, Debug)]
pub struct NoticeListState {
    pub rows: Vec<Notice>,
    /// Current page, 1-based.
    pub page: u32,
    /// Total pages reported by the service, never below 1.
    pub pages: u32,
    /// "Active Notice" counter over the whole filtered set.
    pub published_count: u64,
    /// "Draft Notice" counter over the whole filtered set.
    pub draft_count: u64,
    pub filters: NoticeFilters,
    pub loading: bool,
    pub error: Option<String>,
    pub selected: BTreeSet<String>,
    latest_generation: u64,
}

impl Default for NoticeListState {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            page: 1,
            pages: 1,
            published_count: 0,
            draft_count: 0,
            filters: NoticeFilters::default(),
            loading: false,
            error: None,
            selected: BTreeSet::new(),
            latest_generation: 0,
        }
    }
}

impl NoticeListState {
    // =========================================================================
    // FETCH LIFECYCLE
    // =========================================================================

    /// Issue a new request for the current page and filters. Supersedes any
    /// request still in flight.
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.latest_generation += 1;
        self.loading = true;
        self.error = None;
        FetchTicket { generation: self.latest_generation, page: self.page, filters: self.filters.clone() }
    }

    #[must_use]
    pub fn is_current(&self, ticket: &FetchTicket) -> bool {
        ticket.generation == self.latest_generation
    }

    /// Settle a request. Stale responses are ignored entirely.
    pub fn apply(&mut self, ticket: &FetchTicket, result: Result<NoticeListResponse, ApiError>) -> FetchOutcome {
        if !self.is_current(ticket) {
            tracing::debug!(
                generation = ticket.generation,
                latest = self.latest_generation,
                "discarding stale notice list response"
            );
            return FetchOutcome::Stale;
        }

        self.loading = false;
        match result {
            Ok(response) => {
                self.rows = response.data;
                self.pages = response.pagination.pages.max(1);
                self.published_count = response.pagination.published_count;
                self.draft_count = response.pagination.draft_count;
                self.error = None;
                let rows = &self.rows;
                self.selected.retain(|id| rows.iter().any(|row| &row.id == id));
                FetchOutcome::Applied
            }
            Err(e) => {
                tracing::warn!(error = %e, page = ticket.page, "notice list fetch failed");
                self.rows.clear();
                self.pages = 1;
                self.published_count = 0;
                self.draft_count = 0;
                self.selected.clear();
                self.error = Some(e.to_string());
                FetchOutcome::Failed
            }
        }
    }

    /// Rows to render. Empty while a fetch is in flight: previous rows are
    /// not shown under a loading indicator.
    #[must_use]
    pub fn visible_rows(&self) -> &[Notice] {
        if self.loading { &[] } else { &self.rows }
    }

    // =========================================================================
    // PAGE + FILTERS
    // =========================================================================

    /// Page buttons offered by the pagination control.
    #[must_use]
    pub fn page_numbers(&self) -> RangeInclusive<u32> {
        1..=self.pages
    }

    /// Move to `page`. Returns whether the page changed (and a fetch is due).
    ///
    /// # Errors
    ///
    /// Returns an error if `page` is outside `1..=pages`.
    pub fn set_page(&mut self, page: u32) -> Result<bool, PageOutOfRange> {
        if !self.page_numbers().contains(&page) {
            return Err(PageOutOfRange { page, pages: self.pages });
        }
        if page == self.page {
            return Ok(false);
        }
        self.page = page;
        Ok(true)
    }

    /// Replace the filter set. A changed filter set always returns to page 1.
    /// Returns whether anything changed (and a fetch is due).
    pub fn set_filters(&mut self, filters: NoticeFilters) -> bool {
        if filters == self.filters {
            return false;
        }
        self.filters = filters;
        self.page = 1;
        true
    }

    /// Clear all four filters and return to page 1.
    pub fn reset_filters(&mut self) -> bool {
        let changed = !self.filters.is_empty() || self.page != 1;
        self.filters = NoticeFilters::default();
        self.page = 1;
        changed
    }

    /// "All Draft Notice" shortcut: filter by `Draft`, keeping other filters.
    pub fn show_drafts(&mut self) -> bool {
        let filters = NoticeFilters { status: Some(NoticeStatus::Draft), ..self.filters.clone() };
        self.set_filters(filters)
    }

    // =========================================================================
    // ROWS
    // =========================================================================

    #[must_use]
    pub fn row(&self, id: &str) -> Option<&Notice> {
        self.rows.iter().find(|row| row.id == id)
    }

    pub fn row_mut(&mut self, id: &str) -> Option<&mut Notice> {
        self.rows.iter_mut().find(|row| row.id == id)
    }

    /// Drop a row locally (after a confirmed delete).
    pub fn remove_row(&mut self, id: &str) -> Option<Notice> {
        self.selected.remove(id);
        let index = self.rows.iter().position(|row| row.id == id)?;
        Some(self.rows.remove(index))
    }

    // =========================================================================
    // SELECTION
    // =========================================================================

    /// Check or uncheck a single row. Unknown ids are ignored.
    pub fn set_selected(&mut self, id: &str, checked: bool) {
        if checked {
            if self.row(id).is_some() {
                self.selected.insert(id.to_owned());
            }
        } else {
            self.selected.remove(id);
        }
    }

    /// Header checkbox: select or clear every row on the current page.
    pub fn select_all(&mut self, checked: bool) {
        if checked {
            self.selected = self.rows.iter().map(|row| row.id.clone()).collect();
        } else {
            self.selected.clear();
        }
    }

    #[must_use]
    pub fn all_selected(&self) -> bool {
        !self.rows.is_empty() && self.rows.iter().all(|row| self.selected.contains(&row.id))
    }
}
