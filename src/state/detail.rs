//! Notice detail modal: open immediately, fetch on demand.

#[cfg(test)]
#[path = "detail_test.rs"]
mod detail_test;

use crate::net::error::ApiError;
use crate::net::types::Notice;

/// What the modal should render.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DetailView<'a> {
    Hidden,
    Loading,
    /// Open, not loading, nothing to show (the fetch failed).
    Empty { error: Option<&'a str> },
    Loaded(&'a Notice),
}

#[derive(Clone, Debug, Default)]
pub struct NoticeDetailState {
    pub open: bool,
    pub notice_id: Option<String>,
    pub notice: Option<Notice>,
    pub loading: bool,
    pub error: Option<String>,
    request: u64,
}

impl NoticeDetailState {
    /// Show the modal in its loading state and return the request token the
    /// fetch result must be settled with.
    pub fn open(&mut self, id: &str) -> u64 {
        self.request += 1;
        self.open = true;
        self.notice_id = Some(id.to_owned());
        self.notice = None;
        self.loading = true;
        self.error = None;
        self.request
    }

    /// Settle a fetch. Results for a closed or reopened modal are dropped.
    pub fn finish(&mut self, request: u64, result: Result<Notice, ApiError>) -> bool {
        if !self.open || request != self.request {
            tracing::debug!(request, "discarding detail response for closed modal");
            return false;
        }
        self.loading = false;
        match result {
            Ok(notice) => {
                self.notice = Some(notice);
                self.error = None;
            }
            Err(e) => {
                tracing::warn!(error = %e, notice_id = ?self.notice_id, "notice detail fetch failed");
                self.notice = None;
                self.error = Some(e.to_string());
            }
        }
        true
    }

    /// Clear id, data and loading flag. Safe to call repeatedly.
    pub fn close(&mut self) {
        self.open = false;
        self.notice_id = None;
        self.notice = None;
        self.loading = false;
        self.error = None;
    }

    #[must_use]
    pub fn view(&self) -> DetailView<'_> {
        if !self.open {
            return DetailView::Hidden;
        }
        if self.loading {
            return DetailView::Loading;
        }
        match &self.notice {
            Some(notice) => DetailView::Loaded(notice),
            None => DetailView::Empty { error: self.error.as_deref() },
        }
    }
}
