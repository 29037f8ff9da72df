//! Notice Board page: list, row actions, detail modal and delete workflow
//! driven against a `NoticeApi`.
//!
//! RECOVERY
//! ========
//! Local patches (optimistic status toggle, row removal) are applied first.
//! When the service rejects a patch, local state is not rolled back field by
//! field: the whole list is re-read from the service instead.

#[cfg(test)]
#[path = "board_test.rs"]
mod board_test;

use time::OffsetDateTime;

use super::delete::DeleteWorkflow;
use super::detail::NoticeDetailState;
use super::list::{FetchOutcome, NoticeListState, PageOutOfRange};
use super::rows::{MenuAction, RowActions, ToggleError, apply_optimistic_status, edit_route, toggled_status};
use crate::net::api::NoticeApi;
use crate::net::types::{NoticeFilters, NoticeStatus};

/// Result of a status toggle that reached the service.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ToggleOutcome {
    Confirmed(NoticeStatus),
    /// The service rejected the change; the list was re-read.
    Reverted { error: String },
}

/// Side effect requested by an overflow-menu choice.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MenuEffect {
    /// Navigate to the edit view at this route.
    Navigate(String),
    /// The delete confirmation is now pending.
    ConfirmDelete,
    /// No menu was open.
    Nothing,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted { id: String, title: String },
    /// The service rejected the delete; the list was re-read.
    Failed { error: String },
    /// No confirmed delete was pending.
    Nothing,
}

pub struct NoticeBoard<A> {
    api: A,
    pub list: NoticeListState,
    pub rows: RowActions,
    pub detail: NoticeDetailState,
    pub delete: DeleteWorkflow,
}

impl<A: NoticeApi> NoticeBoard<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            list: NoticeListState::default(),
            rows: RowActions::default(),
            detail: NoticeDetailState::default(),
            delete: DeleteWorkflow::default(),
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    // =========================================================================
    // LIST
    // =========================================================================

    /// Fetch the current `(page, filters)` view.
    pub async fn refresh(&mut self) -> FetchOutcome {
        let ticket = self.list.begin_fetch();
        tracing::debug!(generation = ticket.generation, page = ticket.page, "fetching notice list");
        let result = self.api.list(ticket.page, &ticket.filters).await;
        let outcome = self.list.apply(&ticket, result);
        if outcome != FetchOutcome::Stale {
            self.close_overlays_for_missing_rows();
        }
        outcome
    }

    /// Pagination control. Fetches only when the page actually changes.
    ///
    /// # Errors
    ///
    /// Returns an error if `page` is outside `1..=pages`.
    pub async fn go_to_page(&mut self, page: u32) -> Result<Option<FetchOutcome>, PageOutOfRange> {
        if self.list.set_page(page)? {
            return Ok(Some(self.refresh().await));
        }
        Ok(None)
    }

    /// Filter edit. Fetches only when the filter set actually changes.
    pub async fn set_filters(&mut self, filters: NoticeFilters) -> Option<FetchOutcome> {
        if self.list.set_filters(filters) {
            return Some(self.refresh().await);
        }
        None
    }

    pub async fn reset_filters(&mut self) -> Option<FetchOutcome> {
        if self.list.reset_filters() {
            return Some(self.refresh().await);
        }
        None
    }

    pub async fn show_drafts(&mut self) -> Option<FetchOutcome> {
        if self.list.show_drafts() {
            return Some(self.refresh().await);
        }
        None
    }

    fn close_overlays_for_missing_rows(&mut self) {
        let missing: Vec<String> = [self.rows.status_popover_row(), self.rows.menu_row()]
            .into_iter()
            .flatten()
            .filter(|id| self.list.row(id).is_none())
            .map(str::to_owned)
            .collect();
        for id in missing {
            self.rows.forget_row(&id);
        }
    }

    // =========================================================================
    // STATUS TOGGLE
    // =========================================================================

    /// Flip a row between `Published` and `Unpublished`: patch locally, close
    /// the popover, then confirm with the service.
    ///
    /// # Errors
    ///
    /// Returns an error, without any request, for draft rows and rows not on
    /// the current page.
    pub async fn toggle_status(&mut self, id: &str) -> Result<ToggleOutcome, ToggleError> {
        let row = self
            .list
            .row_mut(id)
            .ok_or_else(|| ToggleError::UnknownRow(id.to_owned()))?;
        let target = toggled_status(row.status)?;
        apply_optimistic_status(row, target, OffsetDateTime::now_utc());
        self.rows.close_status_popover();

        match self.api.update_status(id, target).await {
            Ok(_) => {
                tracing::info!(notice_id = id, status = %target, "notice status updated");
                Ok(ToggleOutcome::Confirmed(target))
            }
            Err(e) => {
                tracing::warn!(notice_id = id, error = %e, "status update failed; re-reading list");
                self.refresh().await;
                Ok(ToggleOutcome::Reverted { error: e.to_string() })
            }
        }
    }

    // =========================================================================
    // DETAIL
    // =========================================================================

    pub async fn open_detail(&mut self, id: &str) {
        let request = self.detail.open(id);
        let result = self.api.get_by_id(id).await;
        self.detail.finish(request, result);
    }

    pub fn close_detail(&mut self) {
        self.detail.close();
    }

    // =========================================================================
    // OVERFLOW MENU + DELETE
    // =========================================================================

    /// Act on the open overflow menu. The menu closes either way.
    pub fn choose_menu_action(&mut self, action: MenuAction) -> MenuEffect {
        let Some(id) = self.rows.menu_row().map(str::to_owned) else {
            return MenuEffect::Nothing;
        };
        self.rows.close_menu();
        match action {
            MenuAction::Edit => MenuEffect::Navigate(edit_route(&id)),
            MenuAction::Delete => {
                let title = self.list.row(&id).map(|row| row.title.clone()).unwrap_or_default();
                if self.delete.request(&id, &title) {
                    MenuEffect::ConfirmDelete
                } else {
                    MenuEffect::Nothing
                }
            }
        }
    }

    pub fn cancel_delete(&mut self) {
        self.delete.cancel();
    }

    /// Execute the pending delete. On success the row is removed locally
    /// without a refetch; on failure the list is re-read.
    pub async fn confirm_delete(&mut self) -> DeleteOutcome {
        let Some(id) = self.delete.begin() else {
            return DeleteOutcome::Nothing;
        };
        let result = self.api.delete(&id).await.map(|_| ());
        if let Some(id) = self.delete.finish(result) {
            self.list.remove_row(&id);
            self.rows.forget_row(&id);
            let title = self.delete.deleted_title().unwrap_or_default().to_owned();
            return DeleteOutcome::Deleted { id, title };
        }
        let error = self.delete.error.clone().unwrap_or_default();
        self.refresh().await;
        DeleteOutcome::Failed { error }
    }

    pub fn dismiss_delete_success(&mut self) {
        self.delete.dismiss();
    }
}
