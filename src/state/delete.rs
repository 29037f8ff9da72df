//! Two-step delete: confirm, execute, acknowledge.
//!
//! `Idle -> ConfirmPending -> Deleting -> SuccessShown -> Idle`, with
//! `Deleting -> Idle` on failure (the caller refetches the list) and
//! `ConfirmPending -> Idle` on cancel without any network call.

#[cfg(test)]
#[path = "delete_test.rs"]
mod delete_test;

use crate::net::error::ApiError;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum DeletePhase {
    #[default]
    Idle,
    ConfirmPending {
        id: String,
        title: String,
    },
    Deleting {
        id: String,
        title: String,
    },
    SuccessShown {
        title: String,
    },
}

#[derive(Clone, Debug, Default)]
pub struct DeleteWorkflow {
    pub phase: DeletePhase,
    /// Reason of the most recent failed delete, until the next request.
    pub error: Option<String>,
}

impl DeleteWorkflow {
    /// Ask for confirmation. Ignored while a delete is executing.
    pub fn request(&mut self, id: &str, title: &str) -> bool {
        if matches!(self.phase, DeletePhase::Deleting { .. }) {
            return false;
        }
        self.phase = DeletePhase::ConfirmPending { id: id.to_owned(), title: title.to_owned() };
        self.error = None;
        true
    }

    /// Back out of the confirmation dialog.
    pub fn cancel(&mut self) {
        if matches!(self.phase, DeletePhase::ConfirmPending { .. }) {
            self.phase = DeletePhase::Idle;
        }
    }

    /// Confirm button. Returns the id to delete, or `None` if nothing is pending.
    pub fn begin(&mut self) -> Option<String> {
        let DeletePhase::ConfirmPending { id, title } = &self.phase else {
            return None;
        };
        let id = id.clone();
        self.phase = DeletePhase::Deleting { id: id.clone(), title: title.clone() };
        Some(id)
    }

    /// Settle the delete request. Returns the deleted id on success.
    pub fn finish(&mut self, result: Result<(), ApiError>) -> Option<String> {
        let DeletePhase::Deleting { id, title } = &self.phase else {
            return None;
        };
        let (id, title) = (id.clone(), title.clone());
        self.phase = DeletePhase::Idle;
        match result {
            Ok(()) => {
                tracing::info!(notice_id = %id, "notice deleted");
                self.phase = DeletePhase::SuccessShown { title };
                Some(id)
            }
            Err(e) => {
                tracing::warn!(notice_id = %id, error = %e, "notice delete failed");
                self.error = Some(e.to_string());
                None
            }
        }
    }

    /// Close the success notification.
    pub fn dismiss(&mut self) {
        if matches!(self.phase, DeletePhase::SuccessShown { .. }) {
            self.phase = DeletePhase::Idle;
        }
    }

    #[must_use]
    pub fn confirm_enabled(&self) -> bool {
        matches!(self.phase, DeletePhase::ConfirmPending { .. })
    }

    #[must_use]
    pub fn confirm_label(&self) -> &'static str {
        match self.phase {
            DeletePhase::Deleting { .. } => "Deleting...",
            _ => "Delete",
        }
    }

    /// Title shown in the success notification.
    #[must_use]
    pub fn deleted_title(&self) -> Option<&str> {
        match &self.phase {
            DeletePhase::SuccessShown { title } => Some(title),
            _ => None,
        }
    }
}
