//! Per-row transient UI: the status popover and the overflow (kebab) menu.
//!
//! DESIGN
//! ======
//! Each overlay class is an explicit union keyed by row id, so at most one
//! status popover and one overflow menu are open at any time. The two classes
//! are tracked independently: opening one never closes the other.

#[cfg(test)]
#[path = "rows_test.rs"]
mod rows_test;

use time::OffsetDateTime;

use crate::net::types::{Notice, NoticeStatus};
use crate::util::date::rfc3339;

/// Screen coordinates of the control that opened a menu.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MenuPosition {
    pub x: f64,
    pub y: f64,
}

/// Screen-space rectangle of a rendered overlay.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    #[must_use]
    pub fn contains(&self, point: MenuPosition) -> bool {
        point.x >= self.x && point.x <= self.x + self.width && point.y >= self.y && point.y <= self.y + self.height
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub enum StatusPopover {
    #[default]
    Closed,
    Open {
        row_id: String,
    },
}

#[derive(Clone, Debug, Default, PartialEq)]
pub enum OverflowMenu {
    #[default]
    Closed,
    Open {
        row_id: String,
        position: MenuPosition,
    },
}

/// Secondary actions offered by the overflow menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuAction {
    Edit,
    Delete,
}

/// The status popover only flips between `Published` and `Unpublished`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ToggleError {
    #[error("draft notices cannot be toggled; publish them from the edit form")]
    Draft,
    #[error("notice {0} is not on the current page")]
    UnknownRow(String),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct RowActions {
    pub status_popover: StatusPopover,
    pub overflow_menu: OverflowMenu,
}

impl RowActions {
    /// Status button: opens the popover for `row_id`, or closes it when it is
    /// already open for that row.
    pub fn toggle_status_popover(&mut self, row_id: &str) {
        self.status_popover = match &self.status_popover {
            StatusPopover::Open { row_id: open } if open == row_id => StatusPopover::Closed,
            _ => StatusPopover::Open { row_id: row_id.to_owned() },
        };
    }

    pub fn close_status_popover(&mut self) {
        self.status_popover = StatusPopover::Closed;
    }

    /// Kebab button: opens the menu at the triggering control's coordinates.
    pub fn open_menu(&mut self, row_id: &str, position: MenuPosition) {
        self.overflow_menu = OverflowMenu::Open { row_id: row_id.to_owned(), position };
    }

    pub fn close_menu(&mut self) {
        self.overflow_menu = OverflowMenu::Closed;
    }

    #[must_use]
    pub fn status_popover_row(&self) -> Option<&str> {
        match &self.status_popover {
            StatusPopover::Open { row_id } => Some(row_id),
            StatusPopover::Closed => None,
        }
    }

    #[must_use]
    pub fn menu_row(&self) -> Option<&str> {
        match &self.overflow_menu {
            OverflowMenu::Open { row_id, .. } => Some(row_id),
            OverflowMenu::Closed => None,
        }
    }

    /// Global pointer-down: close whichever open overlay does not contain the
    /// pointer. `None` bounds means the overlay is not rendered.
    pub fn pointer_down(&mut self, point: MenuPosition, popover: Option<Bounds>, menu: Option<Bounds>) {
        if popover.is_some_and(|b| !b.contains(point)) {
            self.close_status_popover();
        }
        if menu.is_some_and(|b| !b.contains(point)) {
            self.close_menu();
        }
    }

    /// Close any overlay anchored to a row that no longer exists.
    pub fn forget_row(&mut self, row_id: &str) {
        if self.status_popover_row() == Some(row_id) {
            self.close_status_popover();
        }
        if self.menu_row() == Some(row_id) {
            self.close_menu();
        }
    }
}

/// Target of the status popover for a row currently in `current`.
///
/// # Errors
///
/// Returns `ToggleError::Draft` for draft rows.
pub fn toggled_status(current: NoticeStatus) -> Result<NoticeStatus, ToggleError> {
    match current {
        NoticeStatus::Published => Ok(NoticeStatus::Unpublished),
        NoticeStatus::Unpublished => Ok(NoticeStatus::Published),
        NoticeStatus::Draft => Err(ToggleError::Draft),
    }
}

/// Local optimistic patch: `publishedAt` is set to `now` when becoming
/// published and cleared otherwise. The service stays authoritative.
pub fn apply_optimistic_status(row: &mut Notice, status: NoticeStatus, now: OffsetDateTime) {
    row.status = status;
    row.published_at = (status == NoticeStatus::Published).then(|| rfc3339(now));
}

/// Route of the edit view for a notice.
#[must_use]
pub fn edit_route(id: &str) -> String {
    format!("/edit-notice/{id}")
}
