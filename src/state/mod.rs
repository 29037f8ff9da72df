//! View state for the Notice Board workflow.
//!
//! DESIGN
//! ======
//! Each concern owns a plain struct with synchronous transitions: `list`
//! (page, filters, counters), `rows` (popover and overflow menu), `detail`
//! (modal), `delete` (confirm workflow) and `form` (create/edit). `board`
//! composes the first four against a `NoticeApi`; `form` carries its own
//! async submit flow because it lives on separate pages.

pub mod board;
pub mod delete;
pub mod detail;
pub mod form;
pub mod list;
pub mod rows;

#[cfg(test)]
pub(crate) mod test_helpers;
