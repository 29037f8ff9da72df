//! Notice Board client core.
//!
//! SYSTEM CONTEXT
//! ==============
//! The notice service is an external REST collaborator. This crate owns the
//! client side of the workflow: a thin HTTP facade (`net`), the typed view
//! state that sits on top of it (`state`), and small display helpers
//! (`util`). Front-ends such as the `notice-cli` binary drive the
//! controllers in `state` and render whatever those controllers expose.
//!
//! DESIGN
//! ======
//! State structs are plain data with synchronous transition methods so they
//! can be tested without a network. Async orchestration lives in
//! `state::board` and `state::form`, which call through the `NoticeApi`
//! trait and feed results back into the pure state.

pub mod config;
pub mod net;
pub mod state;
pub mod util;

pub use config::NoticeBoardConfig;
pub use net::api::{HttpNoticeApi, NoticeApi};
pub use net::error::ApiError;
pub use state::board::NoticeBoard;
