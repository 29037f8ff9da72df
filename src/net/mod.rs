//! Networking for the notice service.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` is the HTTP facade, `types` defines the wire schema and `error`
//! the failure taxonomy shared by every operation.

pub mod api;
pub mod error;
pub mod types;
