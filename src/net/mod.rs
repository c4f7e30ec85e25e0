//! Networking modules for the remote account API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the HTTP calls and classifies responses, `types` defines the
//! wire schema, and `error` is the shared failure type.

pub mod api;
pub mod error;
pub mod types;
