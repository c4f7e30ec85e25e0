//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`session`, `registration`, `dashboard`) so each
//! page depends on a small focused model. Only `session` outlives a page.

pub mod dashboard;
pub mod registration;
pub mod session;
