//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (cookies, router navigation) from
//! page and state logic so the session and registration flows stay testable.

pub mod auth;
pub mod cookie;
pub mod navigation;
