//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome and read shared session state from Leptos
//! context; they own no network calls.

pub mod alert;
pub mod dashboard_panel;
pub mod faq;
pub mod loading_overlay;
