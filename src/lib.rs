//! # gym-tracker
//!
//! Leptos + WASM front end for the gym tracker: a landing page, an account
//! registration form, and a cookie-backed session that moves the user between
//! the landing page and the dashboard.
//!
//! The remote account API is an external collaborator; this crate only speaks
//! to it through `net::api`. The `server` workspace member renders the app
//! with the `ssr` feature and serves the `hydrate` bundle.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: installs console logging and hydrates the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
