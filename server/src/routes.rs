//! Router assembly.
//!
//! Serves the Leptos app with server-side rendering, the compiled client
//! bundle under `/pkg`, and a liveness probe. Account data lives in the
//! external API; this host has no endpoints of its own beyond `/healthz`.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use std::path::{Path, PathBuf};

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use gym_tracker::app::{App, shell};

use crate::config::ServerError;

/// Leptos SSR routes plus static assets and the health probe.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `Cargo.toml` `[package.metadata.leptos]` section).
pub fn app() -> Result<Router, ServerError> {
    let conf = get_configuration(None).map_err(|e| ServerError::Leptos(e.to_string()))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let pkg_dir = pkg_dir(Path::new(leptos_options.site_root.as_ref()));
    tracing::debug!(pkg_dir = %pkg_dir.display(), "serving client bundle");

    Ok(base_routes()
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(pkg_dir))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}

fn base_routes() -> Router {
    Router::new().route("/healthz", get(healthz))
}

fn pkg_dir(site_root: &Path) -> PathBuf {
    site_root.join("pkg")
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
