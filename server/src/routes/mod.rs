//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! One Axum router serves the health probe, the server-rendered Leptos
//! pages, the compiled wasm/JS/CSS bundle under `/pkg`, and falls back to
//! the public directory for images and other static files.

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

use crate::config::SiteConfig;
use crate::error::ServerError;

/// Routes that do not depend on the Leptos build.
fn health_routes() -> Router {
    Router::new().route("/healthz", get(healthz))
}

/// Serve the asset bundle under `/pkg` and everything else from `public_dir`.
fn with_static(router: Router, site_root: &Path, public_dir: &Path) -> Router {
    router
        .nest_service("/pkg", ServeDir::new(site_root.join("pkg")))
        .fallback_service(ServeDir::new(public_dir))
}

/// Full site router: health probe, SSR pages, static assets.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing
/// `LEPTOS_*` environment or a malformed `[workspace.metadata.leptos]`).
pub fn app(config: &SiteConfig) -> Result<Router, ServerError> {
    let conf = get_configuration(None).map_err(|e| ServerError::Leptos(e.to_string()))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);
    tracing::debug!(count = routes.len(), "generated leptos routes");

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let site_root = PathBuf::from(leptos_options.site_root.as_ref());
    let router = with_static(health_routes().merge(leptos_router), &site_root, &config.public_dir);

    Ok(router.layer(CompressionLayer::new()).layer(TraceLayer::new_for_http()))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
