//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! One Axum router serves the server-rendered Leptos app (`/`, `/home`, and
//! the app's not-found fallback), the compiled WASM/CSS bundle under `/pkg`,
//! and a `/healthz` probe. There is no API surface.

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

use crate::config::ServerConfig;
use crate::error::ServerError;

/// Load Leptos options (including `LEPTOS_*` overrides) and apply the
/// host's `SITE_ROOT`.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `Cargo.toml` `[package.metadata.leptos]` section).
pub fn leptos_options(config: &ServerConfig) -> Result<LeptosOptions, ServerError> {
    let conf = get_configuration(None).map_err(|e| ServerError::Leptos(e.to_string()))?;
    let mut leptos_options = conf.leptos_options;
    if let Some(site_root) = &config.site_root {
        leptos_options.site_root = site_root.as_str().into();
    }
    Ok(leptos_options)
}

/// Build the full application router.
pub fn app(leptos_options: LeptosOptions) -> Router {
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .fallback(leptos_axum::file_and_error_handler(client::app::shell))
        .with_state(leptos_options.clone());

    let pkg = pkg_dir(Path::new(leptos_options.site_root.as_ref()), leptos_options.site_pkg_dir.as_ref());
    tracing::info!(pkg = %pkg.display(), "serving static bundle");

    Router::new()
        .route("/healthz", get(healthz))
        .nest_service("/pkg", ServeDir::new(pkg))
        .merge(leptos_router)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

/// Directory holding the compiled bundle: `<site_root>/<pkg_dir>`.
fn pkg_dir(site_root: &Path, pkg_dir: &str) -> PathBuf {
    site_root.join(pkg_dir)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
