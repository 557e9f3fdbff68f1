//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Binds the health endpoint and Leptos SSR rendering under a single Axum
//! router. Compiled client assets are served from `/pkg`; anything else that
//! is not a route falls through to the static public directory (logo).

use std::path::{Path, PathBuf};

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;


/// Non-UI routes.
pub fn api_routes() -> Router {
    Router::new().route("/healthz", get(healthz))
}

/// API routes + Leptos SSR + static assets.
pub fn app(leptos_options: LeptosOptions, public_dir: &Path) -> Router {
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    api_routes()
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .fallback_service(ServeDir::new(public_dir))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
