//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! One Axum router carries the `/api/` proxy, the health probe, the stamped
//! client bundle under `/pkg`, and Leptos SSR for page routes. Paths outside
//! the Leptos route list still render the app, whose fallback redirects to
//! `/login`.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{any, get};
use leptos::config::LeptosOptions;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::proxy::{ApiProxy, proxy_api};

/// Proxy and health routes.
pub fn api_routes(proxy: ApiProxy) -> Router {
    Router::new()
        .route("/api/", any(proxy_api))
        .route("/api/{*rest}", any(proxy_api))
        .route("/healthz", get(healthz))
        .with_state(proxy)
}

/// Full host router: API routes + bundle assets + Leptos SSR.
pub fn leptos_app(proxy: ApiProxy, leptos_options: LeptosOptions) -> Router {
    let routes = generate_route_list(client::app::App);

    let pkg_route = format!("/{}", leptos_options.site_pkg_dir);
    let pkg_dir = PathBuf::from(leptos_options.site_root.as_ref()).join(leptos_options.site_pkg_dir.as_ref());

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .fallback(leptos_axum::file_and_error_handler(client::app::shell))
        .with_state(leptos_options);

    api_routes(proxy)
        .nest_service(&pkg_route, ServeDir::new(pkg_dir))
        .merge(leptos_router)
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
