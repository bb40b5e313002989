//! # client
//!
//! Leptos + WASM frontend for the chat rooms application.
//!
//! This crate contains the router shell, the toast and auth providers, the
//! route guard, pages, and the REST helpers used behind the host's `/api/`
//! proxy. The `hydrate` feature builds the browser bundle; `ssr` is enabled by
//! the host for server rendering.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger unavailable: {e}");
    }
    leptos::mount::hydrate_body(app::App);
}
