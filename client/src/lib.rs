//! # client
//!
//! Leptos frontend for the MyBoard dashboard: the board list sidebar, the
//! dashboard page that hosts it, and the routed application shell. The same
//! crate is compiled for SSR (`ssr`) by the server and for the browser
//! (`hydrate`) as WASM.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;

/// WASM entry point: install browser logging and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger init failed: {e}");
    }
    leptos::mount::hydrate_body(app::App);
}
