//! # market-dashboard
//!
//! Leptos + WASM glue for the market dashboard pages. Polls the server's
//! status endpoint, keeps the status panel in sync with the latest snapshot,
//! and exposes table sort/filter/export and notification helpers to the
//! server-rendered templates.
//!
//! Everything that needs a browser lives behind the `csr` feature. The pure
//! state and helper modules build and test natively.

pub mod app;
#[cfg(feature = "csr")]
pub mod bindings;
pub mod components;
pub mod config;
pub mod net;
pub mod state;
pub mod util;

/// Browser entry point: installs logging and mounts the dashboard.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger already installed: {e}");
    }
    app::mount();
}
