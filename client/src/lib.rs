//! # client
//!
//! Leptos + WASM frontend for the SEO dashboard.
//!
//! This crate contains pages, components, per-panel request state, and the
//! HTTP client for the analysis backend. Wire types and error mapping live in
//! the shared `reports` crate so the CLI renders the same messages.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point invoked by the generated wasm bindings.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
