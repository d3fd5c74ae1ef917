//! # admin-client
//!
//! Leptos + WASM frontend for the marketplace admin dashboard.
//!
//! This crate contains pages, components, per-resource state models, the
//! REST boundary to the marketplace backend, and the browser helpers for
//! file selection and preview URLs. The host binary renders it on the server
//! (`ssr`) and the browser hydrates it (`hydrate`).

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point called by the generated hydration script.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
