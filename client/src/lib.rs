//! # client
//!
//! Leptos + WASM frontend for the shared auth-flag demo. A single boolean
//! "authenticated" flag lives in an explicit store; one fragment writes it,
//! another observes it, demonstrating that mutations propagate through
//! shared state to every consumer.
//!
//! This crate contains the application shell, pages, components, and the
//! state store. The `server` crate serves it over axum with SSR.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;

/// WASM entry point: hydrate the server-rendered page in the browser.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
