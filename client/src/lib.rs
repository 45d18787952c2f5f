//! # client
//!
//! Leptos + WASM admin console for a product catalog served by an external
//! REST backend.
//!
//! This crate contains the app shell, pages, components, session/product/modal
//! state, the typed backend client, and the token cookie helpers. The host
//! server renders it with SSR; the `hydrate` feature builds the browser side.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(test)]
mod test_helpers;

/// WASM entry point: install logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
