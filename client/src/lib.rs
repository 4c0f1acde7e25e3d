//! # shop-client
//!
//! Leptos + WASM frontend for the demo shop: a check-in form, a product
//! catalog backed by a remote JSON API, a persisted cart, theme and language
//! preferences, and a toast host.
//!
//! The crate renders on the server (`ssr`) and hydrates in the browser
//! (`hydrate`). Browser-only effects sit behind the `hydrate` feature so the
//! state models and their tests build natively.

pub mod app;
pub mod components;
pub mod config;
pub mod i18n;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
