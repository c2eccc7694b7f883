//! # homeoffice-client
//!
//! Leptos + WASM frontend for Home Office AI: the landing page, the auth
//! view, and the ad-generation dashboard.
//!
//! This crate contains pages, components, application state, and the REST
//! helpers that talk to `homeoffice-server`. The `ssr` feature is consumed by
//! the server for rendering; `hydrate` builds the browser bundle.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
