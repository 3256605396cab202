//! # heartcraft-web
//!
//! Leptos + WASM frontend for the HeartCraft matchmaking service.
//! Marketing pages, registration/login, and the authenticated member
//! dashboard, backed entirely by the remote REST API.
//!
//! This crate contains pages, components, application state, the
//! bearer-token store, and thin typed wrappers around each REST
//! resource. All state of record lives server-side; the client only
//! fetches, submits edits, and re-fetches.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod services;
pub mod state;
pub mod util;

/// WASM entry point: install panic/log hooks and hydrate the body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
