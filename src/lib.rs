//! # login-lockout
//!
//! Leptos + WASM login form that submits to a mock remote endpoint and
//! throttles repeated attempts with a lockout timer persisted in
//! `localStorage`.
//!
//! The state machine, lockout store, timers, and API selection compile on the
//! host so they can be unit-tested without a browser. Browser glue lives
//! behind the `csr` feature.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: installs browser logging and mounts the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    app::mount();
}
