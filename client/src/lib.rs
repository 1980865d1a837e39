//! # client
//!
//! Leptos + WASM frontend for browsing GitLab CI/CD variables.
//!
//! This crate contains the page, components, application state and the REST
//! helpers for the variables backend. Built with `hydrate` for the browser and
//! with `ssr` for the `server` crate's shell rendering.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: installs logging and hydrates the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
