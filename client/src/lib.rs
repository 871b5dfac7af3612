//! # client
//!
//! Leptos UI for the IAISO and Rooman sites. Pages, components, theme and
//! form state live here; all scroll, carousel, menu and timeline math comes
//! from the `motion` crate so it can be tested off the browser.
//!
//! Built twice: with `ssr` for server rendering inside `iaiso-server`, and
//! with `hydrate` as the wasm bundle that takes over in the browser.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// Wasm entry point: installs logging and hydrates the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&format!("console logger unavailable: {e}").into());
    }
    leptos::mount::hydrate_body(app::App);
}
