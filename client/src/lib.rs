//! # client
//!
//! Leptos + WASM frontend for the team roster page.
//!
//! This crate contains the page, card components, load state, the member
//! wire types shared with the server, and the role classifier that groups
//! members into sections.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
