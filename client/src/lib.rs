//! # client
//!
//! Leptos + WASM frontend for the MedAI Diagnostics demo site.
//!
//! This crate contains the landing and dashboard pages, their components, the
//! two client-side state machines (demo sequencer and upload staging list),
//! the canned case content, and the plain-text report renderer. It is
//! rendered on the server by the root `medai` binary (`ssr` feature) and
//! hydrated in the browser (`hydrate` feature).

pub mod app;
pub mod components;
pub mod content;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install the panic hook and console logger, then
/// hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
