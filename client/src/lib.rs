//! # client
//!
//! Leptos + WASM frontend for brewlog: brewery search, saving, and the
//! signed-in user's saved list.
//!
//! Pages keep their state in `RwSignal`s and drive the `saves` reconciler
//! through [`util::cell::SignalCell`]. Browser-only code (HTTP, storage,
//! logging) is gated behind the `hydrate` feature; under `ssr` the same
//! components render without side effects.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install panic/log hooks and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
