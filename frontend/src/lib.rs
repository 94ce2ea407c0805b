//! Browser entry point.
//!
//! cargo-leptos compiles this crate to WASM and calls [`hydrate`] from the
//! generated JS glue once the server-rendered page has loaded.

#![recursion_limit = "256"]

use app::App;
use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen]
pub fn hydrate() {
    // Fails only when a logger is already installed.
    let _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    log::debug!("hydrating landing page");
    leptos::mount::hydrate_body(App);
}
