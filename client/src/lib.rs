//! # client
//!
//! Leptos + WASM frontend for the employee spotlight widget.
//!
//! The display surface (profile card, comment list) and the comment composer
//! modal live here, along with their pure state machines, the GIF proxy
//! client, and color/pattern helpers. The crate is rendered on the server
//! with the `ssr` feature and hydrated in the browser with `hydrate`.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
