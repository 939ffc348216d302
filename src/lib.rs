//! ProjectFlow - sign-in, registration and navigation for a team project tracker
//!
//! Leptos full-stack app: the axum server renders the pages and proxies
//! `/api/auth/*` to the authentication service, the wasm client hydrates
//! and runs the form flows.

#![recursion_limit = "4096"]

pub mod app;
pub mod core;
pub mod ui;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
