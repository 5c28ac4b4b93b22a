//! # unipulse-admin
//!
//! Leptos + WASM admin console for the Uni-pulse engagement platform.
//! Staff manage announcements, events, and forums through one generic
//! list/create/edit/delete workflow parameterized by a resource descriptor.
//!
//! The workflow state machines live in [`resource`] and are plain,
//! natively-tested values; [`net`] turns their planned requests into HTTP
//! calls in the browser; [`pages`] and [`components`] wire both into the
//! routed UI.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod resource;
pub mod util;

/// Browser entry point: attach the app to the server-rendered DOM.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
