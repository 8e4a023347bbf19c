//! # marinova-client
//!
//! Leptos + WASM front-end for the MARINOVA ocean data dashboard.
//!
//! The heart of this crate is the authentication session core: a token
//! store backed by browser `localStorage`, an HTTP gateway for the remote
//! auth endpoints, and a session controller that owns the current user and
//! decides when the visitor counts as signed in. Pages and routing render
//! whatever state that core reports.

pub mod app;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point; mounts the app over the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
