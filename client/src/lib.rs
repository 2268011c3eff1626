//! # expo-admin-client
//!
//! Leptos + WASM admin dashboard for the INDTEC EXPO platform.
//!
//! This crate contains the routed pages, shared components, per-screen state,
//! the typed REST client, and the generic list pipeline every table uses.
//! Browser-only code sits behind the `hydrate` feature; the `ssr` feature lets
//! the host crate render the shell.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install browser logging and hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        leptos::logging::warn!("console logger already installed");
    }
    leptos::mount::hydrate_body(app::App);
}
