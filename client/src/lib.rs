//! # client
//!
//! Leptos + WASM frontend for the portfolio site: the landing page, project
//! detail pages, and the theme controls (light/dark toggle and accent color
//! picker).
//!
//! Theme state itself lives in the `theme` crate. This crate provides the
//! browser backends for it (`localStorage`, the `<html>` element, the
//! `prefers-color-scheme` query) and exposes it to components via context.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
    if let Err(err) = console_log::init_with_level(level) {
        // The logger is what failed, so report straight to the console.
        web_sys::console::warn_1(&format!("console logger not installed: {err}").into());
    }
    leptos::mount::hydrate_body(app::App);
}
