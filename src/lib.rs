//! # material-client
//!
//! Leptos + WASM routing and session layer for the material system SPA.
//!
//! This crate owns the client-side route table (static routes plus category
//! subtrees registered at runtime from backend data), the navigation guard
//! that protects authenticated routes, and the session store driving login,
//! logout, and token lifecycle against the backend API.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod router;
pub mod state;
pub mod util;

/// WASM entrypoint: install logging and hydrate the app into the body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(crate::app::App);
}
