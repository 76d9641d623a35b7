//! # mealops-client
//!
//! Leptos + WASM browser client for the MealOps school-meal catering
//! operations platform: a mobile-oriented PWA for field staff (drivers,
//! kitchen crews, storekeepers) and a desktop console for managers.
//!
//! The crate holds the session/auth store, the route guard, the
//! role-permission evaluator, and thin REST wrappers per functional area.
//! All heavier logic (scheduling, stock math, reporting) lives in the
//! backend; this client is deliberately a pass-through UI layer.

pub mod app;
pub mod auth;
pub mod components;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;
pub mod util;

/// Browser entry point: mount the app over the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
