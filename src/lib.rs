//! # activity-board
//!
//! Leptos + WASM frontend for browsing school activities, signing up for
//! one, and removing participants.
//!
//! This crate contains the page, its components, plain state models, the
//! REST client for the activities backend, and the controller that ties
//! them together. Build with `--features csr` for the browser; without it the
//! crate compiles natively so the logic can be unit-tested.

pub mod app;
pub mod board;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging, read config, mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    use leptos::prelude::*;

    use crate::app::App;
    use crate::config::BoardConfig;

    console_error_panic_hook::set_once();

    let (config, config_error) = match util::browser::read_config() {
        Ok(config) => (config, None),
        Err(err) => (BoardConfig::default(), Some(err)),
    };
    let _ = console_log::init_with_level(config.log_level);
    if let Some(err) = config_error {
        log::warn!("invalid board config, using defaults: {err}");
    }
    log::info!("activity board starting (api base '{}')", config.api_base);

    match util::browser::mount_element() {
        Some(root) => leptos::mount::mount_to(root, move || view! { <App config=config/> }).forget(),
        None => leptos::mount::mount_to_body(move || view! { <App config=config/> }),
    }
}
