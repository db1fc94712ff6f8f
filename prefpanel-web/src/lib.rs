#![forbid(unsafe_code)]
//! Browser front end for the accessibility preference panel.
//!
//! On start the stored preferences are applied to `<html>` as `data-theme`,
//! `data-font-size` and `data-contrast`, and a floating panel is mounted into
//! `<body>`.
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

pub mod a11y;
pub mod bootstrap;
pub mod components;
pub mod dom;
#[cfg(target_arch = "wasm32")]
pub mod globals;
pub mod handlers;
pub mod mount;
pub mod root;
pub mod storage;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Info) {
        dom::console_error(&format!("accessibility panel logging unavailable: {err}"));
    }

    let ready = bootstrap::when_ready(|| match bootstrap::boot() {
        Ok(controller) => globals::install(controller),
        Err(err) => log::error!("accessibility panel failed to start: {err:#}"),
    });
    if let Err(err) = ready {
        log::error!("accessibility panel failed to start: {err:#}");
    }
}
