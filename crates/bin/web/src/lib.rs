//! # movierec-web: browser entry point
//!
//! Composition root that wires the browser adapter into the page.
//!
//! ## Responsibilities
//! - Route panics to the browser console
//! - Read the optional configuration block from the page
//! - Install the `tracing` subscriber (the diagnostic channel)
//! - Mount every component the page has elements for
//!
//! ## Dependency rule
//! This is the **only** crate exporting a `wasm-bindgen` entry point.
//! It is the wiring layer: no component logic belongs here.

use movierec_adapter_web::config::ClientConfig;
use movierec_adapter_web::{logging, mount};
use wasm_bindgen::prelude::*;

/// Runs once the module is instantiated. Mounting waits for
/// `DOMContentLoaded` when the document is still being parsed.
///
/// # Errors
///
/// Returns an error to the JavaScript loader when there is no window.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))?;

    // Configuration
    let loaded = window
        .document()
        .map_or_else(|| Ok(ClientConfig::default()), |doc| ClientConfig::load(&doc));
    let (config, config_error) = match loaded {
        Ok(config) => (config, None),
        Err(err) => (ClientConfig::default(), Some(err)),
    };

    // Logging
    if let Err(err) = logging::init(&config.logging.filter) {
        web_sys::console::warn_1(&JsValue::from_str(&format!(
            "movierec: logging disabled: {err}"
        )));
    }
    if let Some(err) = config_error {
        tracing::error!(error = %err, "ignoring page configuration, using defaults");
    }

    // Components
    if let Err(err) = mount::mount_when_ready(&window, config) {
        tracing::error!(error = %err, "failed to schedule mounting");
    }
    Ok(())
}
