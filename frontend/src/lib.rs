//! Interactive behavior for exported Share Note pages.
//!
//! The page is static HTML produced by the note exporter. Once its markup
//! is in place, the page calls `initDocument()` and this crate wires up:
//!
//! - folding for collapsible callouts and lists
//! - the light/dark theme switch
//! - "copy" buttons on code blocks
//! - `is-mobile` / `is-phone` body classes that follow the window width
//! - the Lucide icon library for callout icons
//!
//! Every behavior only toggles classes or inline styles on nodes that
//! already exist; nothing is persisted.

pub mod behaviors;
pub mod config;
mod dom;
pub mod error;
pub mod state;

use wasm_bindgen::prelude::*;
use web_sys::{Document, Window};

use crate::{
    behaviors::{callout, copy_code, icons, list_fold, responsive, theme},
    config::ViewerConfig,
    error::InitError,
};

/// Install every behavior on `document`.
///
/// Steps run in a fixed order and stop at the first failure, leaving the
/// earlier ones bound. In practice only a missing theme switch fails, after
/// callouts and lists are already live.
pub fn enhance(window: &Window, document: &Document, config: &ViewerConfig) -> Result<(), InitError> {
    callout::bind(document)?;
    list_fold::bind(document)?;
    theme::bind(document)?;
    copy_code::bind(document)?;
    responsive::bind(window, document, config.mobile_breakpoint)?;
    if config.load_icons {
        icons::load(document, config)?;
    }
    Ok(())
}

/// Page entry point with default settings. Call once after the document's
/// markup is available.
#[wasm_bindgen(js_name = initDocument)]
pub fn init_document() -> Result<(), JsValue> {
    run(Ok(ViewerConfig::default()))
}

/// Like `initDocument`, with a JSON object of [`ViewerConfig`] overrides.
#[wasm_bindgen(js_name = initDocumentWithConfig)]
pub fn init_document_with_config(config_json: &str) -> Result<(), JsValue> {
    run(ViewerConfig::from_json(config_json))
}

fn run(config: Result<ViewerConfig, InitError>) -> Result<(), JsValue> {
    let result = config.and_then(|config| {
        let window = web_sys::window().ok_or(InitError::NoWindow)?;
        let document = window.document().ok_or(InitError::NoDocument)?;
        enhance(&window, &document, &config)
    });
    if let Err(err) = &result {
        web_sys::console::error_1(&format!("Failed to initialize note page: {}", err).into());
    }
    result.map_err(JsValue::from)
}
