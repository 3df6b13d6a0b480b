//! Errors raised while wiring up the page.

use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};

/// Reasons the page enhancements could not be installed.
#[derive(Debug, Error)]
pub enum InitError {
    /// Not running in a browser window.
    #[error("no global `window` exists")]
    NoWindow,
    /// The window has no document.
    #[error("window has no document")]
    NoDocument,
    /// The document has no `<body>` yet.
    #[error("document has no <body>")]
    NoBody,
    /// The document has no `<head>`.
    #[error("document has no <head>")]
    NoHead,
    /// A required element is absent from the markup.
    #[error("required element `{selector}` not found")]
    MissingElement {
        /// Selector that matched nothing.
        selector: &'static str,
    },
    /// A DOM call threw.
    #[error("DOM operation failed: {0}")]
    Dom(String),
    /// The override JSON could not be parsed.
    #[error("invalid viewer config: {0}")]
    Config(#[from] serde_json::Error),
}

impl InitError {
    pub(crate) fn dom(value: JsValue) -> Self {
        Self::Dom(describe_js_error(&value))
    }
}

impl From<InitError> for JsValue {
    fn from(err: InitError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}

/// Best-effort text for a thrown JS value.
pub(crate) fn describe_js_error(value: &JsValue) -> String {
    if let Some(text) = value.as_string() {
        return text;
    }
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    format!("{:?}", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_element_names_selector() {
        let err = InitError::MissingElement {
            selector: "#theme-mode-toggle",
        };
        assert_eq!(err.to_string(), "required element `#theme-mode-toggle` not found");
    }
}
