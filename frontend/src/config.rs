//! Configuration for the note viewer enhancements.
//!
//! The selectors and class names describe the markup produced by the note
//! exporter; they are fixed. The values in [`ViewerConfig`] may be
//! overridden from the page through `initDocumentWithConfig`.

use serde::Deserialize;

use crate::error::InitError;

/// Titles of callouts that can be folded.
pub const CALLOUT_TITLE_SELECTOR: &str = ".callout.is-collapsible > .callout-title";
/// Fold arrow inside a callout title.
pub const CALLOUT_FOLD_SELECTOR: &str = ".callout-fold";
/// Body of a callout, hidden while folded.
pub const CALLOUT_CONTENT_SELECTOR: &str = ".callout-content";
/// Fold arrows in front of list items.
pub const LIST_INDICATOR_SELECTOR: &str = ".list-collapse-indicator";
/// The single light/dark switch.
pub const THEME_TOGGLE_SELECTOR: &str = "#theme-mode-toggle";
/// Buttons that copy the code block next to them.
pub const COPY_BUTTON_SELECTOR: &str = "button.copy-code-button";
/// Code element looked up under a copy button's parent.
pub const CODE_SELECTOR: &str = "code";

/// Marker class for folded callouts and lists.
pub const COLLAPSED_CLASS: &str = "is-collapsed";
/// Body class for the dark theme.
pub const THEME_DARK_CLASS: &str = "theme-dark";
/// Body class for the light theme.
pub const THEME_LIGHT_CLASS: &str = "theme-light";
/// Body classes present while the viewport is narrow.
pub const MOBILE_CLASSES: [&str; 2] = ["is-mobile", "is-phone"];

/// Widest viewport, in CSS pixels, still treated as a phone.
pub const DEFAULT_MOBILE_BREAKPOINT: f64 = 768.0;
/// Pinned Lucide UMD build.
pub const DEFAULT_ICON_SCRIPT_URL: &str = "https://unpkg.com/lucide@0.287.0/dist/umd/lucide.min.js";
/// Attribute naming the icon on a placeholder element.
pub const DEFAULT_ICON_NAME_ATTR: &str = "data-share-note-lucide";
/// Class added to every generated icon.
pub const DEFAULT_ICON_CLASS: &str = "callout-icon";

/// Runtime knobs, read from JSON with camelCase keys. Missing keys keep
/// their defaults.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ViewerConfig {
    /// Widths at or below this are classified as mobile.
    pub mobile_breakpoint: f64,
    /// Where the icon library is fetched from.
    pub icon_script_url: String,
    /// Placeholder attribute passed to `lucide.createIcons` as `nameAttr`.
    pub icon_name_attr: String,
    /// Class given to rendered icons.
    pub icon_class: String,
    /// Inject the icon library at all.
    pub load_icons: bool,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            mobile_breakpoint: DEFAULT_MOBILE_BREAKPOINT,
            icon_script_url: DEFAULT_ICON_SCRIPT_URL.to_string(),
            icon_name_attr: DEFAULT_ICON_NAME_ATTR.to_string(),
            icon_class: DEFAULT_ICON_CLASS.to_string(),
            load_icons: true,
        }
    }
}

impl ViewerConfig {
    /// Parse overrides from a JSON object. An empty string yields the
    /// defaults.
    pub fn from_json(raw: &str) -> Result<Self, InitError> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(raw)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_uses_defaults() {
        let config = ViewerConfig::from_json("  ").expect("defaults");
        assert_eq!(config, ViewerConfig::default());
        assert_eq!(config.mobile_breakpoint, 768.0);
        assert!(config.load_icons);
    }

    #[test]
    fn partial_override_keeps_other_defaults() {
        let config =
            ViewerConfig::from_json(r#"{"mobileBreakpoint": 600, "loadIcons": false}"#)
                .expect("valid json");
        assert_eq!(config.mobile_breakpoint, 600.0);
        assert!(!config.load_icons);
        assert_eq!(config.icon_script_url, DEFAULT_ICON_SCRIPT_URL);
        assert_eq!(config.icon_name_attr, "data-share-note-lucide");
    }

    #[test]
    fn malformed_json_is_a_config_error() {
        let err = ViewerConfig::from_json("{not json").unwrap_err();
        assert!(matches!(err, InitError::Config(_)));
    }
}
