//! Two-state presentation flags. The DOM class lists are the only storage;
//! these types name the states and the rules that map between them.

use crate::config::{THEME_DARK_CLASS, THEME_LIGHT_CLASS};

/// Whether a callout or list is folded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fold {
    /// Content shown.
    Expanded,
    /// Content hidden.
    Collapsed,
}

impl Fold {
    /// State matching the presence of the collapsed marker class.
    pub fn from_collapsed(collapsed: bool) -> Self {
        if collapsed {
            Fold::Collapsed
        } else {
            Fold::Expanded
        }
    }

    /// The other state.
    pub fn toggled(self) -> Self {
        match self {
            Fold::Expanded => Fold::Collapsed,
            Fold::Collapsed => Fold::Expanded,
        }
    }

    /// Whether the collapsed marker class belongs on the element.
    pub fn is_collapsed(self) -> bool {
        matches!(self, Fold::Collapsed)
    }

    /// Inline `display` value for the content. Empty clears the inline
    /// style so the stylesheet decides.
    pub fn content_display(self) -> &'static str {
        match self {
            Fold::Collapsed => "none",
            Fold::Expanded => "",
        }
    }
}

/// Page color scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    /// Light background.
    Light,
    /// Dark background.
    Dark,
}

impl Theme {
    /// Both themes, each owning one body class.
    pub const ALL: [Theme; 2] = [Theme::Dark, Theme::Light];

    /// Body class marking this theme.
    pub fn class_name(self) -> &'static str {
        match self {
            Theme::Dark => THEME_DARK_CLASS,
            Theme::Light => THEME_LIGHT_CLASS,
        }
    }

    /// The opposite theme.
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }
}

/// Layout class derived from the window width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Viewport {
    /// At or below the breakpoint.
    Mobile,
    /// Wider than the breakpoint.
    Desktop,
}

impl Viewport {
    /// Classify `width` against `breakpoint` (inclusive).
    pub fn classify(width: f64, breakpoint: f64) -> Self {
        if width <= breakpoint {
            Viewport::Mobile
        } else {
            Viewport::Desktop
        }
    }

    /// Whether the mobile body classes apply.
    pub fn is_mobile(self) -> bool {
        matches!(self, Viewport::Mobile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fold_returns_to_start_after_two_toggles() {
        for start in [Fold::Expanded, Fold::Collapsed] {
            assert_ne!(start.toggled(), start);
            assert_eq!(start.toggled().toggled(), start);
        }
        assert!(Fold::Expanded.toggled().is_collapsed());
    }

    #[test]
    fn theme_returns_to_start_after_two_toggles() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        for start in Theme::ALL {
            assert_eq!(start.toggled().toggled(), start);
        }
    }

    #[test]
    fn collapsed_content_is_hidden_inline() {
        assert_eq!(Fold::from_collapsed(true).content_display(), "none");
        assert_eq!(Fold::from_collapsed(false).content_display(), "");
    }

    #[test]
    fn themes_map_to_distinct_classes() {
        assert_eq!(Theme::Dark.class_name(), "theme-dark");
        assert_eq!(Theme::Light.class_name(), "theme-light");
        assert_ne!(Theme::ALL[0].class_name(), Theme::ALL[1].class_name());
    }

    #[test]
    fn breakpoint_is_inclusive() {
        assert_eq!(Viewport::classify(500.0, 768.0), Viewport::Mobile);
        assert_eq!(Viewport::classify(768.0, 768.0), Viewport::Mobile);
        assert_eq!(Viewport::classify(769.0, 768.0), Viewport::Desktop);
        assert!(!Viewport::classify(1024.0, 768.0).is_mobile());
    }
}
