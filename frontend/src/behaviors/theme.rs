//! Light/dark theme switch.

use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{Document, HtmlElement};

use crate::{config::THEME_TOGGLE_SELECTOR, error::InitError, state::Theme};

/// Install the light/dark switch.
///
/// The handler is assigned to the control's `onclick` property, so binding
/// twice replaces rather than stacks. Fails when the control is missing.
pub fn bind(document: &Document) -> Result<(), InitError> {
    let toggle = document
        .query_selector(THEME_TOGGLE_SELECTOR)
        .map_err(InitError::dom)?
        .ok_or(InitError::MissingElement {
            selector: THEME_TOGGLE_SELECTOR,
        })?
        .dyn_into::<HtmlElement>()
        .map_err(|_| InitError::Dom(format!("`{}` is not an HTML element", THEME_TOGGLE_SELECTOR)))?;
    let body = document.body().ok_or(InitError::NoBody)?;

    let onclick = Closure::<dyn FnMut()>::new(move || {
        // Both classes flip; with exactly one present before, exactly one
        // is present after.
        let classes = body.class_list();
        for theme in Theme::ALL {
            let _ = classes.toggle(theme.class_name());
        }
    });
    toggle.set_onclick(Some(onclick.as_ref().unchecked_ref()));
    onclick.forget();
    Ok(())
}
