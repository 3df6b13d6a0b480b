//! Fold and unfold collapsible callouts from their title bar.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

use crate::{
    config::{
        CALLOUT_CONTENT_SELECTOR, CALLOUT_FOLD_SELECTOR, CALLOUT_TITLE_SELECTOR, COLLAPSED_CLASS,
    },
    dom,
    error::InitError,
    state::Fold,
};

/// Make every collapsible callout title toggle its callout.
pub fn bind(document: &Document) -> Result<(), InitError> {
    for title in dom::query_all(document, CALLOUT_TITLE_SELECTOR)? {
        let target = title.clone();
        dom::listen(&title, "click", move || toggle(&target))?;
    }
    Ok(())
}

fn toggle(title: &Element) {
    let Some(callout) = title.parent_element() else {
        return;
    };
    let classes = callout.class_list();
    let next = Fold::from_collapsed(classes.contains(COLLAPSED_CLASS)).toggled();
    let _ = classes.toggle_with_force(COLLAPSED_CLASS, next.is_collapsed());

    // Flipped independently of the callout.
    if let Ok(Some(fold)) = title.query_selector(CALLOUT_FOLD_SELECTOR) {
        let _ = fold.class_list().toggle(COLLAPSED_CLASS);
    }

    let content = callout
        .query_selector(CALLOUT_CONTENT_SELECTOR)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok());
    if let Some(content) = content {
        let _ = content
            .style()
            .set_property("display", next.content_display());
    }
}
