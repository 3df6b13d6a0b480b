//! Fold and unfold nested lists.

use web_sys::{Document, Element};

use crate::{
    config::{COLLAPSED_CLASS, LIST_INDICATOR_SELECTOR},
    dom,
    error::InitError,
};

/// Make list fold arrows toggle themselves and their list item.
///
/// Unlike callouts no inline style is written; the stylesheet hides folded
/// children based on the class alone.
pub fn bind(document: &Document) -> Result<(), InitError> {
    for indicator in dom::query_all(document, LIST_INDICATOR_SELECTOR)? {
        let target = indicator.clone();
        dom::listen(&indicator, "click", move || toggle(&target))?;
    }
    Ok(())
}

fn toggle(indicator: &Element) {
    let _ = indicator.class_list().toggle(COLLAPSED_CLASS);
    if let Some(parent) = indicator.parent_element() {
        let _ = parent.class_list().toggle(COLLAPSED_CLASS);
    }
}
