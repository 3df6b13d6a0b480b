//! `is-mobile` / `is-phone` body classes that follow the window width.

use web_sys::{Document, HtmlElement, Window};

use crate::{config::MOBILE_CLASSES, dom, error::InitError, state::Viewport};

/// Apply the classes now and again on every `resize`, without debouncing.
pub fn bind(window: &Window, document: &Document, breakpoint: f64) -> Result<(), InitError> {
    let body = document.body().ok_or(InitError::NoBody)?;
    refresh(window, &body, breakpoint);

    let win = window.clone();
    dom::listen(window, "resize", move || refresh(&win, &body, breakpoint))
}

/// Set or clear the mobile classes on `body` for a viewport `width`.
pub fn apply(body: &HtmlElement, width: f64, breakpoint: f64) -> Viewport {
    let viewport = Viewport::classify(width, breakpoint);
    let classes = body.class_list();
    let [mobile, phone] = MOBILE_CLASSES;
    let _ = if viewport.is_mobile() {
        classes.add_2(mobile, phone)
    } else {
        classes.remove_2(mobile, phone)
    };
    viewport
}

fn refresh(window: &Window, body: &HtmlElement, breakpoint: f64) {
    if let Some(width) = window.inner_width().ok().and_then(|w| w.as_f64()) {
        apply(body, width, breakpoint);
    }
}
