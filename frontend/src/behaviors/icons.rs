//! Lucide icon loader.
//!
//! Appends the library's UMD build to `<head>` and, once it has loaded,
//! replaces every placeholder carrying the configured name attribute with
//! an inline SVG. A failed fetch only logs a warning; placeholders stay
//! empty.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlScriptElement};

use crate::{config::ViewerConfig, dom, error::InitError};

/// Inject the icon script. Returns the appended element.
pub fn load(document: &Document, config: &ViewerConfig) -> Result<HtmlScriptElement, InitError> {
    let head = document.head().ok_or(InitError::NoHead)?;
    let script = document
        .create_element("script")
        .map_err(InitError::dom)?
        .dyn_into::<HtmlScriptElement>()
        .map_err(|_| InitError::Dom("created <script> is not a script element".to_string()))?;
    script.set_type("text/javascript");
    script.set_src(&config.icon_script_url);

    let name_attr = config.icon_name_attr.clone();
    let icon_class = config.icon_class.clone();
    dom::listen(&script, "load", move || {
        if let Err(err) = create_icons(&name_attr, &icon_class) {
            web_sys::console::error_1(&err);
        }
    })?;

    let url = config.icon_script_url.clone();
    dom::listen(&script, "error", move || {
        web_sys::console::warn_1(&format!("Failed to load icon library from {}", url).into());
    })?;

    head.append_child(&script).map_err(InitError::dom)?;
    Ok(script)
}

/// `lucide.createIcons({ attrs: { class: [icon_class] }, nameAttr })`
fn create_icons(name_attr: &str, icon_class: &str) -> Result<(), JsValue> {
    let lucide = js_sys::Reflect::get(&js_sys::global(), &"lucide".into())?;
    if lucide.is_undefined() || lucide.is_null() {
        return Err("icon library loaded but `lucide` is not defined".into());
    }
    let create = js_sys::Reflect::get(&lucide, &"createIcons".into())?;
    let create = create
        .dyn_ref::<js_sys::Function>()
        .ok_or_else(|| JsValue::from_str("lucide.createIcons is not a function"))?;

    let classes = js_sys::Array::new();
    classes.push(&icon_class.into());
    let attrs = js_sys::Object::new();
    js_sys::Reflect::set(&attrs, &"class".into(), &classes)?;
    let options = js_sys::Object::new();
    js_sys::Reflect::set(&options, &"attrs".into(), &attrs)?;
    js_sys::Reflect::set(&options, &"nameAttr".into(), &name_attr.into())?;

    create.call1(&lucide, &options)?;
    Ok(())
}
