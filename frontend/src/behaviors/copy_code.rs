//! "Copy" buttons on code blocks.

use std::rc::Rc;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{window, Document, Element, HtmlElement};

use crate::{
    config::{CODE_SELECTOR, COPY_BUTTON_SELECTOR},
    dom,
    error::{describe_js_error, InitError},
};

/// Destination for copied code.
pub trait ClipboardWriter {
    /// Start writing `text`. Completion and failure are not reported back.
    fn write_text(&self, text: String);
}

/// `navigator.clipboard.writeText`, awaited on the local executor.
#[derive(Debug, Default, Clone, Copy)]
pub struct NavigatorClipboard;

impl ClipboardWriter for NavigatorClipboard {
    fn write_text(&self, text: String) {
        wasm_bindgen_futures::spawn_local(async move {
            if let Err(err) = write_to_navigator(&text).await {
                web_sys::console::warn_1(
                    &format!("Clipboard write failed: {}", describe_js_error(&err)).into(),
                );
            }
        });
    }
}

async fn write_to_navigator(text: &str) -> Result<(), JsValue> {
    let win = window().ok_or_else(|| JsValue::from_str("no window"))?;
    let clipboard = js_sys::Reflect::get(&win.navigator(), &JsValue::from_str("clipboard"))?;
    if clipboard.is_undefined() || clipboard.is_null() {
        return Err(JsValue::from_str("clipboard API unavailable"));
    }
    let write_text = js_sys::Reflect::get(&clipboard, &JsValue::from_str("writeText"))?;
    let write_fn = write_text
        .dyn_ref::<js_sys::Function>()
        .ok_or_else(|| JsValue::from_str("clipboard.writeText is not a function"))?;
    let promise = write_fn
        .call1(&clipboard, &JsValue::from_str(text))?
        .dyn_into::<js_sys::Promise>()?;
    wasm_bindgen_futures::JsFuture::from(promise).await?;
    Ok(())
}

/// Wire copy buttons to the system clipboard.
pub fn bind(document: &Document) -> Result<(), InitError> {
    bind_with(document, Rc::new(NavigatorClipboard))
}

/// Wire copy buttons to `writer`.
pub fn bind_with(document: &Document, writer: Rc<dyn ClipboardWriter>) -> Result<(), InitError> {
    for button in dom::query_all(document, COPY_BUTTON_SELECTOR)? {
        let target = button.clone();
        let writer = Rc::clone(&writer);
        dom::listen(&button, "click", move || {
            if let Some(text) = code_text(&target) {
                writer.write_text(clipboard_payload(&text).to_string());
            }
        })?;
    }
    Ok(())
}

/// Rendered text of the first `code` under the button's parent.
fn code_text(button: &Element) -> Option<String> {
    let code = button.parent_element()?.query_selector(CODE_SELECTOR).ok()??;
    match code.dyn_ref::<HtmlElement>() {
        Some(html) => Some(html.inner_text()),
        None => code.text_content(),
    }
}

fn clipboard_payload(raw: &str) -> &str {
    raw.trim()
}

#[cfg(test)]
mod tests {
    use super::clipboard_payload;

    #[test]
    fn strips_surrounding_whitespace_only() {
        assert_eq!(clipboard_payload("  print(1)\n"), "print(1)");
        assert_eq!(clipboard_payload("\tfn main() {\n    run();\n}\n\n"), "fn main() {\n    run();\n}");
        assert_eq!(clipboard_payload(" \n "), "");
    }
}
