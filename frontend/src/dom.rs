//! Small DOM helpers shared by the behaviors.

use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{Document, Element, EventTarget};

use crate::error::InitError;

/// Every element matching `selector`, in document order.
pub fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>, InitError> {
    let list = document.query_selector_all(selector).map_err(InitError::dom)?;
    Ok((0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

/// Attach `handler` to `event` on `target` for the rest of the page's life.
///
/// The closure is leaked on purpose: listeners installed here are never
/// removed, and dropping the closure would invalidate the JS callback.
pub fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), InitError>
where
    F: FnMut() + 'static,
{
    let closure = Closure::<dyn FnMut()>::new(handler);
    target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .map_err(InitError::dom)?;
    closure.forget();
    Ok(())
}
