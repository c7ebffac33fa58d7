use crate::error::WebError;
use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Window};

pub fn window() -> Result<Window, WebError> {
    web_sys::window().ok_or(WebError::NoWindow)
}

pub fn document() -> Result<Document, WebError> {
    window()?.document().ok_or(WebError::NoDocument)
}

/// All elements matching `selector`, in document order
pub fn query_all(root: &Document, selector: &str) -> Result<Vec<Element>, WebError> {
    let nodes = root.query_selector_all(selector)?;
    Ok((0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

/// Run `f` once the DOM is parsed; immediately if that already happened
pub fn on_document_ready(document: &Document, f: impl FnOnce() + 'static) {
    if document.ready_state() != "loading" {
        f();
        return;
    }

    EventListener::once(document, "DOMContentLoaded", move |_| f()).forget();
}
