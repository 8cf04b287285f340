//! [`Document`] and [`Element`] over `web-sys`.

use wasm_bindgen::{JsCast, JsValue};

use super::{Document, DomError, Element, escape_text};

/// The page's `document`.
#[derive(Debug, Clone)]
pub struct BrowserDocument {
    document: web_sys::Document,
}

impl BrowserDocument {
    pub fn new(document: web_sys::Document) -> Self {
        Self { document }
    }

    /// The global `window.document`, if running in a browser page.
    pub fn global() -> Option<Self> {
        web_sys::window()?.document().map(Self::new)
    }
}

impl Document for BrowserDocument {
    type Element = web_sys::Element;

    fn element_by_id(&self, id: &str) -> Option<web_sys::Element> {
        self.document.get_element_by_id(id)
    }

    /// Assign as `textContent` of a detached `<div>` and read `innerHTML` back.
    fn escape_text(&self, text: &str) -> String {
        match self.document.create_element("div") {
            Ok(scratch) => {
                scratch.set_text_content(Some(text));
                scratch.inner_html()
            }
            Err(_) => escape_text(text),
        }
    }
}

impl Element for web_sys::Element {
    fn id(&self) -> String {
        web_sys::Element::id(self)
    }

    fn set_inner_html(&self, html: &str) {
        web_sys::Element::set_inner_html(self, html);
    }

    fn descendants_with_class(&self, class: &str) -> Vec<Self> {
        // The collection is live; snapshot it before any class changes.
        let collection = self.get_elements_by_class_name(class);
        (0..collection.length())
            .filter_map(|i| collection.item(i))
            .collect()
    }

    fn add_class(&self, class: &str) -> Result<(), DomError> {
        self.class_list().add_1(class).map_err(dom_error)
    }

    fn remove_class(&self, class: &str) -> Result<(), DomError> {
        self.class_list().remove_1(class).map_err(dom_error)
    }
}

/// `DOMException`s are `Error`s with a `message`.
fn dom_error(value: JsValue) -> DomError {
    let message = value
        .dyn_ref::<js_sys::Error>()
        .and_then(|err| err.message().as_string())
        .unwrap_or_else(|| format!("{:?}", value));
    DomError(message)
}
