//! Host document abstraction.
//!
//! The UI helpers only need a handful of DOM operations. They are expressed
//! as the [`Document`] and [`Element`] traits so the same code drives the
//! browser ([`BrowserDocument`]) and, in tests, an in-memory tree.

mod browser;
mod escape;
#[cfg(any(test, feature = "mock"))]
mod memory;

use thiserror::Error;

pub use browser::BrowserDocument;
pub use escape::{escape_html, escape_text};
#[cfg(any(test, feature = "mock"))]
pub use memory::{MemoryDocument, MemoryElement};

/// A DOM call the host rejected, with the host's message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct DomError(pub String);

/// The page-level operations: global lookup and text escaping.
pub trait Document {
    type Element: Element;

    /// Global `getElementById`.
    fn element_by_id(&self, id: &str) -> Option<Self::Element>;

    /// Serialize `text` as it would appear inside an element's markup.
    fn escape_text(&self, text: &str) -> String;
}

/// A live element handle.
pub trait Element: Clone {
    /// The element's `id` attribute, empty when unset.
    fn id(&self) -> String;

    /// Replace the whole content of the element.
    fn set_inner_html(&self, html: &str);

    /// Every descendant carrying `class`, in document order.
    fn descendants_with_class(&self, class: &str) -> Vec<Self>;

    /// Fails on class names the host rejects (empty, or containing
    /// whitespace).
    fn add_class(&self, class: &str) -> Result<(), DomError>;

    fn remove_class(&self, class: &str) -> Result<(), DomError>;
}

/// Where a UI helper should act: an element handle, or an id to look up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target<E> {
    Element(E),
    Id(String),
}

impl<E: Element> Target<E> {
    /// Resolve to a live element. Only an id lookup can miss.
    pub fn resolve<D>(&self, document: &D) -> Option<E>
    where
        D: Document<Element = E>,
    {
        match self {
            Self::Element(element) => Some(element.clone()),
            Self::Id(id) => document.element_by_id(id),
        }
    }

    /// Short description for diagnostics, e.g. `#status`.
    pub fn describe(&self) -> String {
        match self {
            Self::Element(element) => format!("<element #{}>", element.id()),
            Self::Id(id) => format!("#{}", id),
        }
    }
}

impl<E> From<&str> for Target<E> {
    fn from(id: &str) -> Self {
        Self::Id(id.to_string())
    }
}

impl<E> From<String> for Target<E> {
    fn from(id: String) -> Self {
        Self::Id(id)
    }
}

/// Resolve `target` against `document`.
pub fn resolve_target<D: Document>(document: &D, target: &Target<D::Element>) -> Option<D::Element> {
    target.resolve(document)
}
