//! In-memory element tree for exercising the UI helpers off-browser.

use std::cell::RefCell;
use std::rc::Rc;

use super::{Document, DomError, Element, escape_text};

#[derive(Debug, Default)]
struct Node {
    id: String,
    classes: Vec<String>,
    inner_html: String,
    children: Vec<MemoryElement>,
}

/// Shared handle to an in-memory element.
#[derive(Debug, Clone, Default)]
pub struct MemoryElement(Rc<RefCell<Node>>);

impl MemoryElement {
    /// A detached element with the given id (empty for none).
    pub fn new(id: &str) -> Self {
        let node = Node {
            id: id.to_string(),
            ..Default::default()
        };
        Self(Rc::new(RefCell::new(node)))
    }

    pub fn with_class(self, class: &str) -> Self {
        self.0.borrow_mut().classes.push(class.to_string());
        self
    }

    pub fn append(&self, child: &MemoryElement) {
        self.0.borrow_mut().children.push(child.clone());
    }

    pub fn inner_html(&self) -> String {
        self.0.borrow().inner_html.clone()
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.0.borrow().classes.iter().any(|c| c == class)
    }

    fn find(&self, id: &str) -> Option<MemoryElement> {
        let node = self.0.borrow();
        node.children.iter().find_map(|child| {
            if child.0.borrow().id == id {
                Some(child.clone())
            } else {
                child.find(id)
            }
        })
    }

    fn collect_with_class(&self, class: &str, out: &mut Vec<MemoryElement>) {
        for child in &self.0.borrow().children {
            if child.has_class(class) {
                out.push(child.clone());
            }
            child.collect_with_class(class, out);
        }
    }
}

impl Element for MemoryElement {
    fn id(&self) -> String {
        self.0.borrow().id.clone()
    }

    /// Replaces the content, detaching every child.
    fn set_inner_html(&self, html: &str) {
        let mut node = self.0.borrow_mut();
        node.inner_html = html.to_string();
        node.children.clear();
    }

    fn descendants_with_class(&self, class: &str) -> Vec<Self> {
        let mut found = Vec::new();
        self.collect_with_class(class, &mut found);
        found
    }

    fn add_class(&self, class: &str) -> Result<(), DomError> {
        validate_class(class)?;
        if !self.has_class(class) {
            self.0.borrow_mut().classes.push(class.to_string());
        }
        Ok(())
    }

    fn remove_class(&self, class: &str) -> Result<(), DomError> {
        validate_class(class)?;
        self.0.borrow_mut().classes.retain(|c| c != class);
        Ok(())
    }
}

/// Same rules as `DOMTokenList`.
fn validate_class(class: &str) -> Result<(), DomError> {
    if class.is_empty() {
        return Err(DomError("SyntaxError: the token must not be empty".to_string()));
    }
    if class.contains(|c: char| c.is_ascii_whitespace()) {
        return Err(DomError(format!(
            "InvalidCharacterError: the token '{}' contains whitespace",
            class
        )));
    }
    Ok(())
}

/// A document whose tree hangs off [`body`](Self::body).
#[derive(Debug, Clone, Default)]
pub struct MemoryDocument {
    body: MemoryElement,
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn body(&self) -> MemoryElement {
        self.body.clone()
    }
}

impl Document for MemoryDocument {
    type Element = MemoryElement;

    fn element_by_id(&self, id: &str) -> Option<MemoryElement> {
        if id.is_empty() {
            return None;
        }
        self.body.find(id)
    }

    fn escape_text(&self, text: &str) -> String {
        escape_text(text)
    }
}
