//! Single-selection highlighting for list items.

use crate::config::{DEFAULT_SELECTED_CLASS, LIST_ITEM_CLASS};
use crate::diagnostics::{Diagnostic, DiagnosticSink};
use crate::dom::{Document, DomError, Element};

/// Keeps at most one `.list-item` in a container marked as selected.
///
/// Class names the host rejects are reported to the sink.
#[derive(Debug, Clone)]
pub struct ListSelector<D, S> {
    document: D,
    sink: S,
}

impl<D: Document, S: DiagnosticSink> ListSelector<D, S> {
    pub fn new(document: D, sink: S) -> Self {
        Self { document, sink }
    }

    /// Select `item_id` inside `container_id` using the `selected` class.
    pub fn select(&self, container_id: &str, item_id: &str) {
        self.select_with_class(container_id, item_id, DEFAULT_SELECTED_CLASS);
    }

    /// Clear `selected_class` from every list item in the container, then
    /// put it on `item_id`.
    ///
    /// A missing container skips the clearing step; a missing item leaves
    /// nothing selected. Neither is an error.
    pub fn select_with_class(&self, container_id: &str, item_id: &str, selected_class: &str) {
        if let Some(container) = self.document.element_by_id(container_id) {
            for item in container.descendants_with_class(LIST_ITEM_CLASS) {
                if let Err(err) = item.remove_class(selected_class) {
                    // Every item would fail the same way.
                    self.report(selected_class, err);
                    break;
                }
            }
        }

        if let Some(item) = self.document.element_by_id(item_id)
            && let Err(err) = item.add_class(selected_class)
        {
            self.report(selected_class, err);
        }
    }

    fn report(&self, class: &str, err: DomError) {
        self.sink.report(Diagnostic::ClassUpdateFailed {
            operation: "select",
            class: class.to_string(),
            message: err.to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::MemorySink;
    use crate::dom::{MemoryDocument, MemoryElement};

    fn list(doc: &MemoryDocument, id: &str, items: &[&str]) -> Vec<MemoryElement> {
        let container = MemoryElement::new(id);
        doc.body().append(&container);
        items
            .iter()
            .map(|item_id| {
                let item = MemoryElement::new(item_id).with_class(LIST_ITEM_CLASS);
                container.append(&item);
                item
            })
            .collect()
    }

    fn selected(items: &[MemoryElement], class: &str) -> Vec<String> {
        items
            .iter()
            .filter(|item| item.has_class(class))
            .map(|item| item.id())
            .collect()
    }

    #[test]
    fn test_select_moves_selection() {
        let doc = MemoryDocument::new();
        let items = list(&doc, "articles", &["item-1", "item-2", "item-3"]);
        let selector = ListSelector::new(doc, MemorySink::new());

        selector.select("articles", "item-1");
        selector.select("articles", "item-2");

        assert_eq!(selected(&items, "selected"), vec!["item-2"]);
    }

    #[test]
    fn test_select_is_idempotent() {
        let doc = MemoryDocument::new();
        let items = list(&doc, "articles", &["item-1", "item-2"]);
        let selector = ListSelector::new(doc, MemorySink::new());

        selector.select("articles", "item-2");
        selector.select("articles", "item-2");

        assert_eq!(selected(&items, "selected"), vec!["item-2"]);
    }

    #[test]
    fn test_missing_item_clears_selection() {
        let doc = MemoryDocument::new();
        let items = list(&doc, "articles", &["item-1", "item-2"]);
        let selector = ListSelector::new(doc, MemorySink::new());

        selector.select("articles", "item-1");
        selector.select("articles", "item-9");

        assert!(selected(&items, "selected").is_empty());
    }

    #[test]
    fn test_missing_container_still_selects_item() {
        let doc = MemoryDocument::new();
        let items = list(&doc, "articles", &["item-1", "item-2"]);
        let selector = ListSelector::new(doc, MemorySink::new());

        selector.select("articles", "item-1");
        selector.select("nowhere", "item-2");

        assert_eq!(selected(&items, "selected"), vec!["item-1", "item-2"]);
    }

    #[test]
    fn test_custom_class_leaves_other_lists_alone() {
        let doc = MemoryDocument::new();
        let prompts = list(&doc, "prompts", &["prompt-1", "prompt-2"]);
        let titles = list(&doc, "titles", &["title-1"]);
        let selector = ListSelector::new(doc, MemorySink::new());

        selector.select_with_class("titles", "title-1", "active");
        selector.select_with_class("prompts", "prompt-2", "active");

        assert_eq!(selected(&prompts, "active"), vec!["prompt-2"]);
        assert_eq!(selected(&titles, "active"), vec!["title-1"]);
        assert!(selected(&prompts, "selected").is_empty());
    }

    #[test]
    fn test_rejected_class_is_reported() {
        let doc = MemoryDocument::new();
        let items = list(&doc, "articles", &["item-1", "item-2"]);
        let sink = MemorySink::new();
        let selector = ListSelector::new(doc, &sink);

        selector.select("articles", "item-1");
        selector.select_with_class("articles", "item-2", "");
        selector.select_with_class("articles", "item-2", "two words");

        assert_eq!(selected(&items, "selected"), vec!["item-1"]);
        let entries = sink.entries();
        // One report for the clearing pass and one for the item, per call.
        assert_eq!(entries.len(), 4);
        assert!(matches!(
            &entries[0],
            Diagnostic::ClassUpdateFailed { operation: "select", class, .. } if class.is_empty()
        ));
        assert!(entries[2].to_string().contains("'two words'"));
    }
}
