//! Error, success and loading messages rendered into a target element.

use crate::config::{Messages, feedback};
use crate::diagnostics::{Diagnostic, DiagnosticSink};
use crate::dom::{Document, Element, Target, escape_html};
use crate::error::ApiError;

/// Visual state of a feedback block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackKind {
    Error,
    Success,
    Loading,
}

impl FeedbackKind {
    pub fn class(self) -> &'static str {
        match self {
            Self::Error => feedback::ERROR_CLASS,
            Self::Success => feedback::SUCCESS_CLASS,
            Self::Loading => feedback::LOADING_CLASS,
        }
    }

    pub fn glyph(self) -> Option<&'static str> {
        match self {
            Self::Error => Some(feedback::ERROR_GLYPH),
            Self::Success => Some(feedback::SUCCESS_GLYPH),
            Self::Loading => None,
        }
    }

    fn operation(self) -> &'static str {
        match self {
            Self::Error => "show_error",
            Self::Success => "show_success",
            Self::Loading => "show_loading",
        }
    }

    /// Markup for a block showing `escaped`, which must already be escaped.
    pub fn markup(self, escaped: &str) -> String {
        match self.glyph() {
            Some(glyph) => format!(r#"<div class="{}">{} {}</div>"#, self.class(), glyph, escaped),
            None => format!(r#"<div class="{}">{}</div>"#, self.class(), escaped),
        }
    }
}

/// Renders feedback blocks, replacing the target's whole content.
///
/// Missing targets are reported to the sink and otherwise ignored.
#[derive(Debug, Clone)]
pub struct FeedbackRenderer<D, S> {
    document: D,
    sink: S,
    messages: Messages,
}

impl<D: Document, S: DiagnosticSink> FeedbackRenderer<D, S> {
    pub fn new(document: D, sink: S) -> Self {
        Self {
            document,
            sink,
            messages: Messages::default(),
        }
    }

    pub fn with_messages(mut self, messages: Messages) -> Self {
        self.messages = messages;
        self
    }

    pub fn show_error(&self, target: impl Into<Target<D::Element>>, message: &str) {
        self.render(FeedbackKind::Error, &target.into(), message);
    }

    pub fn show_success(&self, target: impl Into<Target<D::Element>>, message: &str) {
        self.render(FeedbackKind::Success, &target.into(), message);
    }

    /// Show a loading block; `None` uses the configured default text.
    pub fn show_loading(&self, target: impl Into<Target<D::Element>>, message: Option<&str>) {
        let message = message.unwrap_or(self.messages.loading.as_str());
        self.render(FeedbackKind::Loading, &target.into(), message);
    }

    /// Show a failed API call as an error block.
    pub fn show_api_error(&self, target: impl Into<Target<D::Element>>, error: &ApiError) {
        self.show_error(target, error.message());
    }

    pub fn render(&self, kind: FeedbackKind, target: &Target<D::Element>, message: &str) {
        let Some(element) = target.resolve(&self.document) else {
            self.sink.report(Diagnostic::ElementMissing {
                operation: kind.operation(),
                target: target.describe(),
            });
            return;
        };

        let escaped = escape_html(&self.document, Some(message));
        element.set_inner_html(&kind.markup(&escaped));
    }
}
