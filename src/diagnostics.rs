//! Diagnostic reporting for conditions that are logged, not raised.
//!
//! The UI helpers take a [`DiagnosticSink`] so the page can route reports to
//! the console ([`ConsoleSink`]) and tests can capture them ([`MemorySink`]).

use std::cell::RefCell;
use std::fmt;

/// Something worth telling a developer about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// A UI helper was pointed at an element that does not exist.
    ElementMissing {
        /// The helper, e.g. `show_error`.
        operation: &'static str,
        /// Description of the target, e.g. `#status`.
        target: String,
    },
    /// The host refused to add or remove a class.
    ClassUpdateFailed {
        operation: &'static str,
        class: String,
        message: String,
    },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ElementMissing { operation, target } => {
                write!(f, "{}: element not found: {}", operation, target)
            }
            Self::ClassUpdateFailed {
                operation,
                class,
                message,
            } => write!(f, "{}: cannot update class '{}': {}", operation, class, message),
        }
    }
}

/// Receives diagnostics.
pub trait DiagnosticSink {
    fn report(&self, diagnostic: Diagnostic);
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for &S {
    fn report(&self, diagnostic: Diagnostic) {
        (**self).report(diagnostic);
    }
}

/// Writes to the browser console as errors. Silent outside wasm.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleSink;

impl DiagnosticSink for ConsoleSink {
    #[allow(unused_variables)]
    fn report(&self, diagnostic: Diagnostic) {
        #[cfg(target_arch = "wasm32")]
        web_sys::console::error_1(&diagnostic.to_string().into());
    }
}

/// Keeps every diagnostic in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    entries: RefCell<Vec<Diagnostic>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<Diagnostic> {
        self.entries.borrow().clone()
    }
}

impl DiagnosticSink for MemorySink {
    fn report(&self, diagnostic: Diagnostic) {
        self.entries.borrow_mut().push(diagnostic);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_sink_records() {
        let sink = MemorySink::new();
        (&sink).report(Diagnostic::ElementMissing {
            operation: "show_error",
            target: "#status".to_string(),
        });

        let entries = sink.entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].to_string(), "show_error: element not found: #status");
    }
}
