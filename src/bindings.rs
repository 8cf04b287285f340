//! JavaScript exports.
//!
//! Mirrors the helper functions pages call directly: `apiCall`, `showError`,
//! `showSuccess`, `showLoading`, `escapeHtml` and `selectListItem`. Targets
//! are told apart here (id string or element); request options go through
//! [`JsRequestOptions`].

use serde::Serialize;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use crate::api::{ApiClient, FetchTransport, JsRequestOptions};
use crate::config::DEFAULT_SELECTED_CLASS;
use crate::diagnostics::{ConsoleSink, Diagnostic, DiagnosticSink};
use crate::dom::{BrowserDocument, Target, escape_html, escape_text};
use crate::error::ApiError;
use crate::ui::{FeedbackKind, FeedbackRenderer, ListSelector};

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
}

fn js_error(error: ApiError) -> JsValue {
    js_sys::Error::new(error.message()).into()
}

/// Call an API endpoint. Resolves to the response envelope as a plain object.
#[wasm_bindgen(js_name = apiCall)]
pub async fn api_call(endpoint: String, options: JsValue) -> Result<JsValue, JsValue> {
    let options: JsRequestOptions = if options.is_undefined() || options.is_null() {
        JsRequestOptions::default()
    } else {
        serde_wasm_bindgen::from_value(options)
            .map_err(|e| js_error(ApiError::Parse(e.to_string())))?
    };

    let envelope = ApiClient::new(FetchTransport)
        .call(&endpoint, options.into())
        .await
        .map_err(js_error)?;

    envelope
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| js_error(ApiError::Parse(e.to_string())))
}

/// An element handle or an id string.
fn target(value: &JsValue) -> Option<Target<web_sys::Element>> {
    if let Some(id) = value.as_string() {
        return Some(Target::Id(id));
    }
    value
        .dyn_ref::<web_sys::Element>()
        .map(|element| Target::Element(element.clone()))
}

fn render(kind: FeedbackKind, operation: &'static str, element: JsValue, message: &str) {
    let (Some(document), Some(target)) = (BrowserDocument::global(), target(&element)) else {
        ConsoleSink.report(Diagnostic::ElementMissing {
            operation,
            target: format!("{:?}", element),
        });
        return;
    };

    FeedbackRenderer::new(document, ConsoleSink).render(kind, &target, message);
}

#[wasm_bindgen(js_name = showError)]
pub fn show_error(element: JsValue, message: Option<String>) {
    render(
        FeedbackKind::Error,
        "show_error",
        element,
        message.as_deref().unwrap_or_default(),
    );
}

#[wasm_bindgen(js_name = showSuccess)]
pub fn show_success(element: JsValue, message: Option<String>) {
    render(
        FeedbackKind::Success,
        "show_success",
        element,
        message.as_deref().unwrap_or_default(),
    );
}

#[wasm_bindgen(js_name = showLoading)]
pub fn show_loading(element: JsValue, message: Option<String>) {
    let (Some(document), Some(target)) = (BrowserDocument::global(), target(&element)) else {
        ConsoleSink.report(Diagnostic::ElementMissing {
            operation: "show_loading",
            target: format!("{:?}", element),
        });
        return;
    };

    FeedbackRenderer::new(document, ConsoleSink).show_loading(target, message.as_deref());
}

#[wasm_bindgen(js_name = escapeHtml)]
pub fn escape_html_js(text: Option<String>) -> String {
    match BrowserDocument::global() {
        Some(document) => escape_html(&document, text.as_deref()),
        None => text.as_deref().map(escape_text).unwrap_or_default(),
    }
}

#[wasm_bindgen(js_name = selectListItem)]
pub fn select_list_item(container_id: &str, item_id: &str, selected_class: Option<String>) {
    if let Some(document) = BrowserDocument::global() {
        ListSelector::new(document, ConsoleSink).select_with_class(
            container_id,
            item_id,
            selected_class.as_deref().unwrap_or(DEFAULT_SELECTED_CLASS),
        );
    }
}
