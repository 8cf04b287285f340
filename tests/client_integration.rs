//! End-to-end flows: call the API, then reflect the outcome in the page.

use apiwire::api::{ApiClient, Method, MockTransport, RequestOptions};
use apiwire::diagnostics::MemorySink;
use apiwire::dom::{Document, MemoryDocument, MemoryElement};
use apiwire::error::TransportError;
use apiwire::ui::{FeedbackRenderer, ListSelector};
use serde::Deserialize;
use serde_json::json;

#[derive(Debug, Deserialize, PartialEq)]
struct Prompt {
    id: u32,
    name: String,
}

fn page() -> MemoryDocument {
    let doc = MemoryDocument::new();
    doc.body().append(&MemoryElement::new("status"));

    let list = MemoryElement::new("prompt-list");
    for id in ["prompt-1", "prompt-2"] {
        list.append(&MemoryElement::new(id).with_class("list-item"));
    }
    doc.body().append(&list);
    doc
}

fn status_html(doc: &MemoryDocument) -> String {
    doc.element_by_id("status").unwrap().inner_html()
}

#[tokio::test]
async fn load_list_then_select() {
    let transport = MockTransport::new().respond(
        200,
        r#"{"success": true, "prompts": [{"id": 1, "name": "Intro"}, {"id": 2, "name": "Outro"}]}"#,
    );
    let client = ApiClient::new(&transport);
    let doc = page();
    let sink = MemorySink::new();
    let renderer = FeedbackRenderer::new(doc.clone(), &sink);

    renderer.show_loading("status", None);
    assert_eq!(status_html(&doc), r#"<div class="loading">加载中...</div>"#);

    let envelope = client.get("prompts").await.unwrap();
    let prompts: Vec<Prompt> = envelope.field("prompts").unwrap();
    renderer.show_success("status", &format!("{} prompts", prompts.len()));

    ListSelector::new(doc.clone(), &sink).select("prompt-list", "prompt-2");

    assert_eq!(prompts[1].name, "Outro");
    assert_eq!(status_html(&doc), r#"<div class="success">✅ 2 prompts</div>"#);
    assert!(doc.element_by_id("prompt-2").unwrap().has_class("selected"));
    assert!(!doc.element_by_id("prompt-1").unwrap().has_class("selected"));
    assert_eq!(transport.sent()[0].url, "/api/prompts");
    assert!(sink.entries().is_empty());
}

#[tokio::test]
async fn rejected_save_renders_escaped_error() {
    let transport = MockTransport::new().respond(
        400,
        r#"{"success": false, "error": "name must not contain <tags>"}"#,
    );
    let client = ApiClient::new(&transport);
    let doc = page();
    let renderer = FeedbackRenderer::new(doc.clone(), MemorySink::new());

    let options = RequestOptions::new()
        .method(Method::Post)
        .json(&json!({"name": "<b>x</b>"}))
        .unwrap();
    let err = client.call("/prompts", options).await.unwrap_err();
    renderer.show_api_error("status", &err);

    assert_eq!(err.status(), Some(400));
    assert_eq!(
        status_html(&doc),
        r#"<div class="error">❌ name must not contain &lt;tags&gt;</div>"#
    );
    assert_eq!(
        transport.sent()[0].body.as_deref(),
        Some(r#"{"name":"<b>x</b>"}"#)
    );
}

#[tokio::test]
async fn network_failure_then_retry_by_caller() {
    let transport = MockTransport::new()
        .fail(TransportError::new("Failed to fetch"))
        .respond(200, r#"{"success": true}"#);
    let client = ApiClient::new(&transport);
    let doc = page();
    let renderer = FeedbackRenderer::new(doc.clone(), MemorySink::new());

    let err = client.get("/api/health").await.unwrap_err();
    renderer.show_api_error("status", &err);
    assert_eq!(status_html(&doc), r#"<div class="error">❌ Failed to fetch</div>"#);

    client.get("/api/health").await.unwrap();
    assert_eq!(transport.sent().len(), 2);
}
