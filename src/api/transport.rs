//! Transports that carry an [`ApiRequest`] to the server.
//!
//! [`FetchTransport`] uses the browser Fetch API. With the `mock` feature,
//! [`MockTransport`] replays canned responses instead.

use serde::Serialize;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, RequestMode, Response};

use super::{ApiRequest, RawResponse};
use crate::error::TransportError;

/// Sends a prepared request and returns the status and body text.
///
/// Futures are not required to be `Send`; the browser runs everything on
/// one thread.
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn send(&self, request: &ApiRequest) -> Result<RawResponse, TransportError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    async fn send(&self, request: &ApiRequest) -> Result<RawResponse, TransportError> {
        (**self).send(request).await
    }
}

// =============================================================================
// Fetch API
// =============================================================================

/// Transport over `window.fetch`.
#[derive(Debug, Clone, Copy, Default)]
pub struct FetchTransport;

impl Transport for FetchTransport {
    async fn send(&self, request: &ApiRequest) -> Result<RawResponse, TransportError> {
        let window =
            web_sys::window().ok_or_else(|| TransportError::new("Browser window not available"))?;

        let opts = RequestInit::new();
        opts.set_mode(RequestMode::Cors);

        // Caller init fields first; method, headers and body are set after
        // so the prepared values take precedence.
        for (name, value) in &request.init {
            let value = value
                .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
                .map_err(|e| TransportError::new(e.to_string()))?;
            js_sys::Reflect::set(&opts, &JsValue::from_str(name), &value).map_err(js_error)?;
        }

        opts.set_method(request.method.as_str());

        let headers = Headers::new().map_err(js_error)?;
        for (name, value) in &request.headers {
            headers.set(name, value).map_err(js_error)?;
        }
        opts.set_headers(&headers);

        if let Some(body) = &request.body {
            opts.set_body(&JsValue::from_str(body));
        }

        let js_request = Request::new_with_str_and_init(&request.url, &opts).map_err(js_error)?;

        let response: Response = JsFuture::from(window.fetch_with_request(&js_request))
            .await
            .map_err(js_error)?
            .dyn_into()
            .map_err(|_| TransportError::new("Invalid response object"))?;

        let text = JsFuture::from(response.text().map_err(js_error)?)
            .await
            .map_err(js_error)?;

        Ok(RawResponse {
            status: response.status(),
            body: text.as_string().unwrap_or_default(),
        })
    }
}

/// Keep the message of a thrown JS value when it has one.
fn js_error(value: JsValue) -> TransportError {
    let message = match value.dyn_ref::<js_sys::Error>() {
        Some(err) => err.message().as_string(),
        None => value.as_string(),
    };

    match message {
        Some(message) if !message.is_empty() => TransportError::new(message),
        _ => TransportError::opaque(),
    }
}

// =============================================================================
// Mock
// =============================================================================

#[cfg(any(test, feature = "mock"))]
pub use mock::MockTransport;

#[cfg(any(test, feature = "mock"))]
mod mock {
    use std::cell::RefCell;
    use std::collections::VecDeque;

    use super::*;

    /// Replays queued responses in order and records what was sent.
    #[derive(Debug, Default)]
    pub struct MockTransport {
        responses: RefCell<VecDeque<Result<RawResponse, TransportError>>>,
        sent: RefCell<Vec<ApiRequest>>,
    }

    impl MockTransport {
        pub fn new() -> Self {
            Self::default()
        }

        /// Queue a response with the given status and body.
        pub fn respond(self, status: u16, body: impl Into<String>) -> Self {
            self.responses
                .borrow_mut()
                .push_back(Ok(RawResponse::new(status, body)));
            self
        }

        /// Queue a transport failure.
        pub fn fail(self, error: TransportError) -> Self {
            self.responses.borrow_mut().push_back(Err(error));
            self
        }

        /// Requests sent so far, oldest first.
        pub fn sent(&self) -> Vec<ApiRequest> {
            self.sent.borrow().clone()
        }
    }

    impl Transport for MockTransport {
        async fn send(&self, request: &ApiRequest) -> Result<RawResponse, TransportError> {
            self.sent.borrow_mut().push(request.clone());
            self.responses
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(|| Err(TransportError::new("no mock response queued")))
        }
    }
}
