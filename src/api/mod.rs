//! Request client for the JSON API.
//!
//! Provides:
//! - [`ApiClient`] - normalized, validated calls under the API prefix
//! - [`RequestOptions`], [`RequestBody`], [`Method`] - per-call options
//! - [`JsRequestOptions`] - the same options as a JavaScript caller writes them
//! - [`ResponseEnvelope`] - the `{success, error, ...}` response object
//! - [`Transport`], [`FetchTransport`] - how requests reach the server

mod client;
mod envelope;
mod js_options;
mod request;
mod transport;

pub use client::ApiClient;
pub use envelope::{RawResponse, ResponseEnvelope};
pub use js_options::JsRequestOptions;
pub use request::{
    ApiRequest, Method, RequestBody, RequestOptions, default_headers, merge_headers,
    normalize_endpoint,
};
#[cfg(any(test, feature = "mock"))]
pub use transport::MockTransport;
pub use transport::{FetchTransport, Transport};
