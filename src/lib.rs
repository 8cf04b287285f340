//! Client-side helpers for pages backed by a JSON API.
//!
//! - [`api`] - uniform request wrapper: path normalization under `/api`,
//!   option merging, JSON bodies, envelope validation
//! - [`ui`] - error/success/loading blocks and list selection
//! - [`dom`] - the host document abstraction and HTML escaping
//! - [`diagnostics`] - where non-fatal problems are reported
//!
//! On `wasm32` the same helpers are exported to JavaScript.

pub mod api;
#[cfg(target_arch = "wasm32")]
pub mod bindings;
pub mod config;
pub mod diagnostics;
pub mod dom;
pub mod error;
pub mod ui;

pub use api::{ApiClient, FetchTransport, RequestBody, RequestOptions, ResponseEnvelope};
pub use config::{ClientConfig, Messages};
pub use error::ApiError;
pub use ui::{FeedbackRenderer, ListSelector};
