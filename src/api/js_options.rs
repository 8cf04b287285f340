//! Request options in the shape JavaScript callers pass them.

use std::collections::BTreeMap;

use serde::Deserialize;
use serde::de::IgnoredAny;
use serde_json::{Map, Value};

use super::{Method, RequestBody, RequestOptions};

/// A fetch-style options object: `{method, headers, body, ...init}`.
///
/// A string `body` is sent as text, any other value as JSON. Every other
/// field is kept as a fetch init field, except `signal`, since calls are
/// not cancellable.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct JsRequestOptions {
    method: Option<String>,
    headers: BTreeMap<String, String>,
    body: Option<Value>,
    #[serde(rename = "signal")]
    _signal: IgnoredAny,
    #[serde(flatten)]
    init: Map<String, Value>,
}

impl From<JsRequestOptions> for RequestOptions {
    fn from(js: JsRequestOptions) -> Self {
        Self {
            method: js.method.as_deref().map(Method::from),
            headers: js.headers.into_iter().collect(),
            body: js.body.map(|body| match body {
                Value::String(text) => RequestBody::Text(text),
                other => RequestBody::Json(other),
            }),
            init: js.init,
        }
    }
}
