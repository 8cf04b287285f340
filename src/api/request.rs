//! Request building: endpoint normalization, option merging, body encoding.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::config::{CONTENT_TYPE_HEADER, ClientConfig, JSON_CONTENT_TYPE};
use crate::error::ApiError;

/// HTTP method.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Method {
    #[default]
    Get,
    Post,
    Put,
    Patch,
    Delete,
    Other(String),
}

impl Method {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
            Self::Other(verb) => verb,
        }
    }
}

impl From<&str> for Method {
    fn from(verb: &str) -> Self {
        match verb.to_ascii_uppercase().as_str() {
            "GET" => Self::Get,
            "POST" => Self::Post,
            "PUT" => Self::Put,
            "PATCH" => Self::Patch,
            "DELETE" => Self::Delete,
            other => Self::Other(other.to_string()),
        }
    }
}

/// Request payload, with its encoding chosen by the caller.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    /// Sent verbatim.
    Text(String),
    /// Serialized to JSON text before sending.
    Json(Value),
}

impl RequestBody {
    /// Build a JSON body from any serializable value.
    pub fn json<T: Serialize + ?Sized>(value: &T) -> Result<Self, ApiError> {
        serde_json::to_value(value)
            .map(Self::Json)
            .map_err(|e| ApiError::Parse(e.to_string()))
    }

    /// The text that goes on the wire.
    pub fn encode(self) -> Result<String, ApiError> {
        match self {
            Self::Text(text) => Ok(text),
            Self::Json(value) => {
                serde_json::to_string(&value).map_err(|e| ApiError::Parse(e.to_string()))
            }
        }
    }
}

/// Caller-supplied options for one call. Unset fields fall back to defaults.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestOptions {
    pub method: Option<Method>,
    /// Merged on top of the default headers; insertion order is kept.
    pub headers: Vec<(String, String)>,
    pub body: Option<RequestBody>,
    /// Other fetch init fields (`credentials`, `cache`, `redirect`, ...),
    /// passed to the transport as given.
    pub init: Map<String, Value>,
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn method(mut self, method: Method) -> Self {
        self.method = Some(method);
        self
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn body(mut self, body: RequestBody) -> Self {
        self.body = Some(body);
        self
    }

    /// Set a fetch init field such as `credentials` or `cache`.
    pub fn option(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.init.insert(name.into(), value.into());
        self
    }

    pub fn text(self, text: impl Into<String>) -> Self {
        self.body(RequestBody::Text(text.into()))
    }

    pub fn json<T: Serialize + ?Sized>(self, value: &T) -> Result<Self, ApiError> {
        Ok(self.body(RequestBody::json(value)?))
    }
}

/// A fully prepared request, ready for a [`Transport`](super::Transport).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
    /// See [`RequestOptions::init`].
    pub init: Map<String, Value>,
}

impl ApiRequest {
    /// Build the request for `endpoint` with `options` merged over defaults.
    pub fn prepare(
        config: &ClientConfig,
        endpoint: &str,
        options: RequestOptions,
    ) -> Result<Self, ApiError> {
        let path = normalize_endpoint(endpoint, &config.api_prefix);
        let body = options.body.map(RequestBody::encode).transpose()?;

        Ok(Self {
            method: options.method.unwrap_or_default(),
            url: format!("{}{}", config.base_url, path),
            headers: merge_headers(&default_headers(), &options.headers),
            body,
            init: options.init,
        })
    }

    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Headers sent when the caller overrides nothing.
pub fn default_headers() -> Vec<(String, String)> {
    vec![(CONTENT_TYPE_HEADER.to_string(), JSON_CONTENT_TYPE.to_string())]
}

/// Route `endpoint` under `prefix`.
///
/// A leading `/` is added when missing, then `prefix` unless the path
/// already starts with it. The check is textual: `/apiary` is left alone.
pub fn normalize_endpoint(endpoint: &str, prefix: &str) -> String {
    let prefix = prefix.trim_end_matches('/');
    let path = if endpoint.starts_with('/') {
        endpoint.to_string()
    } else {
        format!("/{}", endpoint)
    };

    if path.starts_with(prefix) {
        path
    } else {
        format!("{}{}", prefix, path)
    }
}

/// Merge `overrides` on top of `defaults`.
///
/// Names match case-insensitively. An override replaces the default in
/// place, taking the caller's spelling; new names are appended in order.
pub fn merge_headers(
    defaults: &[(String, String)],
    overrides: &[(String, String)],
) -> Vec<(String, String)> {
    let mut merged = defaults.to_vec();

    for (name, value) in overrides {
        match merged
            .iter_mut()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
        {
            Some(slot) => *slot = (name.clone(), value.clone()),
            None => merged.push((name.clone(), value.clone())),
        }
    }

    merged
}
