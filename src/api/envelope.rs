//! Response envelope parsing and validation.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::config::Messages;
use crate::error::ApiError;

/// Raw HTTP response as seen by the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Whether the status is in the 2xx range.
    pub fn ok(&self) -> bool {
        (200..=299).contains(&self.status)
    }
}

/// A successful API response: `{"success": true, ...fields}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResponseEnvelope {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Every other top-level field of the response.
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl ResponseEnvelope {
    /// Raw access to an additional field.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// Decode one additional field into `T`.
    pub fn field<T: DeserializeOwned>(&self, name: &str) -> Result<T, ApiError> {
        let value = self.fields.get(name).cloned().unwrap_or(Value::Null);
        serde_json::from_value(value).map_err(|e| ApiError::Parse(e.to_string()))
    }

    /// Decode the whole set of additional fields into `T`.
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T, ApiError> {
        serde_json::from_value(Value::Object(self.fields.clone()))
            .map_err(|e| ApiError::Parse(e.to_string()))
    }

    /// Parse and validate a response.
    ///
    /// The body must be JSON. The call fails when the status is outside
    /// 2xx or `success` is falsy; the envelope's `error` string becomes the
    /// message, otherwise one embedding the status is synthesized.
    pub fn from_response(response: &RawResponse, messages: &Messages) -> Result<Self, ApiError> {
        let data: Value =
            serde_json::from_str(&response.body).map_err(|e| ApiError::Parse(e.to_string()))?;

        let success = data.get("success").is_some_and(is_truthy);
        if !response.ok() || !success {
            let message = data
                .get("error")
                .and_then(Value::as_str)
                .filter(|msg| !msg.is_empty())
                .map(str::to_string)
                .unwrap_or_else(|| messages.request_failed(response.status));

            return Err(ApiError::Protocol {
                status: response.status,
                message,
            });
        }

        // Only objects can carry a truthy `success`.
        let mut fields = match data {
            Value::Object(map) => map,
            _ => Map::new(),
        };
        fields.remove("success");
        let error = match fields.remove("error") {
            Some(Value::String(msg)) => Some(msg),
            Some(other) => {
                fields.insert("error".to_string(), other);
                None
            }
            None => None,
        };

        Ok(Self {
            success: true,
            error,
            fields,
        })
    }
}

/// JavaScript truthiness of a JSON value.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    fn parse(status: u16, body: &str) -> Result<ResponseEnvelope, ApiError> {
        ResponseEnvelope::from_response(&RawResponse::new(status, body), &Messages::zh_cn())
    }

    #[test]
    fn test_success_keeps_extra_fields() {
        let envelope = parse(200, r#"{"success": true, "count": 2, "items": [1, 2]}"#).unwrap();
        assert!(envelope.success);
        assert_eq!(envelope.error, None);
        assert_eq!(envelope.get("count"), Some(&Value::from(2)));
        assert_eq!(envelope.field::<Vec<u32>>("items").unwrap(), vec![1, 2]);
        assert!(envelope.get("success").is_none());
    }

    #[test]
    fn test_envelope_error_message_used_verbatim() {
        let err = parse(200, r#"{"success": false, "error": "bad input"}"#).unwrap_err();
        assert_eq!(err.to_string(), "bad input");
        assert_eq!(err.status(), Some(200));
    }

    #[test]
    fn test_missing_error_embeds_status() {
        let err = parse(500, r#"{"success": false}"#).unwrap_err();
        assert!(err.to_string().contains("500"));
    }

    #[test]
    fn test_http_error_with_success_true_still_fails() {
        let err = parse(404, r#"{"success": true}"#).unwrap_err();
        assert_eq!(err.status(), Some(404));
        assert_eq!(err.to_string(), "请求失败 (404)");
    }

    #[test]
    fn test_falsy_success_values() {
        for body in [
            r#"{}"#,
            r#"{"success": null}"#,
            r#"{"success": 0}"#,
            r#"{"success": ""}"#,
            r#"[1, 2]"#,
            r#""ok""#,
        ] {
            assert!(matches!(parse(200, body), Err(ApiError::Protocol { .. })), "{body}");
        }
        assert!(parse(200, r#"{"success": 1}"#).is_ok());
    }

    #[test]
    fn test_empty_error_string_synthesizes() {
        let err = parse(400, r#"{"success": false, "error": ""}"#).unwrap_err();
        assert_eq!(err.to_string(), "请求失败 (400)");
    }

    #[test]
    fn test_non_json_body_is_parse_error() {
        assert!(matches!(parse(502, "<html>Bad Gateway</html>"), Err(ApiError::Parse(_))));
    }

    #[test]
    fn test_decode_fields() {
        #[derive(Deserialize, Debug, PartialEq)]
        struct Article {
            id: u64,
            title: String,
        }

        let envelope = parse(200, r#"{"success": true, "id": 7, "title": "Rust"}"#).unwrap();
        assert_eq!(
            envelope.decode::<Article>().unwrap(),
            Article {
                id: 7,
                title: "Rust".to_string()
            }
        );
    }
}
