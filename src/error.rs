//! Error types for API calls.
//!
//! - [`ApiError`] - what a failed [`ApiClient::call`](crate::api::ApiClient::call) returns
//! - [`TransportError`] - what a [`Transport`](crate::api::Transport) reports

use thiserror::Error;

/// A failed API call.
///
/// Every variant displays exactly its message, so it can be shown to the
/// user as-is (see [`FeedbackRenderer::show_api_error`](crate::ui::FeedbackRenderer::show_api_error)).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced a response (offline, CORS, DNS, ...).
    #[error("{0}")]
    Network(String),
    /// Non-2xx status, or an envelope whose `success` flag is falsy.
    #[error("{message}")]
    Protocol { status: u16, message: String },
    /// The response body was not valid JSON, or a request body could not
    /// be serialized.
    #[error("{0}")]
    Parse(String),
}

impl ApiError {
    /// HTTP status of the response, when one was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Protocol { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// The human-readable message.
    pub fn message(&self) -> &str {
        match self {
            Self::Network(message) | Self::Parse(message) => message,
            Self::Protocol { message, .. } => message,
        }
    }
}

/// Failure below the HTTP layer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
#[error("{}", .message.as_deref().unwrap_or("transport failure"))]
pub struct TransportError {
    /// Message of the underlying failure, if it carried one.
    pub message: Option<String>,
}

impl TransportError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
        }
    }

    /// A failure that carried no message.
    pub fn opaque() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_bare_message() {
        let err = ApiError::Protocol {
            status: 400,
            message: "bad input".to_string(),
        };
        assert_eq!(err.to_string(), "bad input");
        assert_eq!(err.status(), Some(400));
        assert_eq!(ApiError::Network("offline".into()).to_string(), "offline");
        assert_eq!(ApiError::Parse("eof".into()).status(), None);
    }

    #[test]
    fn test_transport_error_message() {
        assert_eq!(TransportError::new("Failed to fetch").to_string(), "Failed to fetch");
        assert_eq!(TransportError::opaque().message, None);
    }
}
