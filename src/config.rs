//! Library configuration.
//!
//! Centralizes the fixed literals of the API and DOM contracts, plus the
//! runtime-adjustable [`ClientConfig`] and user-facing [`Messages`].

// =============================================================================
// API Contract
// =============================================================================

/// Path prefix every request is routed under.
pub const API_PREFIX: &str = "/api";

/// Default `Content-Type` sent with every request.
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Header name for [`JSON_CONTENT_TYPE`].
pub const CONTENT_TYPE_HEADER: &str = "Content-Type";

// =============================================================================
// DOM Contract
// =============================================================================

/// Marker class carried by every item taking part in single selection.
pub const LIST_ITEM_CLASS: &str = "list-item";

/// Class applied to the selected list item unless the caller picks another.
pub const DEFAULT_SELECTED_CLASS: &str = "selected";

/// Feedback block classes and glyphs.
pub mod feedback {
    pub const ERROR_CLASS: &str = "error";
    pub const SUCCESS_CLASS: &str = "success";
    pub const LOADING_CLASS: &str = "loading";

    pub const ERROR_GLYPH: &str = "❌";
    pub const SUCCESS_GLYPH: &str = "✅";
}

// =============================================================================
// Messages
// =============================================================================

/// User-facing texts synthesized by the library.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Messages {
    /// Default text for loading blocks.
    pub loading: String,
    /// Prefix of the synthesized message for failed requests; the status
    /// code is appended in parentheses.
    pub request_failed: String,
    /// Message used when a transport failure carries no message of its own.
    pub network_error: String,
}

impl Messages {
    /// Simplified Chinese texts (the default).
    pub fn zh_cn() -> Self {
        Self {
            loading: "加载中...".to_string(),
            request_failed: "请求失败".to_string(),
            network_error: "网络错误: 未知错误".to_string(),
        }
    }

    /// English texts.
    pub fn en() -> Self {
        Self {
            loading: "Loading...".to_string(),
            request_failed: "Request failed".to_string(),
            network_error: "Network error: unknown error".to_string(),
        }
    }

    /// Message for a failed request that did not explain itself.
    pub fn request_failed(&self, status: u16) -> String {
        format!("{} ({})", self.request_failed, status)
    }
}

impl Default for Messages {
    fn default() -> Self {
        Self::zh_cn()
    }
}

// =============================================================================
// Client Configuration
// =============================================================================

/// Settings for [`ApiClient`](crate::api::ApiClient).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Origin prepended to every normalized path. Empty means same-origin.
    pub base_url: String,
    /// Namespace prefix, see [`API_PREFIX`].
    pub api_prefix: String,
    pub messages: Messages,
}

impl ClientConfig {
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Trailing `/` is dropped so `"/api/"` and `"/api"` behave the same.
    pub fn with_api_prefix(mut self, api_prefix: impl Into<String>) -> Self {
        self.api_prefix = api_prefix.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_messages(mut self, messages: Messages) -> Self {
        self.messages = messages;
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            api_prefix: API_PREFIX.to_string(),
            messages: Messages::default(),
        }
    }
}
