//! The API client.

use serde::Serialize;

use super::{ApiRequest, Method, RequestOptions, ResponseEnvelope, Transport};
use crate::config::ClientConfig;
use crate::error::ApiError;

/// Uniform wrapper over calls to the JSON API.
///
/// Each call is independent. Overlapping calls may resolve in any order;
/// discarding stale results is up to the caller.
#[derive(Debug, Clone, Default)]
pub struct ApiClient<T> {
    transport: T,
    config: ClientConfig,
}

impl<T: Transport> ApiClient<T> {
    pub fn new(transport: T) -> Self {
        Self::with_config(transport, ClientConfig::default())
    }

    pub fn with_config(transport: T, config: ClientConfig) -> Self {
        Self { transport, config }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Build the request `call` would send, without sending it.
    pub fn prepare(&self, endpoint: &str, options: RequestOptions) -> Result<ApiRequest, ApiError> {
        ApiRequest::prepare(&self.config, endpoint, options)
    }

    /// Call `endpoint` and return the validated envelope.
    pub async fn call(
        &self,
        endpoint: &str,
        options: RequestOptions,
    ) -> Result<ResponseEnvelope, ApiError> {
        let request = self.prepare(endpoint, options)?;
        let messages = &self.config.messages;

        let response = self.transport.send(&request).await.map_err(|e| {
            ApiError::Network(e.message.unwrap_or_else(|| messages.network_error.clone()))
        })?;

        ResponseEnvelope::from_response(&response, messages)
    }

    /// `GET endpoint`.
    pub async fn get(&self, endpoint: &str) -> Result<ResponseEnvelope, ApiError> {
        self.call(endpoint, RequestOptions::new()).await
    }

    /// `POST endpoint` with a JSON body.
    pub async fn post_json<B: Serialize + ?Sized>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<ResponseEnvelope, ApiError> {
        let options = RequestOptions::new().method(Method::Post).json(body)?;
        self.call(endpoint, options).await
    }
}
