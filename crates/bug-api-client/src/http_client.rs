//! reqwest-based API client
//!
//! Direct implementation of the `ApiClient` trait. Every call goes to the
//! network; deduplication is the store's concern.

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::types::{ApiRequest, ApiResponse};
use async_trait::async_trait;
use log::{debug, warn};
use serde_json::Value;
use std::time::Duration;

/// Default per-request timeout
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// API client talking JSON over HTTP
#[derive(Debug, Clone)]
pub struct HttpClient {
    base_url: String,
    client: reqwest::Client,
}

impl HttpClient {
    /// Create a client for the given API root, e.g. `http://localhost:9001/api`
    pub fn new(base_url: impl Into<String>) -> Result<Self, ApiError> {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    /// Create a client with an explicit per-request timeout
    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ApiError> {
        let base_url = base_url.into();
        reqwest::Url::parse(&base_url)
            .map_err(|e| ApiError::Config(format!("invalid base URL {base_url:?}: {e}")))?;

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ApiError::Config(e.to_string()))?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Resolve a request path against the base URL
    fn endpoint(&self, url: &str) -> String {
        format!("{}/{}", self.base_url, url.trim_start_matches('/'))
    }
}

#[async_trait]
impl ApiClient for HttpClient {
    async fn request(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        let endpoint = self.endpoint(&request.url);
        debug!("{} {}", request.method, endpoint);

        let mut builder = self.client.request(request.method.into(), &endpoint);
        if let Some(data) = &request.data {
            builder = builder.json(data);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !(200..300).contains(&status) {
            warn!("{} {} failed with status {}", request.method, endpoint, status);
            return Err(ApiError::Status { status, body });
        }

        debug!("{} {} -> {} ({} bytes)", request.method, endpoint, status, body.len());

        let data = if body.trim().is_empty() {
            Value::Null
        } else {
            serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))?
        };

        Ok(ApiResponse { status, data })
    }
}
