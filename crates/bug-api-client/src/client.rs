//! API client trait
//!
//! Defines the `ApiClient` trait that every transport implementation must
//! satisfy.

use crate::error::ApiError;
use crate::types::{ApiRequest, ApiResponse};
use async_trait::async_trait;

/// Bug-tracking API client
///
/// A single generic operation mirrors what the store needs from a transport:
/// send a method, a path relative to the configured base URL, and an
/// optional JSON body; get back the decoded body or an error carrying a
/// human-readable message.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` so one client can be shared by the
/// middleware across concurrent dispatches.
///
/// # Example
///
/// ```rust,ignore
/// use bug_api_client::{ApiClient, ApiRequest};
///
/// async fn count_bugs(client: &dyn ApiClient) -> Result<usize, ApiError> {
///     let response = client.request(ApiRequest::get("/bugs")).await?;
///     Ok(response.data.as_array().map(|a| a.len()).unwrap_or(0))
/// }
/// ```
#[async_trait]
pub trait ApiClient: Send + Sync {
    /// Perform a request against the API
    ///
    /// Non-success status codes are reported as [`ApiError::Status`].
    async fn request(&self, request: ApiRequest) -> Result<ApiResponse, ApiError>;
}
