use thiserror::Error;

/// Errors returned by an [`ApiClient`](crate::ApiClient)
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    /// The client could not be built (bad base URL, TLS setup, ...)
    #[error("Invalid client configuration: {0}")]
    Config(String),

    /// Connection-level failure (DNS, refused, timeout)
    #[error("Network Error: {0}")]
    Network(String),

    /// The server answered with a non-success status code
    #[error("Request failed with status code {status}")]
    Status { status: u16, body: String },

    /// The response body was not valid JSON
    #[error("Failed to decode response body: {0}")]
    Decode(String),
}

impl ApiError {
    /// Human-readable message, as carried by error follow-up actions
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// HTTP status code, if the server responded at all
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
