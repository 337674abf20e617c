//! HTTP transport for the bug-tracking REST API
//!
//! This crate provides a trait-based API client so the store's middleware
//! never talks to an HTTP library directly. Tests substitute their own
//! implementation of the trait.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │               ApiClient trait                    │
//! │  - request(method, url, data)                    │
//! └─────────────────────────────────────────────────┘
//!                        │
//!        ┌───────────────┴───────────────┐
//!        ▼                               ▼
//! ┌─────────────────┐         ┌─────────────────────┐
//! │ HttpClient      │         │ test doubles        │
//! │ (reqwest)       │         │ (scripted replies)  │
//! └─────────────────┘         └─────────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use bug_api_client::{ApiClient, ApiRequest, HttpClient};
//!
//! # async fn example() -> Result<(), bug_api_client::ApiError> {
//! let client = HttpClient::new("http://localhost:9001/api")?;
//! let response = client.request(ApiRequest::get("/bugs")).await?;
//! println!("{}", response.data);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod http_client;
pub mod types;

pub use client::ApiClient;
pub use error::ApiError;
pub use http_client::HttpClient;
pub use types::{ApiRequest, ApiResponse, HttpMethod};
