//! Request and response types exchanged with the API
//!
//! These are transport-level types. Domain records (bugs) are decoded from
//! `ApiResponse::data` by the store, keeping this crate free of domain
//! knowledge.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use strum::{AsRefStr, Display};

/// HTTP method of an API request
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, AsRefStr,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum HttpMethod {
    #[default]
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Put => reqwest::Method::PUT,
            HttpMethod::Patch => reqwest::Method::PATCH,
            HttpMethod::Delete => reqwest::Method::DELETE,
        }
    }
}

/// A request relative to the client's base URL
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiRequest {
    pub method: HttpMethod,
    /// Path below the base URL, e.g. `/bugs/1`
    pub url: String,
    /// JSON body, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl ApiRequest {
    pub fn new(method: HttpMethod, url: impl Into<String>, data: Option<Value>) -> Self {
        Self {
            method,
            url: url.into(),
            data,
        }
    }

    pub fn get(url: impl Into<String>) -> Self {
        Self::new(HttpMethod::Get, url, None)
    }

    pub fn post(url: impl Into<String>, data: Value) -> Self {
        Self::new(HttpMethod::Post, url, Some(data))
    }

    pub fn patch(url: impl Into<String>, data: Value) -> Self {
        Self::new(HttpMethod::Patch, url, Some(data))
    }
}

/// A successful response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse {
    pub status: u16,
    /// Decoded JSON body (`Null` when the body was empty)
    pub data: Value,
}

impl ApiResponse {
    pub fn ok(data: Value) -> Self {
        Self { status: 200, data }
    }
}
