//! HTTP client trait abstraction.
//!
//! The API clients talk to the Hearting backend through this trait so that
//! production code runs on reqwest while tests run against a deterministic
//! mock.

use async_trait::async_trait;
use bytes::Bytes;
use std::collections::HashMap;
use thiserror::Error;

/// HTTP headers represented as a key-value map.
pub type Headers = HashMap<String, String>;

/// A fully buffered HTTP response.
///
/// The Hearting API returns small JSON envelopes, so bodies are collected
/// into memory before parsing.
#[derive(Debug, Clone)]
pub struct Response {
    /// Status code as returned by the server.
    pub status: u16,
    /// Response headers, lower-cased by the reqwest adapter.
    pub headers: Headers,
    /// Raw body bytes.
    pub body: Bytes,
}

impl Response {
    /// Response with a body and no headers.
    pub fn new(status: u16, body: Bytes) -> Self {
        Self {
            status,
            headers: HashMap::new(),
            body,
        }
    }

    /// Response carrying headers from the transport.
    pub fn with_headers(status: u16, headers: Headers, body: Bytes) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    /// True for 2xx status codes.
    pub fn is_success(&self) -> bool {
        self.status / 100 == 2
    }

    /// Decode the body as UTF-8.
    pub fn text(&self) -> Result<String, std::string::FromUtf8Error> {
        String::from_utf8(self.body.to_vec())
    }

    /// Deserialize the body as JSON.
    pub fn json<T: serde::de::DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_slice(&self.body)
    }
}

/// Transport-level errors.
#[derive(Debug, Clone, Error)]
pub enum HttpError {
    /// Connection failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request timeout
    #[error("Request timeout: {0}")]
    Timeout(String),

    /// Server returned an error status
    #[error("Server error ({status}): {message}")]
    ServerError { status: u16, message: String },

    /// Invalid URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Other error
    #[error("HTTP error: {0}")]
    Other(String),
}

/// Trait for HTTP client operations.
///
/// Covers the three verbs the Hearting API uses. Implementations are the
/// production reqwest-based client and a mock client for tests.
///
/// # Example
///
/// ```ignore
/// use hearting::traits::{Headers, HttpClient, HttpError};
///
/// async fn fetch_board<C: HttpClient>(client: &C) -> Result<String, HttpError> {
///     let response = client.get("https://api.example.com/board", &Headers::new()).await?;
///     response.text().map_err(|e| HttpError::Other(e.to_string()))
/// }
/// ```
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// Perform a GET request.
    async fn get(&self, url: &str, headers: &Headers) -> Result<Response, HttpError>;

    /// Perform a POST request with a JSON string body.
    async fn post(&self, url: &str, body: &str, headers: &Headers) -> Result<Response, HttpError>;

    /// Perform a PATCH request with a JSON string body.
    ///
    /// The profile endpoints (nickname, status message, logout) are all
    /// PATCH on the Hearting backend.
    async fn patch(&self, url: &str, body: &str, headers: &Headers)
        -> Result<Response, HttpError>;
}
