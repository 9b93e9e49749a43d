//! Reqwest-based HTTP client adapter.
//!
//! The production transport behind the [`HttpClient`] trait. API clients
//! never touch reqwest directly; they go through this adapter so tests can
//! substitute the mock.

use async_trait::async_trait;
use std::time::Duration;

use crate::traits::{Headers, HttpClient, HttpError, Response};

/// Seconds before an in-flight request is abandoned.
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// [`HttpClient`] backed by a `reqwest::Client`.
///
/// # Example
///
/// ```ignore
/// use hearting::adapters::ReqwestHttpClient;
/// use hearting::traits::{Headers, HttpClient};
///
/// let client = ReqwestHttpClient::new();
/// let response = client.get("https://api.hearting.site/api/v1/messages/received/u1", &Headers::new()).await?;
/// println!("Status: {}", response.status);
/// ```
#[derive(Debug, Clone)]
pub struct ReqwestHttpClient {
    client: reqwest::Client,
}

impl ReqwestHttpClient {
    /// Client with the default request timeout applied.
    pub fn new() -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .unwrap_or_default();

        Self { client }
    }

    /// Wrap an already configured `reqwest::Client`.
    ///
    /// For callers that need their own timeouts, proxies or TLS setup.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// The underlying `reqwest::Client`.
    pub fn inner(&self) -> &reqwest::Client {
        &self.client
    }

    /// Classify a reqwest error into the transport error type.
    fn convert_error(err: reqwest::Error) -> HttpError {
        if err.is_timeout() {
            return HttpError::Timeout(err.to_string());
        }
        if err.is_connect() {
            return HttpError::ConnectionFailed(err.to_string());
        }
        if err.is_builder() {
            return HttpError::InvalidUrl(err.to_string());
        }
        HttpError::Other(err.to_string())
    }

    /// Copy response headers into the plain map the trait exposes.
    ///
    /// Values that are not valid UTF-8 are skipped.
    fn convert_headers(map: &reqwest::header::HeaderMap) -> Headers {
        map.iter()
            .filter_map(|(name, value)| {
                let value = value.to_str().ok()?;
                Some((name.to_string(), value.to_string()))
            })
            .collect()
    }

    /// Attach caller headers to an outgoing request.
    fn apply_headers(
        builder: reqwest::RequestBuilder,
        headers: &Headers,
    ) -> reqwest::RequestBuilder {
        headers
            .iter()
            .fold(builder, |builder, (key, value)| builder.header(key, value))
    }

    /// Send a prepared request and collect the full response body.
    async fn dispatch(
        builder: reqwest::RequestBuilder,
        headers: &Headers,
    ) -> Result<Response, HttpError> {
        let builder = Self::apply_headers(builder, headers);

        let response = builder.send().await.map_err(Self::convert_error)?;

        let status = response.status().as_u16();
        let response_headers = Self::convert_headers(response.headers());
        let body = response.bytes().await.map_err(Self::convert_error)?;

        Ok(Response::with_headers(status, response_headers, body))
    }
}

impl Default for ReqwestHttpClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpClient for ReqwestHttpClient {
    async fn get(&self, url: &str, headers: &Headers) -> Result<Response, HttpError> {
        Self::dispatch(self.client.get(url), headers).await
    }

    async fn post(&self, url: &str, body: &str, headers: &Headers) -> Result<Response, HttpError> {
        Self::dispatch(self.client.post(url).body(body.to_string()), headers).await
    }

    async fn patch(
        &self,
        url: &str,
        body: &str,
        headers: &Headers,
    ) -> Result<Response, HttpError> {
        Self::dispatch(self.client.patch(url).body(body.to_string()), headers).await
    }
}
