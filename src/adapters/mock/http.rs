//! Mock HTTP client for testing.
//!
//! A configurable mock transport that returns predefined responses or
//! errors and records every request for verification.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::traits::{Headers, HttpClient, HttpError, Response};

/// A recorded HTTP request for verification in tests.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    /// HTTP method (GET, POST or PATCH)
    pub method: String,
    /// Request URL
    pub url: String,
    /// Request headers
    pub headers: Headers,
    /// Request body (for POST/PATCH requests)
    pub body: Option<String>,
}

/// Configuration for a mock response.
#[derive(Debug, Clone)]
pub enum MockResponse {
    /// Return a successful response
    Success(Response),
    /// Return an error
    Error(HttpError),
}

#[derive(Debug, Default)]
struct MockState {
    /// Configured responses keyed by URL pattern
    routes: HashMap<String, MockResponse>,
    /// Fallback when no pattern matches
    fallback: Option<MockResponse>,
    /// Every request made through the client
    log: Vec<RecordedRequest>,
}

/// Mock HTTP client for testing.
///
/// Configure responses per URL and make requests through the [`HttpClient`]
/// trait; every request is recorded so tests can assert on method, URL,
/// headers and body without network access.
///
/// # Example
///
/// ```ignore
/// use hearting::adapters::mock::{MockHttpClient, MockResponse};
/// use hearting::traits::{Headers, HttpClient, Response};
/// use bytes::Bytes;
///
/// let client = MockHttpClient::new();
///
/// client.set_response(
///     "https://api.example.com/api/v1/messages",
///     MockResponse::Success(Response::new(200, Bytes::from("{}"))),
/// );
///
/// let response = client.get("https://api.example.com/api/v1/messages", &Headers::new()).await?;
/// assert_eq!(response.status, 200);
///
/// let requests = client.get_requests();
/// assert_eq!(requests.len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockHttpClient {
    state: Arc<Mutex<MockState>>,
}

impl MockHttpClient {
    /// Create a mock client with no routes configured.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a response for a URL pattern.
    ///
    /// Exact matches win; otherwise the request URL is matched by prefix,
    /// which lets one route cover a path with varying identifiers.
    pub fn set_response(&self, url: &str, response: MockResponse) {
        let mut state = self.state.lock().unwrap();
        state.routes.insert(url.to_string(), response);
    }

    /// Set a fallback response for URLs no pattern matches.
    pub fn set_default_response(&self, response: MockResponse) {
        let mut state = self.state.lock().unwrap();
        state.fallback = Some(response);
    }

    /// Snapshot of every request made so far.
    pub fn get_requests(&self) -> Vec<RecordedRequest> {
        self.state.lock().unwrap().log.clone()
    }

    /// Forget recorded requests, keeping configured routes.
    pub fn clear_requests(&self) {
        self.state.lock().unwrap().log.clear();
    }

    /// Drop all configured routes and the fallback.
    pub fn clear_responses(&self) {
        let mut state = self.state.lock().unwrap();
        state.routes.clear();
        state.fallback = None;
    }

    /// Record the request and resolve the configured response.
    fn respond(
        &self,
        method: &str,
        url: &str,
        headers: &Headers,
        body: Option<String>,
    ) -> Result<Response, HttpError> {
        let mut state = self.state.lock().unwrap();
        state.log.push(RecordedRequest {
            method: method.to_string(),
            url: url.to_string(),
            headers: headers.clone(),
            body,
        });

        let matched = state
            .routes
            .get(url)
            .or_else(|| {
                state
                    .routes
                    .iter()
                    .find(|(pattern, _)| url.starts_with(pattern.as_str()))
                    .map(|(_, response)| response)
            })
            .or(state.fallback.as_ref())
            .cloned();

        match matched {
            Some(MockResponse::Success(response)) => Ok(response),
            Some(MockResponse::Error(err)) => Err(err),
            None => Err(HttpError::Other(format!(
                "No mock response for URL: {}",
                url
            ))),
        }
    }
}

#[async_trait]
impl HttpClient for MockHttpClient {
    async fn get(&self, url: &str, headers: &Headers) -> Result<Response, HttpError> {
        self.respond("GET", url, headers, None)
    }

    async fn post(&self, url: &str, body: &str, headers: &Headers) -> Result<Response, HttpError> {
        self.respond("POST", url, headers, Some(body.to_string()))
    }

    async fn patch(
        &self,
        url: &str,
        body: &str,
        headers: &Headers,
    ) -> Result<Response, HttpError> {
        self.respond("PATCH", url, headers, Some(body.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;

    #[test]
    fn test_mock_http_client_new() {
        let client = MockHttpClient::new();
        assert!(client.get_requests().is_empty());
    }

    #[test]
    fn test_mock_http_client_default() {
        let client = MockHttpClient::default();
        assert!(client.get_requests().is_empty());
    }

    #[tokio::test]
    async fn test_get_with_response() {
        let client = MockHttpClient::new();
        client.set_response(
            "https://example.com/api/v1/auth/guests/u1",
            MockResponse::Success(Response::new(200, Bytes::from("Hello"))),
        );

        let response = client
            .get("https://example.com/api/v1/auth/guests/u1", &Headers::new())
            .await
            .unwrap();

        assert_eq!(response.status, 200);
        assert_eq!(response.body, Bytes::from("Hello"));

        let requests = client.get_requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, "GET");
        assert_eq!(requests[0].url, "https://example.com/api/v1/auth/guests/u1");
    }

    #[tokio::test]
    async fn test_get_with_error() {
        let client = MockHttpClient::new();
        client.set_response(
            "https://example.com/error",
            MockResponse::Error(HttpError::ServerError {
                status: 401,
                message: "Unauthorized".to_string(),
            }),
        );

        let result = client
            .get("https://example.com/error", &Headers::new())
            .await;

        match result {
            Err(HttpError::ServerError { status, message }) => {
                assert_eq!(status, 401);
                assert_eq!(message, "Unauthorized");
            }
            other => panic!("expected ServerError, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_post_with_response() {
        let client = MockHttpClient::new();
        client.set_response(
            "https://example.com/api/v1/messages",
            MockResponse::Success(Response::new(200, Bytes::from(r#"{"id": 1}"#))),
        );

        let response = client
            .post(
                "https://example.com/api/v1/messages",
                r#"{"title": "hi"}"#,
                &Headers::new(),
            )
            .await
            .unwrap();

        assert_eq!(response.status, 200);

        let requests = client.get_requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, "POST");
        assert_eq!(requests[0].body, Some(r#"{"title": "hi"}"#.to_string()));
    }

    #[tokio::test]
    async fn test_patch_with_response() {
        let client = MockHttpClient::new();
        client.set_response(
            "https://example.com/api/v1/auth/users/nickname",
            MockResponse::Success(Response::new(200, Bytes::from("{}"))),
        );

        let response = client
            .patch(
                "https://example.com/api/v1/auth/users/nickname",
                r#"{"nickname": "moon"}"#,
                &Headers::new(),
            )
            .await
            .unwrap();

        assert_eq!(response.status, 200);

        let requests = client.get_requests();
        assert_eq!(requests[0].method, "PATCH");
        assert_eq!(requests[0].body, Some(r#"{"nickname": "moon"}"#.to_string()));
    }

    #[tokio::test]
    async fn test_no_response_configured() {
        let client = MockHttpClient::new();

        let result = client
            .get("https://example.com/missing", &Headers::new())
            .await;

        match result {
            Err(HttpError::Other(msg)) => assert!(msg.contains("No mock response")),
            other => panic!("expected Other, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_default_response() {
        let client = MockHttpClient::new();
        client.set_default_response(MockResponse::Success(Response::new(
            404,
            Bytes::from("Not Found"),
        )));

        let response = client
            .get("https://example.com/anything", &Headers::new())
            .await
            .unwrap();

        assert_eq!(response.status, 404);
    }

    #[tokio::test]
    async fn test_headers_recorded() {
        let client = MockHttpClient::new();
        client.set_response(
            "https://example.com/auth",
            MockResponse::Success(Response::new(200, Bytes::new())),
        );

        let mut headers = Headers::new();
        headers.insert("Authorization".to_string(), "Bearer token123".to_string());

        client
            .get("https://example.com/auth", &headers)
            .await
            .unwrap();

        let requests = client.get_requests();
        assert_eq!(
            requests[0].headers.get("Authorization"),
            Some(&"Bearer token123".to_string())
        );
    }

    #[tokio::test]
    async fn test_clear_requests_keeps_routes() {
        let client = MockHttpClient::new();
        client.set_response(
            "https://example.com",
            MockResponse::Success(Response::new(200, Bytes::new())),
        );

        client.get("https://example.com", &Headers::new()).await.unwrap();
        assert_eq!(client.get_requests().len(), 1);

        client.clear_requests();
        assert!(client.get_requests().is_empty());

        // The route survives the log reset
        let response = client.get("https://example.com", &Headers::new()).await;
        assert!(response.is_ok());
    }

    #[tokio::test]
    async fn test_clear_responses_drops_fallback() {
        let client = MockHttpClient::new();
        client.set_response(
            "https://example.com",
            MockResponse::Success(Response::new(200, Bytes::new())),
        );
        client.set_default_response(MockResponse::Success(Response::new(204, Bytes::new())));

        client.clear_responses();

        let result = client.get("https://example.com", &Headers::new()).await;
        assert!(matches!(result, Err(HttpError::Other(_))));
    }

    #[tokio::test]
    async fn test_prefix_match() {
        let client = MockHttpClient::new();
        client.set_response(
            "https://example.com/api",
            MockResponse::Success(Response::new(200, Bytes::from("API response"))),
        );

        let response = client
            .get(
                "https://example.com/api/v1/messages/received/u1",
                &Headers::new(),
            )
            .await
            .unwrap();

        assert_eq!(response.status, 200);
    }

    #[tokio::test]
    async fn test_clone_shares_state() {
        let client = MockHttpClient::new();
        client.set_response(
            "https://example.com",
            MockResponse::Success(Response::new(200, Bytes::from("Hello"))),
        );

        let cloned = client.clone();

        let response = cloned
            .get("https://example.com", &Headers::new())
            .await
            .unwrap();

        assert_eq!(response.status, 200);

        // Both handles see the same recorded requests
        assert_eq!(client.get_requests().len(), 1);
        assert_eq!(cloned.get_requests().len(), 1);
    }
}
