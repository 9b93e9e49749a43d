//! Client for the message board endpoints.

use std::sync::Arc;

use crate::models::{MessageDetail, ReceivedMessage, ReceivedMessages, SendMessageRequest, SendReceipt};
use crate::traits::{Headers, HttpClient};

use super::{parse_envelope, ApiError, HEARTING_API_URL};

/// Client for `/api/v1/messages` endpoints.
///
/// All three operations require a signed-in user; the bearer token set via
/// [`MessageApiClient::with_auth`] is attached to every request.
pub struct MessageApiClient {
    /// Base URL for the Hearting API
    pub base_url: String,
    /// Transport used for requests
    http: Arc<dyn HttpClient>,
    /// Bearer token for authenticated calls
    access_token: Option<String>,
}

impl MessageApiClient {
    /// Create a new client against the default base URL.
    pub fn new(http: Arc<dyn HttpClient>) -> Self {
        Self {
            base_url: HEARTING_API_URL.to_string(),
            http,
            access_token: None,
        }
    }

    /// Create a new client against a custom base URL.
    pub fn with_base_url(http: Arc<dyn HttpClient>, base_url: String) -> Self {
        Self {
            base_url,
            http,
            access_token: None,
        }
    }

    /// Set the bearer token for authenticated calls.
    pub fn with_auth(mut self, token: &str) -> Self {
        self.access_token = Some(token.to_string());
        self
    }

    /// Replace the bearer token on an existing client.
    pub fn set_access_token(&mut self, token: Option<String>) {
        self.access_token = token;
    }

    /// Headers for an authenticated JSON request.
    fn auth_headers(&self) -> Headers {
        let mut headers = Headers::new();
        headers.insert("Content-Type".to_string(), "application/json".to_string());
        if let Some(ref token) = self.access_token {
            headers.insert("Authorization".to_string(), format!("Bearer {}", token));
        }
        headers
    }

    /// Fetch the messages currently on a user's board.
    ///
    /// GET /api/v1/messages/received/{userId}
    pub async fn fetch_received(&self, user_id: &str) -> Result<Vec<ReceivedMessage>, ApiError> {
        let url = format!("{}/api/v1/messages/received/{}", self.base_url, user_id);

        let response = self.http.get(&url, &self.auth_headers()).await?;
        let inbox: ReceivedMessages = parse_envelope(response)?;
        Ok(inbox.message_list)
    }

    /// Send a heart message to a board.
    ///
    /// POST /api/v1/messages
    pub async fn send_message(
        &self,
        request: &SendMessageRequest,
    ) -> Result<SendReceipt, ApiError> {
        let url = format!("{}/api/v1/messages", self.base_url);
        let body = serde_json::to_string(request)?;

        let response = self.http.post(&url, &body, &self.auth_headers()).await?;
        parse_envelope(response)
    }

    /// Fetch the full content of one received message.
    ///
    /// GET /api/v1/messages/received/detail/{messageId}
    pub async fn fetch_message_detail(&self, message_id: i64) -> Result<MessageDetail, ApiError> {
        let url = format!(
            "{}/api/v1/messages/received/detail/{}",
            self.base_url, message_id
        );

        let response = self.http.get(&url, &self.auth_headers()).await?;
        parse_envelope(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::{MockHttpClient, MockResponse};
    use crate::traits::{HttpError, Response};
    use bytes::Bytes;

    fn client_with_mock() -> (MessageApiClient, Arc<MockHttpClient>) {
        let mock = Arc::new(MockHttpClient::new());
        let client = MessageApiClient::with_base_url(
            mock.clone() as Arc<dyn HttpClient>,
            "https://mock.test".to_string(),
        )
        .with_auth("t1");
        (client, mock)
    }

    #[tokio::test]
    async fn test_fetch_received_unwraps_message_list() {
        let (client, mock) = client_with_mock();
        mock.set_response(
            "https://mock.test/api/v1/messages/received/u1",
            MockResponse::Success(Response::new(
                200,
                Bytes::from(
                    r#"{"status":"success","message":"ok","data":{"messageList":[{"messageId":1,"heartId":3,"title":"hey"}]}}"#,
                ),
            )),
        );

        let messages = client.fetch_received("u1").await.unwrap();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].message_id, 1);

        let requests = mock.get_requests();
        assert_eq!(requests[0].method, "GET");
        assert_eq!(
            requests[0].headers.get("Authorization"),
            Some(&"Bearer t1".to_string())
        );
    }

    #[tokio::test]
    async fn test_send_message_posts_camel_case_body() {
        let (client, mock) = client_with_mock();
        mock.set_response(
            "https://mock.test/api/v1/messages",
            MockResponse::Success(Response::new(
                200,
                Bytes::from(
                    r#"{"status":"success","message":"ok","data":{"messageId":42,"heartId":5}}"#,
                ),
            )),
        );

        let request = SendMessageRequest {
            heart_id: 5,
            sender_id: "u1".to_string(),
            receiver_id: "u2".to_string(),
            title: "hi".to_string(),
            content: Some("hi".to_string()),
        };

        let receipt = client.send_message(&request).await.unwrap();
        assert_eq!(receipt.message_id, 42);
        assert_eq!(receipt.heart_id, 5);

        let recorded = mock.get_requests();
        assert_eq!(recorded[0].method, "POST");
        let body: serde_json::Value =
            serde_json::from_str(recorded[0].body.as_deref().unwrap()).unwrap();
        assert_eq!(body["receiverId"], "u2");
        assert_eq!(body["content"], "hi");
    }

    #[tokio::test]
    async fn test_fetch_detail_parses_content() {
        let (client, mock) = client_with_mock();
        mock.set_response(
            "https://mock.test/api/v1/messages/received/detail/7",
            MockResponse::Success(Response::new(
                200,
                Bytes::from(
                    r#"{"status":"success","message":"ok","data":{"messageId":7,"heartId":2,"title":"hey","content":"long text"}}"#,
                ),
            )),
        );

        let detail = client.fetch_message_detail(7).await.unwrap();
        assert_eq!(detail.message_id, 7);
        assert_eq!(detail.content.as_deref(), Some("long text"));
    }

    #[tokio::test]
    async fn test_transport_failure_is_error_not_panic() {
        let (client, mock) = client_with_mock();
        mock.set_default_response(MockResponse::Error(HttpError::ConnectionFailed(
            "refused".to_string(),
        )));

        let result = client.fetch_received("u1").await;
        assert!(matches!(result, Err(ApiError::Http(_))));
    }

    #[tokio::test]
    async fn test_server_error_carries_status() {
        let (client, mock) = client_with_mock();
        mock.set_default_response(MockResponse::Success(Response::new(
            500,
            Bytes::from("boom"),
        )));

        let result = client.fetch_message_detail(1).await;
        match result {
            Err(ApiError::ServerError { status, message }) => {
                assert_eq!(status, 500);
                assert_eq!(message, "boom");
            }
            other => panic!("Expected ServerError, got {:?}", other.err()),
        }
    }

    #[tokio::test]
    async fn test_unauthenticated_client_sends_no_bearer() {
        let mock = Arc::new(MockHttpClient::new());
        let client = MessageApiClient::with_base_url(
            mock.clone() as Arc<dyn HttpClient>,
            "https://mock.test".to_string(),
        );
        mock.set_default_response(MockResponse::Success(Response::new(
            200,
            Bytes::from(r#"{"status":"success","message":"ok","data":{"messageList":[]}}"#),
        )));

        client.fetch_received("u1").await.unwrap();

        let requests = mock.get_requests();
        assert!(requests[0].headers.get("Authorization").is_none());
    }
}
