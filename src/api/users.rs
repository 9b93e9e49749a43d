//! Client for the auth and profile endpoints.

use std::sync::Arc;

use crate::models::{
    Profile, ReissuedToken, SocialLoginData, SocialProvider, UpdateNicknameRequest,
    UpdateStatusMessageRequest, UpdatedNickname, UpdatedStatusMessage,
};
use crate::traits::{Headers, HttpClient};

use super::{expect_success, parse_envelope, ApiError, HEARTING_API_URL};

/// Client for `/api/v1/auth` endpoints.
///
/// Login, profile and token reissue are public; the profile update and
/// logout operations attach the bearer token set via
/// [`UserApiClient::with_auth`].
pub struct UserApiClient {
    /// Base URL for the Hearting API
    pub base_url: String,
    /// Transport used for requests
    http: Arc<dyn HttpClient>,
    /// Bearer token for authenticated calls
    access_token: Option<String>,
}

impl UserApiClient {
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

    /// Headers for a public JSON request.
    fn public_headers(&self) -> Headers {
        let mut headers = Headers::new();
        headers.insert("Content-Type".to_string(), "application/json".to_string());
        headers
    }

    /// Headers for an authenticated JSON request.
    fn auth_headers(&self) -> Headers {
        let mut headers = self.public_headers();
        if let Some(ref token) = self.access_token {
            headers.insert("Authorization".to_string(), format!("Bearer {}", token));
        }
        headers
    }

    /// Exchange a provider authorization code for a Hearting session.
    ///
    /// GET /api/v1/auth/guests/social/{provider}?code={code}
    pub async fn login(
        &self,
        provider: SocialProvider,
        code: &str,
    ) -> Result<SocialLoginData, ApiError> {
        let url = format!(
            "{}/api/v1/auth/guests/social/{}?code={}",
            self.base_url,
            provider.as_str(),
            urlencoding::encode(code)
        );

        let response = self.http.get(&url, &self.public_headers()).await?;
        parse_envelope(response)
    }

    /// Change the signed-in user's nickname.
    ///
    /// PATCH /api/v1/auth/users/nickname
    pub async fn update_nickname(&self, nickname: &str) -> Result<UpdatedNickname, ApiError> {
        let url = format!("{}/api/v1/auth/users/nickname", self.base_url);
        let body = serde_json::to_string(&UpdateNicknameRequest {
            nickname: nickname.to_string(),
        })?;

        let response = self.http.patch(&url, &body, &self.auth_headers()).await?;
        parse_envelope(response)
    }

    /// Change the signed-in user's board status message.
    ///
    /// PATCH /api/v1/auth/users/status-message
    pub async fn update_status_message(
        &self,
        status_message: &str,
    ) -> Result<UpdatedStatusMessage, ApiError> {
        let url = format!("{}/api/v1/auth/users/status-message", self.base_url);
        let body = serde_json::to_string(&UpdateStatusMessageRequest {
            status_message: status_message.to_string(),
        })?;

        let response = self.http.patch(&url, &body, &self.auth_headers()).await?;
        parse_envelope(response)
    }

    /// End the signed-in session on the server.
    ///
    /// PATCH /api/v1/auth/users/logout
    pub async fn logout(&self) -> Result<(), ApiError> {
        let url = format!("{}/api/v1/auth/users/logout", self.base_url);

        let response = self.http.patch(&url, "{}", &self.auth_headers()).await?;
        expect_success(response)
    }

    /// Fetch the public heart-board owner data for any user.
    ///
    /// GET /api/v1/auth/guests/{userId}
    pub async fn fetch_profile(&self, user_id: &str) -> Result<Profile, ApiError> {
        let url = format!("{}/api/v1/auth/guests/{}", self.base_url, user_id);

        let response = self.http.get(&url, &self.public_headers()).await?;
        parse_envelope(response)
    }

    /// Obtain a fresh access token from the refresh cookie.
    ///
    /// GET /api/v1/auth/users/access-token
    pub async fn reissue_token(&self) -> Result<ReissuedToken, ApiError> {
        let url = format!("{}/api/v1/auth/users/access-token", self.base_url);

        let response = self.http.get(&url, &self.public_headers()).await?;
        parse_envelope(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::{MockHttpClient, MockResponse};
    use crate::traits::{HttpError, Response};
    use bytes::Bytes;

    fn client_with_mock() -> (UserApiClient, Arc<MockHttpClient>) {
        let mock = Arc::new(MockHttpClient::new());
        let client = UserApiClient::with_base_url(
            mock.clone() as Arc<dyn HttpClient>,
            "https://mock.test".to_string(),
        );
        (client, mock)
    }

    #[tokio::test]
    async fn test_login_builds_provider_url() {
        let (client, mock) = client_with_mock();
        mock.set_response(
            "https://mock.test/api/v1/auth/guests/social/kakao?code=abc123",
            MockResponse::Success(Response::new(
                200,
                Bytes::from(
                    r#"{"status":"success","message":"ok","data":{"userId":"u1","accessToken":"t1"}}"#,
                ),
            )),
        );

        let data = client.login(SocialProvider::Kakao, "abc123").await.unwrap();
        assert_eq!(data.user_id, "u1");
        assert_eq!(data.access_token.as_deref(), Some("t1"));

        let requests = mock.get_requests();
        assert_eq!(
            requests[0].url,
            "https://mock.test/api/v1/auth/guests/social/kakao?code=abc123"
        );
        // Login happens before any token exists
        assert!(requests[0].headers.get("Authorization").is_none());
    }

    #[tokio::test]
    async fn test_login_percent_encodes_code() {
        let (client, mock) = client_with_mock();
        mock.set_default_response(MockResponse::Success(Response::new(
            200,
            Bytes::from(r#"{"status":"success","message":"ok","data":{"userId":"u1"}}"#),
        )));

        client.login(SocialProvider::Google, "a b&c").await.unwrap();

        let requests = mock.get_requests();
        assert!(requests[0].url.ends_with("?code=a%20b%26c"));
    }

    #[tokio::test]
    async fn test_update_nickname_patches_with_auth() {
        let (client, mock) = client_with_mock();
        let client = client.with_auth("t1");
        mock.set_response(
            "https://mock.test/api/v1/auth/users/nickname",
            MockResponse::Success(Response::new(
                200,
                Bytes::from(r#"{"status":"success","message":"ok","data":{"nickname":"sun"}}"#),
            )),
        );

        let updated = client.update_nickname("sun").await.unwrap();
        assert_eq!(updated.nickname, "sun");

        let requests = mock.get_requests();
        assert_eq!(requests[0].method, "PATCH");
        assert_eq!(
            requests[0].headers.get("Authorization"),
            Some(&"Bearer t1".to_string())
        );
        let body: serde_json::Value =
            serde_json::from_str(requests[0].body.as_deref().unwrap()).unwrap();
        assert_eq!(body["nickname"], "sun");
    }

    #[tokio::test]
    async fn test_update_status_message_body_is_camel_case() {
        let (client, mock) = client_with_mock();
        let client = client.with_auth("t1");
        mock.set_default_response(MockResponse::Success(Response::new(
            200,
            Bytes::from(
                r#"{"status":"success","message":"ok","data":{"statusMessage":"hello"}}"#,
            ),
        )));

        let updated = client.update_status_message("hello").await.unwrap();
        assert_eq!(updated.status_message, "hello");

        let requests = mock.get_requests();
        let body: serde_json::Value =
            serde_json::from_str(requests[0].body.as_deref().unwrap()).unwrap();
        assert_eq!(body["statusMessage"], "hello");
    }

    #[tokio::test]
    async fn test_logout_succeeds_without_payload() {
        let (client, mock) = client_with_mock();
        let client = client.with_auth("t1");
        mock.set_default_response(MockResponse::Success(Response::new(
            200,
            Bytes::from(r#"{"status":"success","message":"bye"}"#),
        )));

        assert!(client.logout().await.is_ok());
        assert_eq!(mock.get_requests()[0].method, "PATCH");
    }

    #[tokio::test]
    async fn test_fetch_profile_is_public() {
        let (client, mock) = client_with_mock();
        mock.set_response(
            "https://mock.test/api/v1/auth/guests/u2",
            MockResponse::Success(Response::new(
                200,
                Bytes::from(
                    r#"{"status":"success","message":"ok","data":{"nickname":"moon","statusMessage":"hi","messageTotal":3}}"#,
                ),
            )),
        );

        let profile = client.fetch_profile("u2").await.unwrap();
        assert_eq!(profile.nickname, "moon");
        assert_eq!(profile.message_total, 3);

        let requests = mock.get_requests();
        assert!(requests[0].headers.get("Authorization").is_none());
    }

    #[tokio::test]
    async fn test_reissue_token() {
        let (client, mock) = client_with_mock();
        mock.set_response(
            "https://mock.test/api/v1/auth/users/access-token",
            MockResponse::Success(Response::new(
                200,
                Bytes::from(r#"{"status":"success","message":"ok","data":{"accessToken":"t2"}}"#),
            )),
        );

        let token = client.reissue_token().await.unwrap();
        assert_eq!(token.access_token, "t2");
    }

    #[tokio::test]
    async fn test_expired_session_surfaces_status() {
        let (client, mock) = client_with_mock();
        mock.set_default_response(MockResponse::Success(Response::new(
            401,
            Bytes::from("token expired"),
        )));

        let result = client.reissue_token().await;
        assert!(matches!(
            result,
            Err(ApiError::ServerError { status: 401, .. })
        ));
    }

    #[tokio::test]
    async fn test_transport_failure_is_error_not_panic() {
        let (client, mock) = client_with_mock();
        mock.set_default_response(MockResponse::Error(HttpError::Timeout("30s".to_string())));

        let result = client.fetch_profile("u1").await;
        assert!(matches!(result, Err(ApiError::Http(_))));
    }
}
