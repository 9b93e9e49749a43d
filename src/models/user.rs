//! User and auth DTOs.
//!
//! Covers social login, the public heart-board owner profile, profile
//! updates, and access-token reissue. Wire fields are camelCase.

use serde::{Deserialize, Serialize};

/// Social login provider accepted by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialProvider {
    Kakao,
    Google,
    Twitter,
}

impl SocialProvider {
    /// Path segment used in the social-login URL.
    pub fn as_str(&self) -> &'static str {
        match self {
            SocialProvider::Kakao => "kakao",
            SocialProvider::Google => "google",
            SocialProvider::Twitter => "twitter",
        }
    }
}

impl std::fmt::Display for SocialProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SocialProvider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "kakao" => Ok(SocialProvider::Kakao),
            "google" => Ok(SocialProvider::Google),
            "twitter" => Ok(SocialProvider::Twitter),
            other => Err(format!(
                "unknown provider '{}' (expected kakao, google or twitter)",
                other
            )),
        }
    }
}

/// Envelope payload of a successful social login.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SocialLoginData {
    /// Backend user id for the signed-in account
    pub user_id: String,
    /// Bearer token for authenticated calls
    #[serde(default)]
    pub access_token: Option<String>,
    /// Current display name
    #[serde(default)]
    pub nickname: Option<String>,
    /// Whether this login created the account
    #[serde(default)]
    pub is_first: bool,
}

/// Public heart-board owner data.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    /// Display name
    #[serde(default)]
    pub nickname: String,
    /// Board status message
    #[serde(default)]
    pub status_message: Option<String>,
    /// Total messages ever received on the board
    #[serde(default)]
    pub message_total: i64,
}

/// Request body for the nickname update.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateNicknameRequest {
    pub nickname: String,
}

/// Envelope payload confirming a nickname update.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UpdatedNickname {
    /// The nickname now stored on the account
    pub nickname: String,
}

/// Request body for the status-message update.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStatusMessageRequest {
    pub status_message: String,
}

/// Envelope payload confirming a status-message update.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UpdatedStatusMessage {
    /// The status message now shown on the board
    pub status_message: String,
}

/// Envelope payload of the access-token reissue endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReissuedToken {
    /// Fresh bearer token
    pub access_token: String,
}
