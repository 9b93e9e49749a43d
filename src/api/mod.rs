//! Hearting API clients.
//!
//! Two clients cover the backend surface: [`MessageApiClient`] for the
//! message board endpoints and [`UserApiClient`] for auth and profile
//! endpoints. Both speak through the [`crate::traits::HttpClient`] seam and
//! report failures through a single [`ApiError`] type; logging is left to
//! callers so one failed call does not decide how it is surfaced.

pub mod messages;
pub mod users;

pub use messages::MessageApiClient;
pub use users::UserApiClient;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use thiserror::Error;

use crate::traits::{HttpError, Response};

/// Default URL for the Hearting API.
pub const HEARTING_API_URL: &str = "https://api.hearting.site";

/// Error type for Hearting API operations.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport-level failure (connection, timeout)
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    /// JSON deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Server returned an error status
    #[error("Server error ({status}): {message}")]
    ServerError { status: u16, message: String },

    /// 2xx response whose envelope carried no data payload
    #[error("Response envelope carried no data")]
    MissingData,
}

/// The `{status, message, data}` wrapper every endpoint responds with.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiEnvelope<T> {
    /// Outcome tag, "success" on the happy path
    pub status: String,
    /// Human-readable outcome description
    #[serde(default)]
    pub message: String,
    /// Typed payload, absent on empty-bodied outcomes
    #[serde(default)]
    pub data: Option<T>,
}

impl<T> ApiEnvelope<T> {
    /// Unwrap the payload, treating an empty envelope as an error.
    pub fn into_data(self) -> Result<T, ApiError> {
        self.data.ok_or(ApiError::MissingData)
    }
}

/// Unwrap a response into the envelope's typed payload.
///
/// Non-2xx responses become [`ApiError::ServerError`] with the body text
/// preserved for diagnostics.
pub(crate) fn parse_envelope<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    if !response.is_success() {
        let status = response.status;
        let message = response.text().unwrap_or_default();
        return Err(ApiError::ServerError { status, message });
    }

    let envelope: ApiEnvelope<T> = response.json()?;
    envelope.into_data()
}

/// Check a response for success where no payload is expected.
pub(crate) fn expect_success(response: Response) -> Result<(), ApiError> {
    if !response.is_success() {
        let status = response.status;
        let message = response.text().unwrap_or_default();
        return Err(ApiError::ServerError { status, message });
    }
    Ok(())
}
