//! Message DTOs for the inbox and send endpoints.
//!
//! Field names follow the backend's camelCase wire format. Messages live
//! for 24 hours; the backend sends `expiredDate` and the client only
//! displays remaining time, it never prunes anything itself.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::heart::HeartIcon;

/// A message as it appears in the received inbox.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReceivedMessage {
    /// Unique message id
    pub message_id: i64,
    /// Heart the sender attached
    pub heart_id: i64,
    /// Message title
    #[serde(default)]
    pub title: String,
    /// Sender display name, absent for anonymous sends
    #[serde(default)]
    pub sender_nickname: Option<String>,
    /// Reaction emoji id, if the owner reacted
    #[serde(default)]
    pub emoji_id: Option<i64>,
    /// Whether the owner has opened this message
    #[serde(default)]
    pub is_read: bool,
    /// When the message arrived
    #[serde(default)]
    pub created_date: Option<NaiveDateTime>,
    /// When the message disappears from the board
    #[serde(default)]
    pub expired_date: Option<NaiveDateTime>,
}

impl ReceivedMessage {
    /// The heart icon for this message, if the id is a default heart.
    pub fn heart(&self) -> Option<HeartIcon> {
        HeartIcon::from_id(self.heart_id)
    }

    /// Whether the message has passed its expiry timestamp.
    ///
    /// Messages without an expiry never expire client-side.
    pub fn is_expired(&self, now: NaiveDateTime) -> bool {
        match self.expired_date {
            Some(expired) => expired <= now,
            None => false,
        }
    }

    /// Time left before expiry, `None` when absent or already expired.
    pub fn expires_in(&self, now: NaiveDateTime) -> Option<chrono::Duration> {
        let expired = self.expired_date?;
        if expired <= now {
            return None;
        }
        Some(expired - now)
    }
}

/// Envelope payload of the received-inbox endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReceivedMessages {
    /// Messages still on the board, newest first
    #[serde(default)]
    pub message_list: Vec<ReceivedMessage>,
}

/// Request body for sending a message to a board.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SendMessageRequest {
    /// Heart to attach
    pub heart_id: i64,
    /// Sender user id
    pub sender_id: String,
    /// Board owner receiving the message
    pub receiver_id: String,
    /// Message title
    pub title: String,
    /// Optional message body
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

/// Envelope payload returned after a successful send.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SendReceipt {
    /// Id assigned to the stored message
    pub message_id: i64,
    /// Heart that was attached
    pub heart_id: i64,
}

/// Full message as returned by the detail endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MessageDetail {
    /// Unique message id
    pub message_id: i64,
    /// Heart the sender attached
    pub heart_id: i64,
    /// Message title
    #[serde(default)]
    pub title: String,
    /// Message body
    #[serde(default)]
    pub content: Option<String>,
    /// Sender display name, absent for anonymous sends
    #[serde(default)]
    pub sender_nickname: Option<String>,
    /// Reaction emoji id, if the owner reacted
    #[serde(default)]
    pub emoji_id: Option<i64>,
    /// When the message arrived
    #[serde(default)]
    pub created_date: Option<NaiveDateTime>,
}

impl MessageDetail {
    /// The heart icon for this message, if the id is a default heart.
    pub fn heart(&self) -> Option<HeartIcon> {
        HeartIcon::from_id(self.heart_id)
    }
}
