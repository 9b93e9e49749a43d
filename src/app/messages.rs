//! AppMessage enum for async communication within the application.

use crate::models::{MessageDetail, Profile, ReceivedMessage};

/// Messages received from async operations (board fetches, message reads)
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// Board owner profile loaded
    ProfileLoaded(Profile),
    /// Failed to load the board owner profile
    ProfileLoadError(String),
    /// Received messages loaded for the signed-in user
    InboxLoaded(Vec<ReceivedMessage>),
    /// Failed to load received messages
    InboxLoadError(String),
    /// Full message detail loaded after opening a message
    MessageDetailLoaded(MessageDetail),
    /// Failed to load a message detail
    MessageDetailLoadError(String),
}
