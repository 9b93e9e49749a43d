//! Wire DTOs and the heart domain types.

mod heart;
mod message;
mod user;

pub use heart::{HeartDetailInfo, HeartIcon};
pub use message::{
    MessageDetail, ReceivedMessage, ReceivedMessages, SendMessageRequest, SendReceipt,
};
pub use user::{
    Profile, ReissuedToken, SocialLoginData, SocialProvider, UpdateNicknameRequest,
    UpdateStatusMessageRequest, UpdatedNickname, UpdatedStatusMessage,
};
