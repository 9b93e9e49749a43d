//! Session management for the Hearting client.
//!
//! - Credentials storage under `~/.hearting`
//! - Access-token expiry inspection

pub mod credentials;
pub mod token;

pub use credentials::{Credentials, CredentialsManager};
pub use token::jwt_expires_at;
