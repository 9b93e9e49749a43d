//! Account commands for the Hearting CLI.
//!
//! Nickname and status-message updates plus logout, all running against
//! the stored session.

use color_eyre::Result;
use std::sync::Arc;

use crate::adapters::ReqwestHttpClient;
use crate::api::UserApiClient;
use crate::auth::credentials::{Credentials, CredentialsManager};
use crate::traits::HttpClient;

/// Load the stored session or exit with a sign-in hint.
fn load_session() -> (CredentialsManager, Credentials, String) {
    let Some(manager) = CredentialsManager::new() else {
        eprintln!("Error: Could not determine home directory");
        std::process::exit(1);
    };
    let credentials = manager.load();

    let Some(access_token) = credentials.access_token.clone() else {
        eprintln!("Error: Not signed in. Run 'hearting login' first.");
        std::process::exit(1);
    };

    (manager, credentials, access_token)
}

fn user_api(access_token: &str) -> UserApiClient {
    let http = Arc::new(ReqwestHttpClient::new()) as Arc<dyn HttpClient>;
    UserApiClient::new(http).with_auth(access_token)
}

/// Handle the `nickname <new-nickname>` command.
///
/// # Errors
///
/// Returns an error if the tokio runtime cannot be created. Other errors
/// are handled internally with appropriate exit codes.
pub fn handle_nickname_command(nickname: &str) -> Result<()> {
    println!("Updating nickname...\n");

    let (manager, mut credentials, access_token) = load_session();
    let runtime = tokio::runtime::Runtime::new()?;
    let api = user_api(&access_token);

    match runtime.block_on(api.update_nickname(nickname)) {
        Ok(updated) => {
            // Keep the stored copy in sync for the TUI header
            credentials.nickname = Some(updated.nickname.clone());
            if !manager.save(&credentials) {
                eprintln!("Warning: nickname updated but credentials file not refreshed");
            }
            println!("Nickname is now '{}'", updated.nickname);
            Ok(())
        }
        Err(e) => {
            eprintln!("Error: Nickname update failed: {}", e);
            std::process::exit(1);
        }
    }
}

/// Handle the `status <message>` command.
///
/// # Errors
///
/// Returns an error if the tokio runtime cannot be created. Other errors
/// are handled internally with appropriate exit codes.
pub fn handle_status_command(message: &str) -> Result<()> {
    println!("Updating status message...\n");

    let (_, _, access_token) = load_session();
    let runtime = tokio::runtime::Runtime::new()?;
    let api = user_api(&access_token);

    match runtime.block_on(api.update_status_message(message)) {
        Ok(updated) => {
            println!("Status message is now '{}'", updated.status_message);
            Ok(())
        }
        Err(e) => {
            eprintln!("Error: Status update failed: {}", e);
            std::process::exit(1);
        }
    }
}

/// Handle the `logout` command.
///
/// Tells the server to end the session, then clears local credentials.
/// The local clear still happens if the server call fails, so a dead
/// session never wedges the client.
///
/// # Errors
///
/// Returns an error if the tokio runtime cannot be created.
pub fn handle_logout_command() -> Result<()> {
    println!("Signing out...\n");

    let (manager, _, access_token) = load_session();
    let runtime = tokio::runtime::Runtime::new()?;
    let api = user_api(&access_token);

    if let Err(e) = runtime.block_on(api.logout()) {
        eprintln!("Warning: server logout failed: {}", e);
    }

    if !manager.clear() {
        eprintln!("Error: Could not remove credentials file");
        std::process::exit(1);
    }

    println!("Signed out");
    Ok(())
}
