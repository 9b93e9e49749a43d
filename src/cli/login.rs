//! Login command for the Hearting CLI.
//!
//! Exchanges a social provider authorization code for a Hearting session
//! and stores the credentials on disk for the TUI and other commands.

use color_eyre::Result;
use std::sync::Arc;

use crate::adapters::ReqwestHttpClient;
use crate::api::UserApiClient;
use crate::auth::credentials::{Credentials, CredentialsManager};
use crate::auth::token::jwt_expires_at;
use crate::models::SocialProvider;
use crate::traits::HttpClient;

/// Handle the `login <provider> <code>` command.
///
/// Runs the login flow:
/// 1. Exchange the authorization code with the backend
/// 2. Save the returned session as local credentials
///
/// # Errors
///
/// Returns an error if the tokio runtime cannot be created. Other errors
/// are handled internally with appropriate exit codes.
pub fn handle_login_command(provider: &str, code: &str) -> Result<()> {
    println!("Signing in to Hearting...\n");

    let provider: SocialProvider = match provider.parse() {
        Ok(p) => p,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    // Step 1: Exchange the code for a session
    println!("[1/2] Contacting {}...", provider);
    let runtime = tokio::runtime::Runtime::new()?;
    let http = Arc::new(ReqwestHttpClient::new()) as Arc<dyn HttpClient>;
    let api = UserApiClient::new(http);

    let session = match runtime.block_on(api.login(provider, code)) {
        Ok(session) => session,
        Err(e) => {
            eprintln!("Error: Login failed: {}", e);
            std::process::exit(1);
        }
    };

    let Some(access_token) = session.access_token else {
        eprintln!("Error: Login response carried no access token");
        std::process::exit(1);
    };

    // Step 2: Persist the session
    println!("[2/2] Saving credentials...");
    let Some(manager) = CredentialsManager::new() else {
        eprintln!("Error: Could not determine home directory");
        std::process::exit(1);
    };

    let expires_at = jwt_expires_at(&access_token);
    let credentials = Credentials {
        access_token: Some(access_token),
        user_id: Some(session.user_id.clone()),
        nickname: session.nickname.clone(),
        expires_at,
    };

    if !manager.save(&credentials) {
        eprintln!("Error: Could not save credentials");
        std::process::exit(1);
    }

    let display_name = session.nickname.unwrap_or(session.user_id);
    println!("\nSigned in as {}", display_name);
    if session.is_first {
        println!("Welcome to Hearting!");
    }

    Ok(())
}
