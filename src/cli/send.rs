//! Send command for the Hearting CLI.
//!
//! Sends a heart message to another user's board using the stored session.

use color_eyre::Result;
use std::sync::Arc;

use crate::adapters::ReqwestHttpClient;
use crate::api::MessageApiClient;
use crate::auth::credentials::CredentialsManager;
use crate::models::{HeartIcon, SendMessageRequest};
use crate::traits::HttpClient;

/// Handle the `send <receiver-id> <heart-id> <title> [content]` command.
///
/// Runs the send flow:
/// 1. Load credentials and verify a session exists
/// 2. Post the message to the receiver's board
///
/// # Errors
///
/// Returns an error if the tokio runtime cannot be created. Other errors
/// are handled internally with appropriate exit codes.
pub fn handle_send_command(
    receiver_id: &str,
    heart_id: i64,
    title: &str,
    content: Option<&str>,
) -> Result<()> {
    println!("Sending a heart...\n");

    let Some(heart) = HeartIcon::from_id(heart_id) else {
        eprintln!("Error: invalid heart id {}, expected 1-5", heart_id);
        std::process::exit(1);
    };

    // Step 1: Load the stored session
    println!("[1/2] Loading credentials...");
    let Some(manager) = CredentialsManager::new() else {
        eprintln!("Error: Could not determine home directory");
        std::process::exit(1);
    };
    let credentials = manager.load();

    let (Some(access_token), Some(sender_id)) =
        (credentials.access_token.clone(), credentials.user_id.clone())
    else {
        eprintln!("Error: Not signed in. Run 'hearting login' first.");
        std::process::exit(1);
    };

    // Step 2: Post the message
    println!("[2/2] Delivering to {}...", receiver_id);
    let runtime = tokio::runtime::Runtime::new()?;
    let http = Arc::new(ReqwestHttpClient::new()) as Arc<dyn HttpClient>;
    let api = MessageApiClient::new(http).with_auth(&access_token);

    let request = SendMessageRequest {
        heart_id,
        sender_id,
        receiver_id: receiver_id.to_string(),
        title: title.to_string(),
        content: content.map(|c| c.to_string()),
    };

    match runtime.block_on(api.send_message(&request)) {
        Ok(receipt) => {
            println!("\n{} delivered (message {})", heart.label(), receipt.message_id);
            Ok(())
        }
        Err(e) => {
            eprintln!("Error: Send failed: {}", e);
            std::process::exit(1);
        }
    }
}
