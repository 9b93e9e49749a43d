//! Command-line argument parsing.
//!
//! The surface is a handful of positional subcommands. Parse failures
//! become [`CliCommand::Invalid`] so the dispatcher can print the usage
//! line instead of panicking mid-parse.

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Exchange a social provider code for a session
    Login { provider: String, code: String },
    /// Send a heart message to a board
    Send {
        receiver_id: String,
        heart_id: i64,
        title: String,
        content: Option<String>,
    },
    /// Change the signed-in user's nickname
    Nickname { nickname: String },
    /// Change the signed-in user's status message
    Status { message: String },
    /// End the session and clear stored credentials
    Logout,
    /// Arguments did not form a valid command
    Invalid { reason: String },
    /// Run the TUI application (default). An optional positional argument
    /// selects whose board to view as a guest.
    RunTui { user_id: Option<String> },
}

/// Map raw arguments (typically `std::env::args()`) to a [`CliCommand`].
///
/// # Examples
///
/// ```
/// use hearting::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["hearting".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()), CliCommand::Version);
/// ```
pub fn parse_args<I>(args: I) -> CliCommand
where
    I: Iterator<Item = String>,
{
    // Skip the program name
    let args: Vec<String> = args.skip(1).collect();

    let Some(first) = args.first() else {
        return CliCommand::RunTui { user_id: None };
    };

    match first.as_str() {
        "--version" | "-V" => CliCommand::Version,
        "login" => match (args.get(1), args.get(2)) {
            (Some(provider), Some(code)) => CliCommand::Login {
                provider: provider.clone(),
                code: code.clone(),
            },
            _ => CliCommand::Invalid {
                reason: "usage: hearting login <provider> <code>".to_string(),
            },
        },
        "send" => match (args.get(1), args.get(2), args.get(3)) {
            (Some(receiver_id), Some(heart), Some(title)) => match heart.parse::<i64>() {
                Ok(heart_id) => CliCommand::Send {
                    receiver_id: receiver_id.clone(),
                    heart_id,
                    title: title.clone(),
                    content: args.get(4).cloned(),
                },
                Err(_) => CliCommand::Invalid {
                    reason: format!("invalid heart id '{}', expected a number 1-5", heart),
                },
            },
            _ => CliCommand::Invalid {
                reason: "usage: hearting send <receiver-id> <heart-id> <title> [content]"
                    .to_string(),
            },
        },
        "nickname" => match args.get(1) {
            Some(nickname) => CliCommand::Nickname {
                nickname: nickname.clone(),
            },
            None => CliCommand::Invalid {
                reason: "usage: hearting nickname <new-nickname>".to_string(),
            },
        },
        "status" => match args.get(1) {
            Some(message) => CliCommand::Status {
                message: message.clone(),
            },
            None => CliCommand::Invalid {
                reason: "usage: hearting status <message>".to_string(),
            },
        },
        "logout" => CliCommand::Logout,
        other if other.starts_with('-') => CliCommand::Invalid {
            reason: format!("unknown flag '{}'", other),
        },
        // A bare argument is a user id: open that board as a guest
        other => CliCommand::RunTui {
            user_id: Some(other.to_string()),
        },
    }
}
