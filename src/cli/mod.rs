//! Command-line surface of Hearting.
//!
//! Everything that does not need the board on screen lives here: social
//! login and logout, sending a heart, profile updates and `--version`.
//! `main` parses the arguments first and only starts the TUI when no
//! subcommand matched:
//!
//! ```ignore
//! use hearting::cli::{parse_args, run_cli_command};
//!
//! let command = parse_args(std::env::args());
//! if let Some(result) = run_cli_command(command) {
//!     if let Err(e) = result {
//!         eprintln!("Error: {}", e);
//!         std::process::exit(1);
//!     }
//!     std::process::exit(0);
//! }
//! // fall through to the TUI
//! ```

pub mod account;
pub mod args;
pub mod login;
pub mod send;
pub mod version;

pub use account::{handle_logout_command, handle_nickname_command, handle_status_command};
pub use args::{parse_args, CliCommand};
pub use login::handle_login_command;
pub use send::handle_send_command;
pub use version::{handle_version_command, VERSION};

use color_eyre::eyre::eyre;
use color_eyre::Result;

/// Dispatch a parsed command, or signal that the TUI should run.
///
/// Returns `None` for [`CliCommand::RunTui`] and the command's outcome
/// otherwise. `Version` exits the process directly.
pub fn run_cli_command(command: CliCommand) -> Option<Result<()>> {
    match command {
        CliCommand::Version => handle_version_command(),
        CliCommand::Login { provider, code } => Some(handle_login_command(&provider, &code)),
        CliCommand::Send {
            receiver_id,
            heart_id,
            title,
            content,
        } => Some(handle_send_command(
            &receiver_id,
            heart_id,
            &title,
            content.as_deref(),
        )),
        CliCommand::Nickname { nickname } => Some(handle_nickname_command(&nickname)),
        CliCommand::Status { message } => Some(handle_status_command(&message)),
        CliCommand::Logout => Some(handle_logout_command()),
        CliCommand::Invalid { reason } => Some(Err(eyre!(reason))),
        CliCommand::RunTui { .. } => None,
    }
}
