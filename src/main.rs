use hearting::adapters::ReqwestHttpClient;
use hearting::api::{ApiError, MessageApiClient, UserApiClient};
use hearting::app::{App, AppMessage};
use hearting::auth::credentials::{Credentials, CredentialsManager};
use hearting::auth::token::jwt_expires_at;
use hearting::cli::{parse_args, run_cli_command, CliCommand};
use hearting::terminal::{setup_panic_hook, TerminalManager};
use hearting::traits::HttpClient;
use hearting::ui;

use color_eyre::Result;
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use ratatui::Terminal;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Handle CLI commands before any initialization
    let command = parse_args(std::env::args());
    if let Some(result) = run_cli_command(command.clone()) {
        if let Err(e) = result {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
        std::process::exit(0);
    }
    let guest_user_id = match command {
        CliCommand::RunTui { user_id } => user_id,
        _ => None,
    };

    color_eyre::install()?;

    // Panic hook first so a failed startup still restores the shell
    setup_panic_hook();

    // Stdout belongs to the TUI, so tracing goes to a file
    init_logging();

    // One runtime shared by the preflight check and the event loop
    let runtime = tokio::runtime::Runtime::new()?;

    // =========================================================
    // Pre-flight auth check - run BEFORE TUI starts
    // =========================================================

    let manager = CredentialsManager::new();
    let mut credentials = manager
        .as_ref()
        .map(|m| m.load())
        .unwrap_or_else(Credentials::new);

    if credentials.has_token() && credentials.is_expired() {
        // Token expired - try a reissue before falling back to signed-out mode
        match attempt_token_refresh(&runtime) {
            Ok(token) => {
                info!("access token reissued");
                credentials.expires_at = jwt_expires_at(&token);
                credentials.access_token = Some(token);
                if let Some(ref manager) = manager {
                    if !manager.save(&credentials) {
                        eprintln!("Warning: Failed to save refreshed credentials");
                    }
                }
            }
            Err(e) => {
                warn!(error = %e, "token reissue failed, continuing signed out");
                credentials = Credentials::new();
            }
        }
    }

    // =========================================================
    // Board selection - own board when signed in, guest otherwise
    // =========================================================

    let (board_user_id, signed_in) = match &guest_user_id {
        // A positional user id always opens that board read-only
        Some(user_id) => (user_id.clone(), false),
        None => match (credentials.is_valid(), credentials.user_id.clone()) {
            (true, Some(user_id)) => (user_id, true),
            _ => {
                eprintln!("Not signed in. Run 'hearting login <provider> <code>' first,");
                eprintln!("or pass a user id to view a board as a guest: hearting <user-id>");
                std::process::exit(1);
            }
        },
    };

    // =========================================================
    // TUI initialization
    // =========================================================

    let http = Arc::new(ReqwestHttpClient::new()) as Arc<dyn HttpClient>;
    let mut messages_api = MessageApiClient::new(Arc::clone(&http));
    let mut users_api = UserApiClient::new(http);
    if signed_in {
        messages_api.set_access_token(credentials.access_token.clone());
        users_api.set_access_token(credentials.access_token.clone());
    }

    let mut app = App::new(
        board_user_id,
        signed_in,
        Arc::new(messages_api),
        Arc::new(users_api),
    );

    // Setup terminal (restored automatically when the manager drops)
    let mut term_manager = TerminalManager::new()?;

    let result = runtime.block_on(run_app(term_manager.terminal(), &mut app));

    // Restore the terminal before surfacing any error
    term_manager.restore()?;

    result
}

/// Initialize file logging under ~/.hearting/.
///
/// Honors RUST_LOG, defaulting to info. Silently skipped when the log file
/// cannot be opened; the TUI works fine without logs.
fn init_logging() {
    let Some(home) = dirs::home_dir() else {
        return;
    };
    let log_dir = home.join(".hearting");
    if std::fs::create_dir_all(&log_dir).is_err() {
        return;
    }
    let Ok(log_file) = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_dir.join("hearting.log"))
    else {
        return;
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::sync::Mutex::new(log_file))
        .with_ansi(false)
        .try_init();
}

/// Ask the backend for a fresh access token via the reissue endpoint.
fn attempt_token_refresh(runtime: &tokio::runtime::Runtime) -> Result<String, ApiError> {
    let http = Arc::new(ReqwestHttpClient::new()) as Arc<dyn HttpClient>;
    let api = UserApiClient::new(http);
    runtime
        .block_on(api.reissue_token())
        .map(|reissued| reissued.access_token)
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    // Kick off the initial board load
    app.initialize();

    // Crossterm delivers keys as an async stream
    let mut event_stream = EventStream::new();

    // select! needs to own the receiver half
    let mut message_rx: Option<mpsc::UnboundedReceiver<AppMessage>> = app.message_rx.take();

    loop {
        // Draw the UI only when needed (dirty flag)
        if app.needs_redraw {
            terminal.draw(|f| {
                ui::render(f, app);
            })?;
            app.clear_dirty();
        }

        let timeout = tokio::time::sleep(std::time::Duration::from_millis(16));

        tokio::select! {
            // Timeout keeps animations ticking while idle
            _ = timeout => {
                app.tick();
            }

            // Keyboard and resize events
            event_result = event_stream.next() => {
                if let Some(Ok(event)) = event_result {
                    match event {
                        Event::Resize(_, _) => {
                            app.mark_dirty();
                        }
                        Event::Key(key) if key.kind == KeyEventKind::Press => {
                            app.handle_key(key);
                        }
                        _ => {}
                    }
                }
            }

            // Handle async messages from board fetches
            msg = async {
                match &mut message_rx {
                    Some(rx) => rx.recv().await,
                    None => std::future::pending().await,
                }
            } => {
                if let Some(msg) = msg {
                    app.handle_message(msg);
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
