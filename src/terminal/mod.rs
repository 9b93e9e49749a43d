//! Terminal lifecycle management.
//!
//! The TUI takes over the whole screen, so getting back out cleanly matters
//! as much as getting in. [`TerminalManager`] owns the ratatui terminal and
//! restores the user's shell on drop; [`setup_panic_hook`] covers unwinds
//! that bypass Drop.
//!
//! ```no_run
//! use hearting::terminal::TerminalManager;
//!
//! fn main() -> color_eyre::Result<()> {
//!     let mut manager = TerminalManager::new()?;
//!     let _terminal = manager.terminal();
//!     // draw frames, then drop the manager to restore the shell
//!     Ok(())
//! }
//! ```

mod panic;
mod setup;

pub use panic::setup_panic_hook;

use std::io::{self, Stdout};

use color_eyre::Result;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use ratatui::{backend::CrosstermBackend, Terminal};

use setup::{enter_tui_mode, leave_tui_mode};

/// Drop guard that puts the terminal back into cooked mode exactly once.
struct TerminalGuard {
    cleaned_up: bool,
}

impl TerminalGuard {
    fn new() -> Self {
        Self { cleaned_up: false }
    }

    fn cleanup(&mut self) {
        if self.cleaned_up {
            return;
        }
        self.cleaned_up = true;

        leave_tui_mode(&mut io::stdout());
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        self.cleanup();
    }
}

/// Owns the ratatui terminal for the lifetime of the board session.
///
/// Construction enables raw mode and enters the alternate screen; dropping
/// the manager restores both even when the session ends by error.
pub struct TerminalManager {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    _guard: TerminalGuard,
}

impl TerminalManager {
    /// Enter raw mode and the alternate screen, then clear the frame.
    ///
    /// # Errors
    ///
    /// Returns an error if raw mode or the alternate screen cannot be
    /// enabled.
    pub fn new() -> Result<Self> {
        enable_raw_mode()?;

        let mut stdout = io::stdout();
        enter_tui_mode(&mut stdout)?;

        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;
        terminal.clear()?;

        Ok(Self {
            terminal,
            _guard: TerminalGuard::new(),
        })
    }

    /// Mutable handle for the event loop to draw with.
    pub fn terminal(&mut self) -> &mut Terminal<CrosstermBackend<Stdout>> {
        &mut self.terminal
    }

    /// Restore the terminal ahead of drop so `main` can surface errors.
    ///
    /// The guard's own cleanup still runs on drop and is harmless to
    /// repeat.
    ///
    /// # Errors
    ///
    /// Returns an error if raw mode cannot be disabled or the cursor
    /// cannot be shown.
    pub fn restore(&mut self) -> Result<()> {
        disable_raw_mode()?;
        leave_tui_mode(self.terminal.backend_mut());
        self.terminal.show_cursor()?;

        Ok(())
    }
}
