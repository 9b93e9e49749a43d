//! Raw terminal entry and exit.
//!
//! These helpers own the crossterm incantations so the RAII types in the
//! parent module stay readable.

use std::io::{self, Write};

use crossterm::{
    cursor::Show,
    execute,
    terminal::{disable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};

/// Switch the writer to the alternate screen.
///
/// The user's scrollback is untouched and reappears once we leave.
///
/// # Errors
///
/// Returns an error if the escape sequence cannot be written.
pub fn enter_tui_mode<W: Write>(writer: &mut W) -> io::Result<()> {
    execute!(writer, EnterAlternateScreen)
}

/// Undo raw mode and the alternate screen, then show the cursor.
///
/// Ignores individual failures so it can run from a panic hook or a
/// `Drop` impl. Safe to call more than once.
pub fn leave_tui_mode<W: Write>(writer: &mut W) {
    // Raw mode first so the shell gets a working line discipline back
    let _ = disable_raw_mode();

    let _ = execute!(writer, LeaveAlternateScreen);
    let _ = writer.flush();

    let _ = execute!(writer, Show);
}

/// Best-effort restore straight to stdout.
///
/// Used by the panic hook, which has no handle on the backend writer.
pub fn emergency_restore() {
    let mut stdout = io::stdout();
    leave_tui_mode(&mut stdout);
}
