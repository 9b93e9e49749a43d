//! Panic hook that returns the terminal to cooked mode.

use std::panic;

use super::setup::emergency_restore;

/// Chain a terminal-restoring hook in front of the default panic handler.
///
/// Must run before raw mode is entered so a panic during startup still
/// leaves the shell usable. The default hook prints the panic message
/// after the terminal has been restored.
pub fn setup_panic_hook() {
    let default_hook = panic::take_hook();

    panic::set_hook(Box::new(move |info| {
        emergency_restore();
        default_hook(info);
    }));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hook_installs_cleanly() {
        setup_panic_hook();

        // Put the default hook back so other tests see normal panics
        let _ = panic::take_hook();
    }
}
