//! Type definitions for the application state.

/// Represents which screen is currently active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    /// Heart board: profile header plus the received message list
    #[default]
    Board,
    /// Heart test introduction screen
    TestIntro,
}
