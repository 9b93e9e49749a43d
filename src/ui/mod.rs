//! UI rendering for the Hearting TUI
//!
//! Implements the terminal interface with:
//! - Board screen: profile header, received message list, footer hints
//! - Heart test intro screen
//! - Heart guide overlay (centered dialog over the current screen)

mod board;
mod detail_overlay;
pub mod heart_icon;
mod theme;

// Re-export theme colors for external use
pub use theme::{
    COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_ERROR, COLOR_HEADER, COLOR_HEART_BLUE,
    COLOR_HEART_GREEN, COLOR_HEART_PINK, COLOR_HEART_RED, COLOR_HEART_YELLOW, COLOR_NOTICE,
    COLOR_SELECTED,
};

use ratatui::layout::Rect;
use ratatui::Frame;

use crate::app::{App, Screen};
use board::render_board;
use detail_overlay::render_heart_guide;

/// Render the UI based on current screen
pub fn render(frame: &mut Frame, app: &App) {
    match app.screen {
        Screen::Board => render_board(frame, app),
        Screen::TestIntro => {
            // Center the intro vertically
            let area = frame.area();
            let height = heart_test::calculate_height().min(area.height);
            let top = area.height.saturating_sub(height) / 2;
            let centered = Rect::new(area.x, area.y + top, area.width, height);
            heart_test::render(frame, centered);
        }
    }

    // Render heart guide overlay (if open)
    render_heart_guide(frame, app);
}
