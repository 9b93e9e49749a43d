//! Color theme constants for the Hearting UI
//!
//! Defines the minimal dark palette plus the fixed per-heart colors.

use ratatui::style::Color;

// ============================================================================
// Minimal Dark Color Theme
// ============================================================================

/// Primary border color - dark gray for minimal aesthetic
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Accent color - white for highlights and important elements
pub const COLOR_ACCENT: Color = Color::White;

/// Header text color - white for titles
pub const COLOR_HEADER: Color = Color::White;

/// Dim text for less important info
pub const COLOR_DIM: Color = Color::DarkGray;

/// Selected list row highlight
pub const COLOR_SELECTED: Color = Color::Cyan;

/// Status line notices
pub const COLOR_NOTICE: Color = Color::Yellow;

/// Error notices
pub const COLOR_ERROR: Color = Color::Red;

// ============================================================================
// Heart Colors
// ============================================================================
//
// One fixed color per default heart id. Pink matches the web app's
// rgb(251, 139, 176).

/// Yellow heart (id 1)
pub const COLOR_HEART_YELLOW: Color = Color::Yellow;

/// Blue heart (id 2)
pub const COLOR_HEART_BLUE: Color = Color::Blue;

/// Green heart (id 3)
pub const COLOR_HEART_GREEN: Color = Color::Green;

/// Pink heart (id 4)
pub const COLOR_HEART_PINK: Color = Color::Rgb(251, 139, 176);

/// Red heart (id 5)
pub const COLOR_HEART_RED: Color = Color::Red;
