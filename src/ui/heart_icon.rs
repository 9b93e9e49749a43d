//! Heart icon rendering.
//!
//! Maps a [`HeartIcon`] to a colored span. Resolution from raw ids goes
//! through [`HeartIcon::from_id`], so id 0 and out-of-range ids simply
//! render nothing.

use ratatui::style::Style;
use ratatui::text::Span;

use crate::models::HeartIcon;
use crate::ui::theme;

/// The glyph used for every heart.
pub const HEART_GLYPH: &str = "♥";

/// The fixed color for a heart icon.
pub fn color(icon: HeartIcon) -> ratatui::style::Color {
    match icon {
        HeartIcon::Yellow => theme::COLOR_HEART_YELLOW,
        HeartIcon::Blue => theme::COLOR_HEART_BLUE,
        HeartIcon::Green => theme::COLOR_HEART_GREEN,
        HeartIcon::Pink => theme::COLOR_HEART_PINK,
        HeartIcon::Red => theme::COLOR_HEART_RED,
    }
}

/// A colored heart span for a resolved icon.
pub fn span(icon: HeartIcon) -> Span<'static> {
    Span::styled(HEART_GLYPH, Style::default().fg(color(icon)))
}

/// A colored heart span for a raw heart id.
///
/// Returns `None` for id 0 and anything out of range; callers skip the
/// icon cell entirely in that case.
pub fn span_for_id(id: i64) -> Option<Span<'static>> {
    HeartIcon::from_id(id).map(span)
}
