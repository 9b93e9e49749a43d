//! Heart guide overlay rendering.
//!
//! A centered card over the board showing the detail record for one heart.
//! When the overlay is open without a record, a placeholder card is shown
//! instead of stale content.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

use crate::app::App;
use crate::models::HeartIcon;

use super::heart_icon;
use super::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_HEADER, COLOR_NOTICE};

const DIALOG_WIDTH: u16 = 44;

/// Render the heart guide dialog as a centered overlay
pub fn render_heart_guide(frame: &mut Frame, app: &App) {
    if !app.guide.is_detail_open() {
        return;
    }

    let area = frame.area();

    let mut lines: Vec<Line> = Vec::new();
    lines.push(Line::from("")); // Top padding

    match app.guide.heart_detail() {
        Some(detail) => {
            let mut name_spans = Vec::new();
            if let Some(icon) = HeartIcon::from_id(detail.heart_id) {
                name_spans.push(heart_icon::span(icon));
                name_spans.push(Span::raw(" "));
            }
            name_spans.push(Span::styled(
                detail.name.clone(),
                Style::default()
                    .fg(COLOR_HEADER)
                    .add_modifier(Modifier::BOLD),
            ));
            lines.push(Line::from(name_spans));
            lines.push(Line::from(Span::styled(
                format!("{} heart", detail.kind),
                Style::default().fg(COLOR_DIM),
            )));
            lines.push(Line::from(""));
            lines.push(Line::from(detail.short_description.clone()));
            if detail.is_locked {
                lines.push(Line::from(""));
                lines.push(Line::from(Span::styled(
                    "Sign in to unlock this heart.",
                    Style::default().fg(COLOR_NOTICE),
                )));
            }
        }
        None => {
            lines.push(Line::from(Span::styled(
                "No guide entry for this heart.",
                Style::default().fg(COLOR_DIM),
            )));
        }
    }

    lines.push(Line::from("")); // Bottom padding
    lines.push(Line::from(vec![
        Span::styled("Esc", Style::default().fg(COLOR_ACCENT)),
        Span::styled(": close", Style::default().fg(COLOR_DIM)),
    ]));

    // Height: content + borders
    let dialog_width = DIALOG_WIDTH.min(area.width.saturating_sub(4));
    let dialog_height = (lines.len() as u16 + 2).min(area.height.saturating_sub(2));

    let x = (area.width.saturating_sub(dialog_width)) / 2;
    let y = (area.height.saturating_sub(dialog_height)) / 2;

    let dialog_area = Rect {
        x,
        y,
        width: dialog_width,
        height: dialog_height,
    };

    // Clear the background behind the dialog
    frame.render_widget(Clear, dialog_area);

    let block = Block::default()
        .title(Span::styled(
            " Heart Guide ",
            Style::default()
                .fg(COLOR_HEADER)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER));

    let inner = Rect {
        x: dialog_area.x + 2,
        y: dialog_area.y + 1,
        width: dialog_area.width.saturating_sub(4),
        height: dialog_area.height.saturating_sub(2),
    };

    frame.render_widget(block, dialog_area);
    frame.render_widget(Paragraph::new(lines), inner);
}
