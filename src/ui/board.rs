//! Heart board screen rendering.
//!
//! Layout: profile header, received message list (or the reading pane when a
//! message is open), and a footer with the notice line and keybind hints.

use chrono::{Duration, Local, NaiveDateTime};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::models::ReceivedMessage;

use super::heart_icon;
use super::theme::{
    COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_ERROR, COLOR_HEADER, COLOR_NOTICE, COLOR_SELECTED,
};

/// Render the heart board screen
pub fn render_board(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let block = Block::default()
        .title(Span::styled(
            " hearting ",
            Style::default()
                .fg(COLOR_HEADER)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Profile header (2 lines + divider)
            Constraint::Min(3),    // Message list or reading pane
            Constraint::Length(2), // Notice line + keybind hints
        ])
        .split(inner);

    render_profile_header(frame, chunks[0], app);
    if app.open_message.is_some() {
        render_reading_pane(frame, chunks[1], app);
    } else {
        render_message_list(frame, chunks[1], app);
    }
    render_footer(frame, chunks[2], app);
}

fn render_profile_header(frame: &mut Frame, area: Rect, app: &App) {
    let mut lines: Vec<Line> = Vec::new();

    match &app.profile {
        Some(profile) => {
            lines.push(Line::from(vec![
                Span::styled(
                    profile.nickname.clone(),
                    Style::default()
                        .fg(COLOR_HEADER)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw("  "),
                Span::styled(
                    format!("{} hearts received", profile.message_total),
                    Style::default().fg(COLOR_DIM),
                ),
            ]));
            match &profile.status_message {
                Some(status) => lines.push(Line::from(Span::styled(
                    status.clone(),
                    Style::default().fg(COLOR_ACCENT),
                ))),
                None => lines.push(Line::from(Span::styled(
                    "No status message yet",
                    Style::default().fg(COLOR_DIM),
                ))),
            }
        }
        None => {
            let text = if app.loading {
                "Loading profile..."
            } else {
                "Profile unavailable"
            };
            lines.push(Line::from(Span::styled(
                text,
                Style::default().fg(COLOR_DIM),
            )));
        }
    }

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(COLOR_BORDER)),
    );
    frame.render_widget(paragraph, area);
}

fn render_message_list(frame: &mut Frame, area: Rect, app: &App) {
    if !app.signed_in {
        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                "Viewing this board as a guest.",
                Style::default().fg(COLOR_DIM),
            )),
            Line::from(Span::styled(
                "Run 'hearting login' to read your own messages.",
                Style::default().fg(COLOR_DIM),
            )),
        ];
        frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
        return;
    }

    if app.messages.is_empty() {
        let text = if app.loading {
            "Loading messages..."
        } else {
            "No hearts yet. Share your board to receive some."
        };
        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(text, Style::default().fg(COLOR_DIM))),
        ];
        frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
        return;
    }

    let now = Local::now().naive_local();
    let max_title_width = (area.width as usize).saturating_sub(28);

    let lines: Vec<Line> = app
        .messages
        .iter()
        .enumerate()
        .map(|(idx, message)| message_row(message, idx == app.selected, now, max_title_width))
        .collect();

    frame.render_widget(Paragraph::new(lines), area);
}

/// Build one list row: marker, heart, title, sender, unread dot, countdown.
fn message_row(
    message: &ReceivedMessage,
    is_selected: bool,
    now: NaiveDateTime,
    max_title_width: usize,
) -> Line<'static> {
    let marker = if is_selected { "▶ " } else { "  " };
    let marker_style = if is_selected {
        Style::default()
            .fg(COLOR_SELECTED)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(COLOR_DIM)
    };

    let heart = heart_icon::span_for_id(message.heart_id)
        .unwrap_or_else(|| Span::styled("·", Style::default().fg(COLOR_DIM)));

    let title_style = if is_selected {
        Style::default()
            .fg(COLOR_HEADER)
            .add_modifier(Modifier::BOLD)
    } else if message.is_read {
        Style::default().fg(COLOR_DIM)
    } else {
        Style::default()
    };

    let sender = message
        .sender_nickname
        .clone()
        .unwrap_or_else(|| "anonymous".to_string());

    let mut spans = vec![
        Span::styled(marker, marker_style),
        heart,
        Span::raw(" "),
        Span::styled(truncate(&message.title, max_title_width), title_style),
        Span::raw("  "),
        Span::styled(format!("from {}", sender), Style::default().fg(COLOR_DIM)),
    ];

    if !message.is_read {
        spans.push(Span::raw(" "));
        spans.push(Span::styled("●", Style::default().fg(COLOR_ACCENT)));
    }

    if let Some(left) = message.expires_in(now) {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            format_time_left(left),
            Style::default().fg(COLOR_DIM),
        ));
    } else if message.is_expired(now) {
        spans.push(Span::raw("  "));
        spans.push(Span::styled("expired", Style::default().fg(COLOR_ERROR)));
    }

    Line::from(spans)
}

fn render_reading_pane(frame: &mut Frame, area: Rect, app: &App) {
    let Some(message) = &app.open_message else {
        return;
    };

    let mut lines: Vec<Line> = Vec::new();

    let mut title_spans = Vec::new();
    if let Some(heart) = heart_icon::span_for_id(message.heart_id) {
        title_spans.push(heart);
        title_spans.push(Span::raw(" "));
    }
    title_spans.push(Span::styled(
        message.title.clone(),
        Style::default()
            .fg(COLOR_HEADER)
            .add_modifier(Modifier::BOLD),
    ));
    lines.push(Line::from(title_spans));

    let sender = message
        .sender_nickname
        .clone()
        .unwrap_or_else(|| "anonymous".to_string());
    let mut meta = format!("from {}", sender);
    if let Some(created) = message.created_date {
        meta.push_str(&format!("  {}", created.format("%Y-%m-%d %H:%M")));
    }
    lines.push(Line::from(Span::styled(
        meta,
        Style::default().fg(COLOR_DIM),
    )));
    lines.push(Line::from(""));

    match &message.content {
        Some(content) => {
            for text_line in content.lines() {
                lines.push(Line::from(text_line.to_string()));
            }
        }
        None => lines.push(Line::from(Span::styled(
            "(no content)",
            Style::default().fg(COLOR_DIM),
        ))),
    }

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

fn render_footer(frame: &mut Frame, area: Rect, app: &App) {
    let mut lines: Vec<Line> = Vec::new();

    if let Some(error) = &app.last_error {
        lines.push(Line::from(Span::styled(
            error.clone(),
            Style::default().fg(COLOR_ERROR),
        )));
    } else if let Some(notice) = &app.notice {
        lines.push(Line::from(Span::styled(
            notice.clone(),
            Style::default().fg(COLOR_NOTICE),
        )));
    } else {
        lines.push(Line::from(""));
    }

    lines.push(hint_line(app));
    frame.render_widget(Paragraph::new(lines), area);
}

fn hint_line(app: &App) -> Line<'static> {
    let hints: &[(&str, &str)] = if app.open_message.is_some() {
        &[("Esc", "back"), ("i", "heart guide"), ("q", "quit")]
    } else if app.signed_in {
        &[
            ("j/k", "move"),
            ("Enter", "read"),
            ("i", "heart guide"),
            ("r", "refresh"),
            ("t", "heart test"),
            ("q", "quit"),
        ]
    } else {
        &[("r", "refresh"), ("t", "heart test"), ("q", "quit")]
    };

    let mut spans = Vec::new();
    for (idx, (key, action)) in hints.iter().enumerate() {
        if idx > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(
            key.to_string(),
            Style::default().fg(COLOR_ACCENT),
        ));
        spans.push(Span::styled(
            format!(": {}", action),
            Style::default().fg(COLOR_DIM),
        ));
    }
    Line::from(spans)
}

fn format_time_left(left: Duration) -> String {
    let hours = left.num_hours();
    if hours >= 1 {
        format!("{}h left", hours)
    } else {
        format!("{}m left", left.num_minutes().max(1))
    }
}

fn truncate(text: &str, max_width: usize) -> String {
    if max_width == 0 {
        return String::new();
    }
    if text.chars().count() <= max_width {
        return text.to_string();
    }
    let cut: String = text.chars().take(max_width.saturating_sub(3)).collect();
    format!("{}...", cut)
}
