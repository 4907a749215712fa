//! Layout components (form area, status bar)

use crate::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Widest the form is drawn, so it stays readable on large terminals
const MAX_FORM_WIDTH: u16 = 80;

/// Split the screen into a centred form area and the status bar line
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let content = chunks[0];
    let width = content.width.min(MAX_FORM_WIDTH);
    let form_area = Rect {
        x: content.x + (content.width - width) / 2,
        width,
        ..content
    };

    (form_area, chunks[1])
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![];

    // Provider configuration status
    match app.controller.config_error() {
        None => {
            spans.push(Span::styled(" ● ", Style::default().fg(Color::Green)));
            spans.push(Span::styled(
                "EmailJS configured",
                Style::default().fg(Color::Gray),
            ));
        }
        Some(err) => {
            spans.push(Span::styled(" ○ ", Style::default().fg(Color::Red)));
            spans.push(Span::styled(
                format!("EmailJS not configured: {err}"),
                Style::default().fg(Color::Red),
            ));
        }
    }

    if app.controller.is_sending() {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled("Sending...", Style::default().fg(Color::Yellow)));
    }

    let quit_hint = " ^C:quit ";

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);

    // Render quit hint on the right
    let hint_width = quit_hint.len() as u16;
    let quit_area = Rect {
        x: area.x + area.width.saturating_sub(hint_width),
        width: hint_width.min(area.width),
        ..area
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}
