//! Field rendering utilities for forms

use crate::state::{FieldValidity, FormField};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Border colour of an invalid field (#ff4444)
pub const INVALID_COLOR: Color = Color::Rgb(0xFF, 0x44, 0x44);
/// Border colour of a valid field (#4CAF50)
pub const VALID_COLOR: Color = Color::Rgb(0x4C, 0xAF, 0x50);

/// Border colour: validation outcome first, then focus
pub fn field_border_color(field: &FormField, is_active: bool) -> Color {
    match field.validity {
        FieldValidity::Invalid => INVALID_COLOR,
        FieldValidity::Valid => VALID_COLOR,
        FieldValidity::Unvalidated if is_active => Color::Cyan,
        FieldValidity::Unvalidated => Color::DarkGray,
    }
}

/// Horizontal scroll for a single-line input so its end (and the cursor)
/// stays inside a box `inner_width` columns wide
fn single_line_offset(content_width: usize, inner_width: u16) -> u16 {
    let overflow = content_width.saturating_sub(usize::from(inner_width));
    u16::try_from(overflow).unwrap_or(u16::MAX)
}

/// Draw a form field with its inline error line beneath the input box
pub fn draw_field(frame: &mut Frame, area: Rect, field: &FormField, is_active: bool) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),    // Input box
            Constraint::Length(1), // Error line
        ])
        .split(area);

    let text_style = if is_active {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::Gray)
    };

    let display_str = if field.value.is_empty() && !is_active {
        "(empty)"
    } else {
        field.value.as_str()
    };

    let cursor = if is_active { "▌" } else { "" };
    let cursor_style = Style::default().fg(Color::Cyan);

    let title_style = if is_active {
        Style::default().add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };

    let block = Block::default()
        .title(Span::styled(format!(" {} ", field.label), title_style))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(field_border_color(field, is_active)));

    let content = if field.is_multiline() {
        let mut lines: Vec<Line> = display_str
            .split('\n')
            .map(|l| Line::from(Span::styled(l.to_string(), text_style)))
            .collect();
        if is_active {
            if let Some(last) = lines.last_mut() {
                last.spans.push(Span::styled(cursor, cursor_style));
            }
        }
        Paragraph::new(lines).wrap(Wrap { trim: false })
    } else {
        let line = Line::from(vec![
            Span::styled(display_str, text_style),
            Span::styled(cursor, cursor_style),
        ]);
        let offset = single_line_offset(line.width(), chunks[0].width.saturating_sub(2));
        Paragraph::new(line).scroll((0, offset))
    };

    frame.render_widget(content.block(block), chunks[0]);

    if let Some(error) = &field.error_text {
        let error_line = Paragraph::new(Line::from(Span::styled(
            format!(" {error}"),
            Style::default().fg(INVALID_COLOR),
        )));
        frame.render_widget(error_line, chunks[1]);
    }
}
