//! Contact form rendering

use super::field_renderer::draw_field;
use crate::controller::FormController;
use crate::state::{FieldKind, Form};
use crate::ui::components::{render_banner, render_button, BANNER_HEIGHT, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Width of the submit button
const SUBMIT_WIDTH: u16 = 20;

/// Draw the contact form: fields, submit button, banner and help line
pub fn draw_contact_form(frame: &mut Frame, area: Rect, controller: &FormController) {
    let block = Block::default()
        .title(" Contact Us ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Name + error line
            Constraint::Length(4), // Email + error line
            Constraint::Min(7), // Message + error line
            Constraint::Length(BUTTON_HEIGHT), // Submit
            Constraint::Length(BANNER_HEIGHT), // Banner
            Constraint::Length(1), // Help text
        ])
        .margin(1)
        .split(area);

    let form = &controller.form;
    for (index, chunk) in chunks.iter().take(FieldKind::ALL.len()).enumerate() {
        if let Some(field) = form.get_field(index) {
            draw_field(frame, *chunk, field, form.active_field() == index);
        }
    }

    let button_row = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(SUBMIT_WIDTH), Constraint::Min(0)])
        .split(chunks[3]);
    render_button(
        frame,
        button_row[0],
        controller.submit_state.label(),
        form.is_submit_active(),
        controller.submit_state.is_enabled(),
    );

    if let Some(banner) = &controller.banner {
        render_banner(frame, chunks[4], banner);
    }

    draw_help_text(frame, chunks[5], form.active_kind());
}

/// Draw key hints for the focused element
fn draw_help_text(frame: &mut Frame, area: Rect, active: Option<FieldKind>) {
    let key_style = Style::default().fg(Color::Cyan);
    let mut spans = vec![
        Span::styled("Tab", key_style),
        Span::raw(": next field  "),
        Span::styled(crate::platform::SUBMIT_SHORTCUT, key_style),
        Span::raw(": send  "),
    ];

    match active {
        Some(kind) if kind.is_multiline() => {
            spans.push(Span::styled(crate::platform::NEWLINE_KEY, key_style));
            spans.push(Span::raw(": new line  "));
        }
        None => {
            spans.push(Span::styled("Enter", key_style));
            spans.push(Span::raw(": send  "));
        }
        Some(_) => {}
    }

    spans.push(Span::styled("Esc", key_style));
    spans.push(Span::raw(": quit"));

    let help = Paragraph::new(Line::from(spans)).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, area);
}
