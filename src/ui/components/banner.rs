//! Submission outcome banner

use crate::state::{Banner, BannerKind, BannerPhase};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Banner height in rows
pub const BANNER_HEIGHT: u16 = 3;

const SUCCESS_RGB: (u8, u8, u8) = (0x4C, 0xAF, 0x50);
const ERROR_RGB: (u8, u8, u8) = (0xFF, 0x44, 0x44);

/// Background colour for a banner, darkened towards black while fading
pub fn banner_background(kind: BannerKind, phase: BannerPhase) -> Color {
    let (r, g, b) = match kind {
        BannerKind::Success => SUCCESS_RGB,
        BannerKind::Error => ERROR_RGB,
    };
    let opacity = match phase {
        BannerPhase::Visible => 1.0,
        BannerPhase::Fading(opacity) => opacity.clamp(0.0, 1.0),
        BannerPhase::Expired => 0.0,
    };
    let scale = |c: u8| (c as f32 * opacity).round() as u8;
    Color::Rgb(scale(r), scale(g), scale(b))
}

/// Render the banner unless it has already expired
pub fn render_banner(frame: &mut Frame, area: Rect, banner: &Banner) {
    let phase = banner.phase();
    if phase == BannerPhase::Expired {
        return;
    }

    let background = banner_background(banner.kind, phase);
    let style = Style::default()
        .bg(background)
        .fg(Color::White)
        .add_modifier(Modifier::BOLD);

    let paragraph = Paragraph::new(format!("{} {}", banner.icon(), banner.text))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .style(style)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(background)),
        );

    frame.render_widget(Clear, area);
    frame.render_widget(paragraph, area);
}
