//! Error notice overlay
//!
//! A blocking modal shown when a fetch fails. The dashboard behind it keeps
//! whatever was rendered before.

use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use twweather::state::Notice;

use super::centered_rect;

/// Renders the notice on top of the current view
pub fn render(frame: &mut Frame, notice: &Notice) {
    let overlay_area = centered_rect(50, 7, frame.area());
    frame.render_widget(Clear, overlay_area);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            notice.message.clone(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Press Enter to continue",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let block = Block::default()
        .title(" ⚠ ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    frame.render_widget(paragraph, overlay_area);
}
