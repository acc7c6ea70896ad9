//! Alert dialog
//!
//! Blocking message for a refused action; any key dismisses it

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::form::FormError;
use crate::tui::layout::centered_rect_fixed;

/// Render an alert for a form error
pub fn render(frame: &mut Frame, error: &FormError) {
    let message = error.to_string();
    let height = message.lines().count() as u16 + 5;
    let area = centered_rect_fixed(52, height, frame.area());

    // Clear the background
    frame.render_widget(Clear, area);

    let color = match error {
        FormError::Unbalanced { .. } => Color::Red,
        _ => Color::Yellow,
    };

    let block = Block::default()
        .title(format!(" {} ", error.title()))
        .title_style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));

    let mut lines = vec![Line::from("")];
    lines.extend(
        message
            .lines()
            .map(|l| Line::from(Span::styled(l.to_string(), Style::default().fg(Color::White)))),
    );
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Press any key to continue",
        Style::default().fg(Color::DarkGray),
    )));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}
