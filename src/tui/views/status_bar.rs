//! Status bar view
//!
//! Shows where entries are submitted and key hints

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::App;

/// Render the status bar
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let mut spans = vec![];

    if !app.destination.is_empty() {
        spans.push(Span::styled(" Outbox: ", Style::default().fg(Color::White)));
        spans.push(Span::styled(
            app.destination.clone(),
            Style::default().fg(Color::Cyan),
        ));
    }

    // Key hints (right-aligned)
    let hints = " ^N:Add  ^D:Remove  ^S:Submit  ^L:Clear  F1:Help  ^Q:Quit ";

    let left_len: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let padding_len = (area.width as usize).saturating_sub(left_len + hints.len());
    spans.push(Span::raw(" ".repeat(padding_len.max(1))));
    spans.push(Span::styled(hints, Style::default().fg(Color::White)));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
