//! Entry header view
//!
//! Date and narration fields above the account rows.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders},
    Frame,
};

use crate::form::FocusTarget;
use crate::tui::app::App;
use crate::tui::widgets::render_field;

/// Render the header block
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Journal Entry ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(inner);

    let focus = app.form.focus();
    render_field(
        frame,
        chunks[0],
        "Date",
        app.form.date(),
        focus == FocusTarget::Date,
    );
    render_field(
        frame,
        chunks[1],
        "Narration",
        app.form.narration(),
        focus == FocusTarget::Narration,
    );
}
