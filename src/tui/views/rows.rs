//! Account rows view
//!
//! One line per row: number, account name, debit/credit selector and amount.
//! New rows are highlighted briefly and removed rows fade out in place.

use std::time::Instant;

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::form::{AccountRow, FocusTarget};
use crate::models::EntrySide;
use crate::tui::app::App;
use crate::tui::widgets::field::value_spans;

const NAME_WIDTH: usize = 30;
const SIDE_WIDTH: usize = 14;

/// Render the rows block and the suggestion dropdown
pub fn render(frame: &mut Frame, app: &App, area: Rect, now: Instant) {
    let form = &app.form;
    let block = Block::default()
        .title(format!(" Accounts ({}) ", form.rows().len()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::White));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = Vec::new();
    let mut focused_line = 0;

    for (index, row) in form.rows().iter().enumerate() {
        // Removed rows are drawn where they used to be
        for ghost in form.departing().iter().filter(|d| d.index == index) {
            lines.push(departing_line(&ghost.row));
        }
        if form.focus().row() == Some(row.id) {
            focused_line = lines.len();
        }
        lines.push(row_line(index + 1, row, form.focus(), now));
    }
    for ghost in form
        .departing()
        .iter()
        .filter(|d| d.index >= form.rows().len())
    {
        lines.push(departing_line(&ghost.row));
    }

    // Keep the focused row on screen
    let height = inner.height.max(1) as usize;
    let offset = focused_line.saturating_sub(height - 1);

    frame.render_widget(Paragraph::new(lines).scroll((offset as u16, 0)), inner);

    let suggestions = form.suggestions();
    if !suggestions.is_empty() {
        let row_y = inner.y + (focused_line - offset) as u16;
        render_suggestions(frame, app, &suggestions, inner, row_y);
    }
}

/// Spans padded with spaces to `width` characters
fn padded(mut spans: Vec<Span<'static>>, width: usize) -> Vec<Span<'static>> {
    let used: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    if used < width {
        spans.push(Span::raw(" ".repeat(width - used)));
    }
    spans
}

fn side_style(side: EntrySide, focused: bool) -> Style {
    let base = match side {
        EntrySide::Debit => Style::default().fg(Color::Green),
        EntrySide::Credit => Style::default().fg(Color::Red),
        EntrySide::Unset => Style::default().fg(Color::DarkGray),
    };
    if focused {
        base.bg(Color::DarkGray).add_modifier(Modifier::BOLD)
    } else {
        base
    }
}

fn row_line(number: usize, row: &AccountRow, focus: FocusTarget, now: Instant) -> Line<'static> {
    let number_style = if row.is_entering(now) {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    } else if focus.row() == Some(row.id) {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let mut spans = vec![Span::styled(format!("{:>3}. ", number), number_style)];
    spans.extend(padded(
        value_spans(&row.name, focus == FocusTarget::Name(row.id)),
        NAME_WIDTH,
    ));
    spans.push(Span::raw(" "));

    let side_focused = focus == FocusTarget::Side(row.id);
    let arrows = if side_focused { ("◂", "▸") } else { (" ", " ") };
    spans.push(Span::styled(
        format!("{}{:^width$}{}", arrows.0, row.side.to_string(), arrows.1, width = SIDE_WIDTH - 2),
        side_style(row.side, side_focused),
    ));
    spans.push(Span::raw(" "));
    spans.extend(value_spans(&row.amount, focus == FocusTarget::Amount(row.id)));

    Line::from(spans)
}

fn departing_line(row: &AccountRow) -> Line<'static> {
    let style = Style::default()
        .fg(Color::Red)
        .add_modifier(Modifier::CROSSED_OUT | Modifier::DIM);
    Line::from(vec![
        Span::styled("   - ", style),
        Span::styled(format!("{:<width$}", row.name.value(), width = NAME_WIDTH), style),
        Span::styled(format!(" {:^width$} ", row.side.to_string(), width = SIDE_WIDTH), style),
        Span::styled(row.amount.value().to_string(), style),
    ])
}

fn render_suggestions(frame: &mut Frame, app: &App, suggestions: &[&str], inner: Rect, row_y: u16) {
    let height = suggestions.len() as u16 + 2;
    let below = row_y.saturating_add(1);
    let y = if below.saturating_add(height) <= inner.bottom() {
        below
    } else {
        row_y.saturating_sub(height).max(inner.y)
    };
    let area = Rect::new(
        inner.x.saturating_add(5),
        y,
        (NAME_WIDTH as u16 + 2).min(inner.width.saturating_sub(5)),
        height.min(inner.height),
    )
    .intersection(inner);
    if area.is_empty() {
        return;
    }

    frame.render_widget(Clear, area);

    let items: Vec<ListItem> = suggestions.iter().map(|s| ListItem::new(*s)).collect();
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow)),
        )
        .highlight_style(Style::default().fg(Color::Black).bg(Color::Yellow));

    let mut state = ListState::default();
    state.select(Some(app.form.suggestion_index()));
    frame.render_stateful_widget(list, area, &mut state);
}
