//! Totals panel
//!
//! Debit and credit totals, the difference and the balance indicator, plus
//! the submit control.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::form::BalanceStatus;
use crate::tui::app::App;

/// Render the totals panel
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let totals = app.form.totals();
    let currency = &app.form.config().currency_symbol;

    let (indicator, indicator_style, border) = match totals.status() {
        BalanceStatus::Balanced => (
            "✓ Balanced",
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            Color::Green,
        ),
        BalanceStatus::Unbalanced => (
            "✗ Not Balanced",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            Color::Red,
        ),
    };

    let block = Block::default()
        .title(" Totals ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border));

    let amount = |label: &'static str, value: String| {
        vec![
            Span::styled(label, Style::default().fg(Color::White)),
            Span::styled(value, Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
            Span::raw("   "),
        ]
    };

    let mut figures = amount("Total Debit: ", totals.debit.format_with_symbol(currency));
    figures.extend(amount("Total Credit: ", totals.credit.format_with_symbol(currency)));
    figures.extend(amount("Difference: ", totals.difference().format_with_symbol(currency)));

    let submit = if app.form.is_submitting() {
        Span::styled(
            "[ Submitting... ]",
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
        )
    } else {
        Span::styled(
            "[ Submit: Ctrl+S ]",
            Style::default().fg(Color::Black).bg(Color::Green),
        )
    };

    let lines = vec![
        Line::from(figures),
        Line::from(vec![
            Span::styled(indicator, indicator_style),
            Span::raw("   "),
            submit,
        ]),
    ];

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
