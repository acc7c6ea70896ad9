//! Single-line text field rendering
//!
//! Draws a [`TextInput`] with its label, placeholder and a block cursor when
//! focused.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::form::TextInput;

/// Spans for a field value, with the cursor drawn when focused
pub fn value_spans(input: &TextInput, focused: bool) -> Vec<Span<'static>> {
    let value = input.value();

    if !focused {
        return if value.is_empty() {
            vec![Span::styled(
                input.placeholder.clone(),
                Style::default().fg(Color::DarkGray),
            )]
        } else {
            vec![Span::styled(value.to_string(), Style::default().fg(Color::Yellow))]
        };
    }

    let value_style = Style::default().fg(Color::White);
    let split = value
        .char_indices()
        .nth(input.cursor())
        .map(|(i, _)| i)
        .unwrap_or(value.len());
    let (before, after) = value.split_at(split);

    let mut spans = vec![Span::styled(before.to_string(), value_style)];

    // Cursor character
    let mut rest = after.chars();
    let cursor_char = rest.next().unwrap_or(' ');
    spans.push(Span::styled(
        cursor_char.to_string(),
        Style::default().fg(Color::Black).bg(Color::Cyan),
    ));

    // Rest after cursor
    let rest = rest.as_str();
    if !rest.is_empty() {
        spans.push(Span::styled(rest.to_string(), value_style));
    }

    spans
}

/// Render a labelled form field on one line
pub fn render_field(frame: &mut Frame, area: Rect, label: &str, input: &TextInput, focused: bool) {
    let label_style = if focused {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Cyan)
    };

    let mut spans = vec![Span::styled(format!("{:>10}: ", label), label_style)];
    spans.extend(value_spans(input, focused));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(spans: &[Span]) -> String {
        spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_placeholder_when_empty_and_unfocused() {
        let input = TextInput::new().placeholder("Amount...");
        assert_eq!(text(&value_spans(&input, false)), "Amount...");
    }

    #[test]
    fn test_cursor_inside_value() {
        let mut input = TextInput::new();
        input.set("₹12");
        input.move_left();
        let spans = value_spans(&input, true);
        assert_eq!(spans.len(), 2);
        assert_eq!(spans[0].content, "₹1");
        assert_eq!(spans[1].content, "2");
    }

    #[test]
    fn test_cursor_at_end_is_blank_cell() {
        let mut input = TextInput::new();
        input.set("Cash");
        let spans = value_spans(&input, true);
        assert_eq!(text(&spans), "Cash ");
    }
}
