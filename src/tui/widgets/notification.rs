//! Toast notification widget
//!
//! Draws the current notification in the corner of the screen.

use std::time::Instant;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

use crate::form::{Notification, NotificationType};

/// Colours and icons of a notification type
pub trait ToastStyle {
    /// Get the color for this notification type
    fn color(&self) -> Color;

    /// Get the icon/prefix for this notification type
    fn icon(&self) -> &'static str;
}

impl ToastStyle for NotificationType {
    fn color(&self) -> Color {
        match self {
            Self::Info => Color::Blue,
            Self::Success => Color::Green,
            Self::Warning => Color::Yellow,
            Self::Error => Color::Red,
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            Self::Info => "i",
            Self::Success => "+",
            Self::Warning => "!",
            Self::Error => "x",
        }
    }
}

/// Widget for rendering a notification
pub struct NotificationWidget<'a> {
    notification: &'a Notification,
    now: Instant,
}

impl<'a> NotificationWidget<'a> {
    /// Create a new notification widget
    pub fn new(notification: &'a Notification, now: Instant) -> Self {
        Self { notification, now }
    }
}

impl<'a> Widget for NotificationWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let kind = self.notification.notification_type;
        let color = kind.color();

        // Clear the area first
        Clear.render(area, buf);

        // Dim the border as the toast runs out
        let border = if self.notification.remaining_fraction(self.now) < 0.2 {
            Style::default().fg(color).add_modifier(Modifier::DIM)
        } else {
            Style::default().fg(color)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border)
            .title(format!(" {} {} ", kind.icon(), kind.title()))
            .title_style(Style::default().fg(color).add_modifier(Modifier::BOLD));

        let paragraph = Paragraph::new(self.notification.message.as_str())
            .style(Style::default().fg(Color::White))
            .wrap(Wrap { trim: true })
            .block(block);

        paragraph.render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::NotificationQueue;

    #[test]
    fn test_notification_types() {
        assert_eq!(NotificationType::Info.color(), Color::Blue);
        assert_eq!(NotificationType::Success.color(), Color::Green);
        assert_eq!(NotificationType::Warning.color(), Color::Yellow);
        assert_eq!(NotificationType::Error.color(), Color::Red);
        assert_eq!(NotificationType::Success.icon(), "+");
    }

    #[test]
    fn test_renders_title_and_message() {
        let now = Instant::now();
        let mut queue = NotificationQueue::default();
        queue.push("Form cleared", NotificationType::Info, now);

        let area = Rect::new(0, 0, 30, 4);
        let mut buf = Buffer::empty(area);
        NotificationWidget::new(queue.current().unwrap(), now).render(area, &mut buf);

        let text: String = (0..area.height)
            .flat_map(|y| (0..area.width).map(move |x| (x, y)))
            .map(|(x, y)| buf[(x, y)].symbol().to_string())
            .collect();
        assert!(text.contains("i Info"));
        assert!(text.contains("Form cleared"));
    }
}
