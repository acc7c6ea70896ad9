//! Transient notifications
//!
//! Toast messages posted by the form. Each one expires after its duration or
//! when dismissed; neither touches form state.

use std::time::{Duration, Instant};

/// Default lifetime of a notification
pub const DEFAULT_NOTIFICATION_DURATION: Duration = Duration::from_secs(5);

/// Type of notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationType {
    /// Informational message
    Info,
    /// Success message
    Success,
    /// Warning message
    Warning,
    /// Error message
    Error,
}

impl NotificationType {
    /// Get the title for this notification type
    pub fn title(&self) -> &'static str {
        match self {
            Self::Info => "Info",
            Self::Success => "Success",
            Self::Warning => "Warning",
            Self::Error => "Error",
        }
    }
}

/// A toast notification
#[derive(Debug, Clone)]
pub struct Notification {
    /// Queue-assigned identifier
    pub id: u64,
    /// The notification message
    pub message: String,
    /// Type of notification
    pub notification_type: NotificationType,
    /// Time when notification was created (for auto-dismiss)
    pub created_at: Instant,
    /// How long to display it
    pub duration: Duration,
}

impl Notification {
    /// Check if the notification has expired
    pub fn is_expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.created_at) >= self.duration
    }

    /// Get remaining time as a fraction (0.0 to 1.0)
    pub fn remaining_fraction(&self, now: Instant) -> f64 {
        let elapsed = now.saturating_duration_since(self.created_at).as_secs_f64();
        let total = self.duration.as_secs_f64();
        if total == 0.0 {
            return 0.0;
        }
        (1.0 - elapsed / total).clamp(0.0, 1.0)
    }
}

/// A queue of notifications to display
#[derive(Debug)]
pub struct NotificationQueue {
    notifications: Vec<Notification>,
    next_id: u64,
    duration: Duration,
}

impl Default for NotificationQueue {
    fn default() -> Self {
        Self::new(DEFAULT_NOTIFICATION_DURATION)
    }
}

impl NotificationQueue {
    /// Create a queue whose notifications live for `duration`
    pub fn new(duration: Duration) -> Self {
        Self {
            notifications: Vec::new(),
            next_id: 0,
            duration,
        }
    }

    /// Post a notification and return its id
    pub fn push(
        &mut self,
        message: impl Into<String>,
        notification_type: NotificationType,
        now: Instant,
    ) -> u64 {
        self.next_id += 1;
        self.notifications.push(Notification {
            id: self.next_id,
            message: message.into(),
            notification_type,
            created_at: now,
            duration: self.duration,
        });
        self.next_id
    }

    /// Remove expired notifications
    pub fn remove_expired(&mut self, now: Instant) {
        self.notifications.retain(|n| !n.is_expired(now));
    }

    /// Dismiss a notification by id; returns false if it was already gone
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.notifications.len();
        self.notifications.retain(|n| n.id != id);
        self.notifications.len() != before
    }

    /// Get the current notification to display (if any)
    pub fn current(&self) -> Option<&Notification> {
        self.notifications.first()
    }

    /// All queued notifications, oldest first
    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.notifications.iter()
    }

    /// Check if there are any notifications
    pub fn is_empty(&self) -> bool {
        self.notifications.is_empty()
    }

    /// Get the number of notifications
    pub fn len(&self) -> usize {
        self.notifications.len()
    }

    /// Clear all notifications
    pub fn clear(&mut self) {
        self.notifications.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queue_order() {
        let now = Instant::now();
        let mut queue = NotificationQueue::default();
        assert!(queue.is_empty());

        queue.push("First", NotificationType::Info, now);
        queue.push("Second", NotificationType::Success, now);

        assert_eq!(queue.len(), 2);
        assert_eq!(queue.current().unwrap().message, "First");
    }

    #[test]
    fn test_auto_dismiss_after_five_seconds() {
        let now = Instant::now();
        let mut queue = NotificationQueue::default();
        queue.push("Form cleared", NotificationType::Info, now);

        queue.remove_expired(now + Duration::from_millis(4999));
        assert_eq!(queue.len(), 1);

        queue.remove_expired(now + Duration::from_secs(5));
        assert!(queue.is_empty());
    }

    #[test]
    fn test_explicit_dismiss() {
        let now = Instant::now();
        let mut queue = NotificationQueue::default();
        let id = queue.push("Oops", NotificationType::Error, now);
        assert!(queue.dismiss(id));
        assert!(!queue.dismiss(id));
        assert!(queue.current().is_none());
    }

    #[test]
    fn test_remaining_fraction() {
        let now = Instant::now();
        let mut queue = NotificationQueue::new(Duration::from_secs(4));
        queue.push("x", NotificationType::Warning, now);
        let n = queue.current().unwrap();
        assert_eq!(n.remaining_fraction(now), 1.0);
        assert_eq!(n.remaining_fraction(now + Duration::from_secs(2)), 0.5);
        assert_eq!(n.remaining_fraction(now + Duration::from_secs(9)), 0.0);
        assert_eq!(n.notification_type.title(), "Warning");
    }
}
