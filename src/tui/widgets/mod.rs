//! Reusable widgets for the TUI
//!
//! Contains custom widgets for common UI elements

pub mod field;
pub mod notification;

// Re-export commonly used widgets
pub use field::render_field;
pub use notification::{NotificationWidget, ToastStyle};
