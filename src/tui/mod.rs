//! Terminal User Interface module
//!
//! This module provides the interactive journal entry form using ratatui:
//! the form screen, its dialogs, and the event loop that feeds key presses,
//! ticks and submission responses to the form controller.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Dialogs
pub mod dialogs;

// Layout
pub mod layout;

// Keybindings
pub mod keybindings;

pub use app::App;
pub use terminal::run_tui;
