//! TUI Views module
//!
//! The single form screen: header, account rows, totals and status bar, with
//! alerts, the help dialog and the current toast drawn on top.

pub mod header;
pub mod rows;
pub mod status_bar;
pub mod totals;

use std::time::Instant;

use ratatui::Frame;

use super::app::{ActiveDialog, App};
use super::dialogs;
use super::layout::{toast_rect, FormLayout};
use super::widgets::NotificationWidget;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &App, now: Instant) {
    let layout = FormLayout::new(frame.area());

    header::render(frame, app, layout.header);
    rows::render(frame, app, layout.rows, now);
    totals::render(frame, app, layout.totals);
    status_bar::render(frame, app, layout.status_bar);

    if let Some(notification) = app.form.notifications().current() {
        let area = toast_rect(40, 4, frame.area());
        frame.render_widget(NotificationWidget::new(notification, now), area);
    }

    match app.active_dialog {
        ActiveDialog::Help => dialogs::help::render(frame),
        ActiveDialog::None => {}
    }

    // Alerts block everything else
    if let Some(alert) = app.form.alert() {
        dialogs::alert::render(frame, alert);
    }
}
