//! Event handler for the TUI
//!
//! Routes keyboard events to the form controller based on what is on screen:
//! an alert swallows the next key, then dialogs, then the focused control.

use std::time::Instant;

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::form::FocusTarget;
use crate::models::EntrySide;

use super::app::{ActiveDialog, App};
use super::event::Event;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event, now: Instant) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key, now),
        Event::Tick => {
            app.form.tick(now);
            Ok(())
        }
        Event::Submission { token, result } => {
            app.form.complete_submission(token, result, now);
            Ok(())
        }
        Event::Resize(_, _) => Ok(()),
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent, now: Instant) -> Result<()> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    // Quit works everywhere
    if ctrl && matches!(key.code, KeyCode::Char('q') | KeyCode::Char('c')) {
        app.quit();
        return Ok(());
    }

    // Any key acknowledges a blocking alert
    if app.form.alert().is_some() {
        app.form.dismiss_alert();
        return Ok(());
    }

    if app.has_dialog() {
        return handle_dialog_key(app, key);
    }

    if ctrl {
        return handle_control_key(app, key, now);
    }

    match key.code {
        KeyCode::Esc => {
            app.form.dismiss_notification();
            return Ok(());
        }
        KeyCode::F(1) => {
            app.open_dialog(ActiveDialog::Help);
            return Ok(());
        }
        _ => {}
    }

    if handle_suggestion_key(app, key) {
        return Ok(());
    }

    match key.code {
        KeyCode::Tab => app.form.focus_next(),
        KeyCode::BackTab => app.form.focus_prev(),
        KeyCode::Enter => {
            if let Some(submission) = app.form.advance_or_submit(now) {
                app.dispatch(submission, now);
            }
        }
        _ if app.form.focus().is_text() => handle_text_key(app, key),
        _ => handle_side_key(app, key),
    }

    Ok(())
}

/// Handle keys while a dialog is open
fn handle_dialog_key(app: &mut App, _key: KeyEvent) -> Result<()> {
    match app.active_dialog {
        ActiveDialog::Help => app.close_dialog(),
        ActiveDialog::None => {}
    }
    Ok(())
}

/// Handle Ctrl shortcuts
fn handle_control_key(app: &mut App, key: KeyEvent, now: Instant) -> Result<()> {
    match key.code {
        KeyCode::Char('n') => {
            app.form.add_row(now);
        }
        KeyCode::Char('s') => {
            if let Ok(submission) = app.form.submit(now) {
                app.dispatch(submission, now);
            }
        }
        KeyCode::Char('d') => {
            // A refused removal has already raised its alert
            let _ = app.form.remove_focused_row(now);
        }
        KeyCode::Char('l') => app.form.clear_form(now),
        _ => {}
    }
    Ok(())
}

/// Handle navigation inside the suggestion list; false if not consumed
fn handle_suggestion_key(app: &mut App, key: KeyEvent) -> bool {
    if app.form.suggestions().is_empty() {
        return false;
    }
    match key.code {
        KeyCode::Down => app.form.move_suggestion(true),
        KeyCode::Up => app.form.move_suggestion(false),
        KeyCode::Tab => app.form.accept_suggestion(),
        _ => false,
    }
}

/// Handle keys on a debit/credit selector
fn handle_side_key(app: &mut App, key: KeyEvent) {
    let FocusTarget::Side(id) = app.form.focus() else {
        return;
    };
    match key.code {
        KeyCode::Right | KeyCode::Char(' ') => app.form.cycle_focused_side(true),
        KeyCode::Left => app.form.cycle_focused_side(false),
        KeyCode::Char('d') | KeyCode::Char('D') => app.form.set_side(id, EntrySide::Debit),
        KeyCode::Char('c') | KeyCode::Char('C') => app.form.set_side(id, EntrySide::Credit),
        KeyCode::Char('?') => app.open_dialog(ActiveDialog::Help),
        _ => {}
    }
}

/// Handle editing keys in a text field
fn handle_text_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char(c) => app.form.insert_char(c),
        KeyCode::Backspace => app.form.edit_focused(|input| input.backspace()),
        KeyCode::Delete => app.form.edit_focused(|input| input.delete()),
        KeyCode::Left => app.form.edit_focused(|input| input.move_left()),
        KeyCode::Right => app.form.edit_focused(|input| input.move_right()),
        KeyCode::Home => app.form.edit_focused(|input| input.move_start()),
        KeyCode::End => app.form.edit_focused(|input| input.move_end()),
        _ => {}
    }
}
