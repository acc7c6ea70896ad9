//! Terminal setup and teardown
//!
//! This module handles initializing and restoring the terminal state,
//! including setting up the panic hook to restore the terminal on crash.

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::panic;
use std::path::PathBuf;
use std::time::Instant;

use crate::config::Settings;
use crate::form::{FormConfig, JournalForm};
use crate::submit::{OutboxSubmitter, SubmissionWorker};

use super::app::App;
use super::event::EventHandler;
use super::handler::handle_event;

/// Type alias for our terminal
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Initialize the terminal for TUI mode
pub fn init_terminal() -> Result<Tui> {
    // Set up panic hook to restore terminal on panic
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        // Restore terminal before printing panic info
        let _ = restore_terminal_impl();
        original_hook(panic_info);
    }));

    // Enable raw mode and enter alternate screen
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    // Create terminal
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;

    Ok(terminal)
}

/// Restore the terminal to its original state
pub fn restore_terminal() -> Result<()> {
    restore_terminal_impl()?;
    Ok(())
}

/// Internal implementation of terminal restoration
fn restore_terminal_impl() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

/// Run the TUI application, submitting entries to `outbox`
pub fn run_tui(settings: &Settings, outbox: PathBuf) -> Result<()> {
    let events = EventHandler::default();

    let destination = outbox.display().to_string();
    let worker = SubmissionWorker::spawn(OutboxSubmitter::new(outbox), events.sender());

    let form = JournalForm::new(FormConfig::from(settings), Instant::now());
    let mut app = App::new(form).with_worker(worker, destination);

    log::info!("starting journal form");

    // Initialize terminal
    let mut terminal = init_terminal()?;

    let result = run_loop(&mut terminal, &mut app, &events);

    // Restore terminal even if the loop failed
    restore_terminal()?;
    log::info!("journal form closed");

    result
}

/// Main event loop
fn run_loop(terminal: &mut Tui, app: &mut App, events: &EventHandler) -> Result<()> {
    loop {
        // Render
        terminal.draw(|frame| {
            super::views::render(frame, app, Instant::now());
        })?;

        // Handle events
        let event = events.next()?;
        handle_event(app, event, Instant::now())?;

        // Check if we should quit
        if app.should_quit {
            return Ok(());
        }
    }
}
