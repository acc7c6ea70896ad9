//! Application state for the TUI
//!
//! The App struct holds the form controller plus the few bits of state that
//! only exist on screen.

use std::time::Instant;

use crate::form::{JournalForm, NotificationType, Submission};
use crate::submit::SubmissionWorker;

/// Currently active dialog (if any)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    Help,
}

/// Main application state
pub struct App {
    /// The journal entry form
    pub form: JournalForm,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Currently active dialog
    pub active_dialog: ActiveDialog,

    /// Where accepted entries go, shown in the status bar
    pub destination: String,

    /// Background submission thread
    worker: Option<SubmissionWorker>,
}

impl App {
    /// Create a new App instance
    pub fn new(form: JournalForm) -> Self {
        Self {
            form,
            should_quit: false,
            active_dialog: ActiveDialog::default(),
            destination: String::new(),
            worker: None,
        }
    }

    /// Attach the worker that submissions are handed to
    pub fn with_worker(mut self, worker: SubmissionWorker, destination: impl Into<String>) -> Self {
        self.worker = Some(worker);
        self.destination = destination.into();
        self
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Open a dialog
    pub fn open_dialog(&mut self, dialog: ActiveDialog) {
        self.active_dialog = dialog;
    }

    /// Close the current dialog
    pub fn close_dialog(&mut self) {
        self.active_dialog = ActiveDialog::None;
    }

    /// Check if a dialog is active
    pub fn has_dialog(&self) -> bool {
        !matches!(self.active_dialog, ActiveDialog::None)
    }

    /// Hand a validated entry to the worker
    pub fn dispatch(&mut self, submission: Submission, now: Instant) {
        let token = submission.token;
        match &self.worker {
            Some(worker) => {
                if let Err(e) = worker.dispatch(submission) {
                    self.form.complete_submission(token, Err(e.to_string()), now);
                }
            }
            None => {
                log::warn!("no submission worker attached; entry {} stays pending", token);
                self.form.notify(
                    "Submission service unavailable",
                    NotificationType::Warning,
                    now,
                );
            }
        }
    }
}
