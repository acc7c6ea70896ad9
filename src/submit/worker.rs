//! Background submission thread
//!
//! Owns the submitter and answers each request on the terminal event channel,
//! so the form learns the outcome the same way it learns about key presses.

use std::sync::mpsc;
use std::thread;

use crate::error::{JournalError, JournalResult};
use crate::form::Submission;
use crate::models::JournalEntry;
use crate::tui::event::Event;

use super::EntrySubmitter;

/// A request for the worker thread
#[derive(Debug, Clone)]
pub struct SubmissionRequest {
    pub token: u64,
    pub entry: JournalEntry,
}

impl From<Submission> for SubmissionRequest {
    fn from(submission: Submission) -> Self {
        Self {
            token: submission.token,
            entry: submission.entry,
        }
    }
}

/// Handle to the submission thread
pub struct SubmissionWorker {
    sender: mpsc::Sender<SubmissionRequest>,
    #[allow(dead_code)]
    handler: thread::JoinHandle<()>,
}

impl SubmissionWorker {
    /// Spawn the worker; responses go to `events`
    pub fn spawn<S>(mut submitter: S, events: mpsc::Sender<Event>) -> Self
    where
        S: EntrySubmitter + 'static,
    {
        let (sender, receiver) = mpsc::channel::<SubmissionRequest>();
        let handler = thread::spawn(move || {
            for request in receiver {
                let result = submitter
                    .submit(&request.entry)
                    .map_err(|e| match e {
                        JournalError::Validation(msg) => msg,
                        other => other.to_string(),
                    });
                let response = Event::Submission {
                    token: request.token,
                    result,
                };
                if events.send(response).is_err() {
                    return;
                }
            }
        });

        Self { sender, handler }
    }

    /// Queue an entry for submission
    pub fn dispatch(&self, request: impl Into<SubmissionRequest>) -> JournalResult<()> {
        let request = request.into();
        let token = request.token;
        self.sender.send(request).map_err(|_| {
            log::error!("submission worker is gone; dropping request {}", token);
            JournalError::Submission("Submission service unavailable".into())
        })
    }
}
