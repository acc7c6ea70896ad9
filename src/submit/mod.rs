//! Submission of finished journal entries
//!
//! The form never persists anything itself. A validated entry is handed to an
//! [`EntrySubmitter`], which accepts or rejects it, on a background thread so
//! the terminal stays responsive.

pub mod outbox;
pub mod worker;

pub use outbox::OutboxSubmitter;
pub use worker::{SubmissionRequest, SubmissionWorker};

use crate::error::JournalResult;
use crate::models::JournalEntry;

/// Accepts or rejects journal entries
pub trait EntrySubmitter: Send {
    /// Submit one entry; an error carries the message shown to the user
    fn submit(&mut self, entry: &JournalEntry) -> JournalResult<()>;
}
