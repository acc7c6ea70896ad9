//! Core data models for the journal form
//!
//! Money amounts, identifiers, and the journal entry payload produced by a
//! successful submission.

pub mod entry;
pub mod ids;
pub mod money;

pub use entry::{EntrySide, JournalEntry, JournalLine, ENTRY_DATE_FORMAT};
pub use ids::{EntryId, RowId, RowIdSequence};
pub use money::Money;
