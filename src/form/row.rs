//! Account row
//!
//! One line item of the form: account name, debit/credit selector and amount.

use std::time::{Duration, Instant};

use crate::models::{EntrySide, JournalLine, Money, RowId};

use super::input::TextInput;

/// How long a freshly added or removed row stays highlighted
pub const ROW_ANIMATION: Duration = Duration::from_millis(300);

/// A single account line in the form
#[derive(Debug, Clone)]
pub struct AccountRow {
    /// Unique, never reused within the form
    pub id: RowId,

    /// Free-text account name
    pub name: TextInput,

    /// Debit / credit / unset selector
    pub side: EntrySide,

    /// Amount exactly as typed
    pub amount: TextInput,

    /// When the row was inserted (drives the entrance highlight)
    pub added_at: Instant,
}

impl AccountRow {
    /// Create a blank row
    pub fn new(id: RowId, now: Instant) -> Self {
        Self {
            id,
            name: TextInput::new().placeholder("Account name..."),
            side: EntrySide::Unset,
            amount: TextInput::new().placeholder("Amount..."),
            added_at: now,
        }
    }

    /// Numeric amount; invalid or empty text counts as zero
    pub fn amount_value(&self) -> Money {
        Money::parse_lenient(self.amount.value())
    }

    /// Trimmed account name
    pub fn account_name(&self) -> &str {
        self.name.value().trim()
    }

    /// A row counts toward submission only with a name, a side and a positive amount
    pub fn is_complete(&self) -> bool {
        !self.account_name().is_empty() && self.side.is_set() && self.amount_value().is_positive()
    }

    /// Whether the row is still in its entrance animation
    pub fn is_entering(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.added_at) < ROW_ANIMATION
    }

    /// Convert to a journal line if complete
    pub fn to_line(&self) -> Option<JournalLine> {
        self.is_complete().then(|| JournalLine {
            account: self.account_name().to_string(),
            side: self.side,
            amount: self.amount_value(),
        })
    }
}

/// A row that was just removed, kept only for the exit animation
#[derive(Debug, Clone)]
pub struct DepartingRow {
    pub row: AccountRow,
    pub index: usize,
    pub removed_at: Instant,
}

impl DepartingRow {
    /// Whether the exit animation has finished
    pub fn is_finished(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.removed_at) >= ROW_ANIMATION
    }
}
