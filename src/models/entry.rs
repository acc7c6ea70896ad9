//! Journal entry model
//!
//! A journal entry is one balanced set of account lines, each classified as
//! a debit or a credit. This is the payload handed to the submission
//! collaborator once the form passes its checks.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ids::EntryId;
use super::money::Money;

/// Date format of an entry (ISO 8601 calendar date)
pub const ENTRY_DATE_FORMAT: &str = "%Y-%m-%d";

/// Which side of the entry an account line sits on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum EntrySide {
    /// No side selected yet
    #[default]
    Unset,
    Debit,
    Credit,
}

impl EntrySide {
    /// Next option in the type selector
    pub fn next(self) -> Self {
        match self {
            Self::Unset => Self::Debit,
            Self::Debit => Self::Credit,
            Self::Credit => Self::Unset,
        }
    }

    /// Previous option in the type selector
    pub fn prev(self) -> Self {
        match self {
            Self::Unset => Self::Credit,
            Self::Debit => Self::Unset,
            Self::Credit => Self::Debit,
        }
    }

    /// Whether a side has been chosen
    pub fn is_set(&self) -> bool {
        !matches!(self, Self::Unset)
    }
}

impl fmt::Display for EntrySide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unset => write!(f, "Select Type"),
            Self::Debit => write!(f, "Debit"),
            Self::Credit => write!(f, "Credit"),
        }
    }
}

impl FromStr for EntrySide {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "debit" | "dr" | "d" => Ok(Self::Debit),
            "credit" | "cr" | "c" => Ok(Self::Credit),
            "" | "unset" => Ok(Self::Unset),
            other => Err(format!("Unknown entry side: {}", other)),
        }
    }
}

/// A single account line of a submitted entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalLine {
    /// Account name as typed by the user
    pub account: String,

    /// Debit or credit
    pub side: EntrySide,

    /// Strictly positive amount
    pub amount: Money,
}

/// A journal entry ready for submission
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JournalEntry {
    /// Unique identifier
    pub id: EntryId,

    /// Entry date as typed (the collaborator validates it)
    pub date: String,

    /// Transaction description
    #[serde(default)]
    pub narration: String,

    /// Account lines in form order
    pub lines: Vec<JournalLine>,

    /// When the entry was submitted
    pub submitted_at: DateTime<Utc>,
}

impl JournalEntry {
    /// Create a new entry from its lines
    pub fn new(date: impl Into<String>, narration: impl Into<String>, lines: Vec<JournalLine>) -> Self {
        Self {
            id: EntryId::new(),
            date: date.into(),
            narration: narration.into(),
            lines,
            submitted_at: Utc::now(),
        }
    }

    /// Sum of the debit lines
    pub fn total_debit(&self) -> Money {
        self.side_total(EntrySide::Debit)
    }

    /// Sum of the credit lines
    pub fn total_credit(&self) -> Money {
        self.side_total(EntrySide::Credit)
    }

    fn side_total(&self, side: EntrySide) -> Money {
        self.lines
            .iter()
            .filter(|l| l.side == side)
            .map(|l| l.amount)
            .sum()
    }

    /// Parse the date field
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.date.trim(), ENTRY_DATE_FORMAT).ok()
    }

    /// Names of the accounts on the opposite side of `side`, joined for display
    pub fn contra_accounts(&self, side: EntrySide) -> String {
        let opposite = match side {
            EntrySide::Debit => EntrySide::Credit,
            EntrySide::Credit => EntrySide::Debit,
            EntrySide::Unset => return String::new(),
        };
        self.lines
            .iter()
            .filter(|l| l.side == opposite)
            .map(|l| l.account.as_str())
            .collect::<Vec<_>>()
            .join(" & ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(account: &str, side: EntrySide, cents: i64) -> JournalLine {
        JournalLine {
            account: account.into(),
            side,
            amount: Money::from_cents(cents),
        }
    }

    #[test]
    fn test_side_cycle() {
        assert_eq!(EntrySide::Unset.next(), EntrySide::Debit);
        assert_eq!(EntrySide::Debit.next(), EntrySide::Credit);
        assert_eq!(EntrySide::Credit.next(), EntrySide::Unset);
        assert_eq!(EntrySide::Debit.prev(), EntrySide::Unset);
        assert!(!EntrySide::Unset.is_set());
    }

    #[test]
    fn test_side_from_str() {
        assert_eq!("Debit".parse::<EntrySide>().unwrap(), EntrySide::Debit);
        assert_eq!("cr".parse::<EntrySide>().unwrap(), EntrySide::Credit);
        assert!("sideways".parse::<EntrySide>().is_err());
    }

    #[test]
    fn test_entry_totals() {
        let entry = JournalEntry::new(
            "2024-04-01",
            "Rent paid",
            vec![
                line("Rent", EntrySide::Debit, 50000),
                line("Cash", EntrySide::Credit, 20000),
                line("Bank", EntrySide::Credit, 30000),
            ],
        );
        assert_eq!(entry.total_debit().cents(), 50000);
        assert_eq!(entry.total_credit().cents(), 50000);
        assert_eq!(entry.contra_accounts(EntrySide::Debit), "Cash & Bank");
        assert_eq!(entry.contra_accounts(EntrySide::Credit), "Rent");
        assert_eq!(
            entry.parsed_date(),
            NaiveDate::from_ymd_opt(2024, 4, 1)
        );
    }

    #[test]
    fn test_serialization() {
        let entry = JournalEntry::new("2024-04-01", "x", vec![line("Cash", EntrySide::Debit, 100)]);
        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains("\"side\":\"debit\""));
        let back: JournalEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(back.id, entry.id);
        assert_eq!(back.lines, entry.lines);
    }
}
