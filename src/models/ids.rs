//! Strongly-typed identifiers
//!
//! Submitted journal entries get random UUIDs. Account rows get small
//! integers handed out by a per-form sequence: increasing, never reused.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Identifier of a submitted journal entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(Uuid);

impl EntryId {
    /// Create a new random ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Get the underlying UUID
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for EntryId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "je-{}", &self.0.to_string()[..8])
    }
}

impl FromStr for EntryId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.strip_prefix("je-").unwrap_or(s);
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// Identifier of an account row within one form
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RowId(u64);

impl RowId {
    /// Get the raw sequence number
    pub const fn get(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "row-{}", self.0)
    }
}

/// Hands out row identifiers for a single form
///
/// Owned by the form controller; there is no process-wide counter.
#[derive(Debug, Clone)]
pub struct RowIdSequence {
    next: u64,
}

impl RowIdSequence {
    /// Create a sequence starting at 1
    pub fn new() -> Self {
        Self { next: 1 }
    }

    /// Allocate the next identifier
    pub fn allocate(&mut self) -> RowId {
        let id = RowId(self.next);
        self.next += 1;
        id
    }
}

impl Default for RowIdSequence {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_id_unique() {
        assert_ne!(EntryId::new(), EntryId::new());
    }

    #[test]
    fn test_entry_id_display_and_parse() {
        let id = EntryId::new();
        let display = format!("{}", id);
        assert!(display.starts_with("je-"));
        assert_eq!(display.len(), 11);

        let full = format!("je-{}", id.as_uuid());
        let parsed: EntryId = full.parse().unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn test_entry_id_serialization() {
        let id = EntryId::new();
        let json = serde_json::to_string(&id).unwrap();
        let back: EntryId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, back);
    }

    #[test]
    fn test_row_sequence_is_increasing() {
        let mut seq = RowIdSequence::new();
        let a = seq.allocate();
        let b = seq.allocate();
        assert!(b > a);
        assert_eq!(a.get(), 1);
        assert_eq!(seq.allocate().get(), 3);
        assert_eq!(format!("{}", b), "row-2");
    }
}
