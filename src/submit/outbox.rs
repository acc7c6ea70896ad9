//! JSONL outbox for accepted entries
//!
//! Entries that pass the acceptance rules are appended to the outbox file as a
//! single JSON line each and flushed immediately.

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::PathBuf;

use crate::error::{JournalError, JournalResult};
use crate::form::totals::BALANCE_TOLERANCE;
use crate::models::JournalEntry;

use super::EntrySubmitter;

/// Writes accepted entries to an append-only JSONL file
#[derive(Debug, Clone)]
pub struct OutboxSubmitter {
    path: PathBuf,
}

impl OutboxSubmitter {
    /// Create a submitter writing to `path`
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Path of the outbox file
    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Check an entry against the acceptance rules
    pub fn check(entry: &JournalEntry) -> JournalResult<()> {
        if entry.date.trim().is_empty() {
            return Err(JournalError::Validation("Date is required!".into()));
        }
        if entry.parsed_date().is_none() {
            return Err(JournalError::Validation(format!(
                "Invalid date '{}', expected YYYY-MM-DD",
                entry.date
            )));
        }
        if entry.narration.trim().is_empty() {
            return Err(JournalError::Validation("Narration is required!".into()));
        }

        let valid = entry
            .lines
            .iter()
            .filter(|l| !l.account.trim().is_empty() && l.side.is_set() && l.amount.is_positive())
            .count();
        if valid == 0 {
            return Err(JournalError::Validation(
                "At least one account entry is required!".into(),
            ));
        }
        if valid < 2 {
            return Err(JournalError::Validation(
                "At least two accounts are required for a journal entry!".into(),
            ));
        }

        let debit = entry.total_debit();
        let credit = entry.total_credit();
        if (debit - credit).abs() >= BALANCE_TOLERANCE {
            return Err(JournalError::Validation(format!(
                "Entry is not balanced! Debit: {}, Credit: {}",
                debit, credit
            )));
        }

        Ok(())
    }

    /// Read every entry in the outbox, oldest first
    pub fn read_all(&self) -> JournalResult<Vec<JournalEntry>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let file = File::open(&self.path)
            .map_err(|e| JournalError::Io(format!("Failed to open outbox: {}", e)))?;

        let mut entries = Vec::new();
        for (line_num, line) in BufReader::new(file).lines().enumerate() {
            let line = line.map_err(|e| {
                JournalError::Io(format!("Failed to read outbox line {}: {}", line_num + 1, e))
            })?;
            if line.trim().is_empty() {
                continue;
            }
            let entry: JournalEntry = serde_json::from_str(&line).map_err(|e| {
                JournalError::Json(format!(
                    "Failed to parse outbox entry at line {}: {}",
                    line_num + 1,
                    e
                ))
            })?;
            entries.push(entry);
        }

        Ok(entries)
    }

    /// Number of entries in the outbox
    pub fn entry_count(&self) -> JournalResult<usize> {
        Ok(self.read_all()?.len())
    }
}

impl EntrySubmitter for OutboxSubmitter {
    fn submit(&mut self, entry: &JournalEntry) -> JournalResult<()> {
        Self::check(entry)?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    JournalError::Io(format!("Failed to create outbox directory: {}", e))
                })?;
            }
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| JournalError::Io(format!("Failed to open outbox: {}", e)))?;

        let json = serde_json::to_string(entry)
            .map_err(|e| JournalError::Json(format!("Failed to serialize entry: {}", e)))?;

        writeln!(file, "{}", json)
            .map_err(|e| JournalError::Io(format!("Failed to write entry: {}", e)))?;

        file.flush()
            .map_err(|e| JournalError::Io(format!("Failed to flush outbox: {}", e)))?;

        log::info!("entry {} written to {}", entry.id, self.path.display());
        Ok(())
    }
}
