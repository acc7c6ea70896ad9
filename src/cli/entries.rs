//! Outbox inspection commands
//!
//! `journal list`, `journal show` and `journal summary` read back the entries
//! accepted so far.

use std::path::Path;

use crate::config::Settings;
use crate::display::{format_entry_details, format_entry_list, format_session_summary};
use crate::error::{JournalError, JournalResult};
use crate::models::JournalEntry;
use crate::reports::SessionSummary;
use crate::submit::OutboxSubmitter;

/// Handle `journal list`
pub fn handle_list_command(settings: &Settings, outbox: &Path, limit: usize) -> JournalResult<()> {
    let entries = OutboxSubmitter::new(outbox.to_path_buf()).read_all()?;
    let start = entries.len().saturating_sub(limit);
    println!(
        "{}",
        format_entry_list(&entries[start..], &settings.currency_symbol)
    );
    Ok(())
}

/// Handle `journal show ID`
pub fn handle_show_command(settings: &Settings, outbox: &Path, id: &str) -> JournalResult<()> {
    let entries = OutboxSubmitter::new(outbox.to_path_buf()).read_all()?;
    let entry = find_entry(&entries, id)?;
    print!("{}", format_entry_details(entry, &settings.currency_symbol));
    Ok(())
}

/// Handle `journal summary`
pub fn handle_summary_command(settings: &Settings, outbox: &Path, top: usize) -> JournalResult<()> {
    let entries = OutboxSubmitter::new(outbox.to_path_buf()).read_all()?;
    let summary = SessionSummary::generate(&entries);
    println!(
        "{}",
        format_session_summary(&summary, &settings.currency_symbol, top)
    );
    Ok(())
}

/// Find an entry by its id or an unambiguous prefix of it
pub fn find_entry<'a>(entries: &'a [JournalEntry], query: &str) -> JournalResult<&'a JournalEntry> {
    let needle = query.trim().trim_start_matches("je-").to_lowercase();
    if needle.is_empty() {
        return Err(JournalError::entry_not_found(query));
    }

    let mut matches = entries
        .iter()
        .filter(|e| e.id.as_uuid().to_string().starts_with(&needle));

    match (matches.next(), matches.next()) {
        (Some(entry), None) => Ok(entry),
        (Some(_), Some(_)) => Err(JournalError::Validation(format!(
            "Entry id '{}' is ambiguous",
            query
        ))),
        (None, _) => Err(JournalError::entry_not_found(query)),
    }
}
