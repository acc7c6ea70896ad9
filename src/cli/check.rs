//! The `check` command
//!
//! Fills a form from `NAME:SIDE:AMOUNT` arguments, prints the rows and totals,
//! and runs the same submission checks as the interactive form.

use std::path::Path;
use std::time::Instant;

use clap::Args;

use crate::config::Settings;
use crate::display::format_form_table;
use crate::error::{JournalError, JournalResult};
use crate::form::{FormConfig, JournalForm};
use crate::models::{EntryId, EntrySide};
use crate::submit::{EntrySubmitter, OutboxSubmitter};

/// Arguments of `journal check`
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Account lines as NAME:debit|credit:AMOUNT
    #[arg(required = true, value_name = "LINE")]
    pub lines: Vec<String>,
    /// Entry date (YYYY-MM-DD, default today)
    #[arg(short, long)]
    pub date: Option<String>,
    /// Narration
    #[arg(short, long)]
    pub narration: Option<String>,
    /// Submit the entry to the outbox when it passes
    #[arg(short, long)]
    pub submit: bool,
}

/// One parsed account line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineSpec {
    pub account: String,
    pub side: EntrySide,
    pub amount: String,
}

/// Parse `NAME:SIDE:AMOUNT`; the name may itself contain colons
///
/// The amount is kept as typed and read leniently by the form.
pub fn parse_line_spec(spec: &str) -> JournalResult<LineSpec> {
    let mut parts = spec.rsplitn(3, ':');
    let (Some(amount), Some(side), Some(account)) = (parts.next(), parts.next(), parts.next())
    else {
        return Err(JournalError::Validation(format!(
            "Invalid line '{}': expected NAME:debit|credit:AMOUNT",
            spec
        )));
    };

    let side = side
        .parse::<EntrySide>()
        .map_err(|e| JournalError::Validation(format!("Invalid line '{}': {}", spec, e)))?;

    Ok(LineSpec {
        account: account.trim().to_string(),
        side,
        amount: amount.trim().to_string(),
    })
}

/// Build a form holding exactly the given lines
pub fn build_form(
    settings: &Settings,
    specs: &[LineSpec],
    date: Option<&str>,
    narration: Option<&str>,
    now: Instant,
) -> JournalForm {
    let mut form = JournalForm::new(FormConfig::from(settings), now);

    if let Some(date) = date {
        form.set_date(date);
    }
    if let Some(narration) = narration {
        form.set_narration(narration);
    }

    while form.rows().len() < specs.len() {
        form.add_row(now);
    }
    while form.rows().len() > specs.len().max(1) {
        if let Some(last) = form.rows().last().map(|r| r.id) {
            let _ = form.remove_row(last, now);
        }
    }

    let ids: Vec<_> = form.rows().iter().map(|r| r.id).collect();
    for (id, spec) in ids.into_iter().zip(specs) {
        form.set_name(id, &spec.account);
        form.set_side(id, spec.side);
        form.set_amount(id, &spec.amount);
    }

    form
}

/// Handle `journal check`; returns the id of a submitted entry
pub fn handle_check_command(
    settings: &Settings,
    outbox: &Path,
    args: CheckArgs,
) -> JournalResult<Option<EntryId>> {
    let specs = args
        .lines
        .iter()
        .map(|l| parse_line_spec(l))
        .collect::<JournalResult<Vec<_>>>()?;

    let now = Instant::now();
    let mut form = build_form(
        settings,
        &specs,
        args.date.as_deref(),
        args.narration.as_deref(),
        now,
    );

    print!(
        "{}",
        format_form_table(form.rows(), form.totals(), &settings.currency_symbol)
    );

    let submission = form
        .submit(now)
        .map_err(|e| JournalError::Validation(e.to_string()))?;

    println!(
        "Entry passes both checks ({} lines).",
        submission.entry.lines.len()
    );

    if !args.submit {
        return Ok(None);
    }

    let mut submitter = OutboxSubmitter::new(outbox.to_path_buf());
    submitter.submit(&submission.entry)?;
    println!("Journal entry added successfully!");
    println!("  ID:     {}", submission.entry.id);
    println!("  Outbox: {}", outbox.display());

    Ok(Some(submission.entry.id))
}
