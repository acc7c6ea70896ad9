//! Journal entry display formatting
//!
//! Formats form rows and stored entries for terminal output in table and
//! detail views.

use crate::form::{AccountRow, BalanceStatus, Totals};
use crate::models::{EntrySide, JournalEntry};

/// Short side label used in tables
fn side_label(side: EntrySide) -> &'static str {
    match side {
        EntrySide::Debit => "Dr.",
        EntrySide::Credit => "Cr.",
        EntrySide::Unset => "-",
    }
}

/// Format the rows of a form with its totals
pub fn format_form_table(rows: &[AccountRow], totals: Totals, currency: &str) -> String {
    let name_width = rows
        .iter()
        .map(|r| r.account_name().chars().count())
        .max()
        .unwrap_or(7)
        .max(7);

    let mut output = String::new();
    output.push_str(&format!(
        "{:>3}  {:<name_width$}  {:<4}  {:>14}  {:>14}\n",
        "#",
        "Account",
        "Type",
        "Debit",
        "Credit",
        name_width = name_width,
    ));
    output.push_str(&format!(
        "{:->3}  {:-<name_width$}  {:-<4}  {:->14}  {:->14}\n",
        "",
        "",
        "",
        "",
        "",
        name_width = name_width,
    ));

    for (index, row) in rows.iter().enumerate() {
        let amount = row.amount_value().format_with_symbol(currency);
        let (debit, credit) = match row.side {
            EntrySide::Debit => (amount, String::new()),
            EntrySide::Credit => (String::new(), amount),
            EntrySide::Unset => (String::new(), String::new()),
        };
        output.push_str(&format!(
            "{:>3}  {:<name_width$}  {:<4}  {:>14}  {:>14}\n",
            index + 1,
            row.account_name(),
            side_label(row.side),
            debit,
            credit,
            name_width = name_width,
        ));
    }

    output.push_str(&format!(
        "{:>3}  {:-<name_width$}  {:<4}  {:->14}  {:->14}\n",
        "",
        "",
        "",
        "",
        "",
        name_width = name_width,
    ));
    output.push_str(&format!(
        "{:>3}  {:<name_width$}  {:<4}  {:>14}  {:>14}\n",
        "",
        "TOTAL",
        "",
        totals.debit.format_with_symbol(currency),
        totals.credit.format_with_symbol(currency),
        name_width = name_width,
    ));
    output.push('\n');

    let status = match totals.status() {
        BalanceStatus::Balanced => "Balanced",
        BalanceStatus::Unbalanced => "Not balanced",
    };
    output.push_str(&format!(
        "Difference: {} ({})\n",
        totals.difference().format_with_symbol(currency),
        status
    ));

    output
}

/// Format stored entries as a list
pub fn format_entry_list(entries: &[JournalEntry], currency: &str) -> String {
    if entries.is_empty() {
        return "No journal entries found.".to_string();
    }

    let narration_width = entries
        .iter()
        .map(|e| e.narration.chars().count().min(40))
        .max()
        .unwrap_or(9)
        .max(9);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<11}  {:<10}  {:<narration_width$}  {:>5}  {:>14}\n",
        "ID",
        "Date",
        "Narration",
        "Lines",
        "Amount",
        narration_width = narration_width,
    ));
    output.push_str(&format!(
        "{:-<11}  {:-<10}  {:-<narration_width$}  {:->5}  {:->14}\n",
        "",
        "",
        "",
        "",
        "",
        narration_width = narration_width,
    ));

    for entry in entries {
        output.push_str(&format!(
            "{:<11}  {:<10}  {:<narration_width$}  {:>5}  {:>14}\n",
            entry.id.to_string(),
            entry.date,
            truncate(&entry.narration, narration_width),
            entry.lines.len(),
            entry.total_debit().format_with_symbol(currency),
            narration_width = narration_width,
        ));
    }

    output.push_str(&format!("\n{} entries\n", entries.len()));
    output
}

/// Format a single entry with its lines and contra accounts
pub fn format_entry_details(entry: &JournalEntry, currency: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("Journal entry: {}\n", entry.id));
    output.push_str(&format!("  Date:       {}\n", entry.date));
    output.push_str(&format!("  Narration:  {}\n", entry.narration));
    output.push_str(&format!(
        "  Submitted:  {}\n",
        entry.submitted_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));
    output.push('\n');

    let name_width = entry
        .lines
        .iter()
        .map(|l| l.account.chars().count())
        .max()
        .unwrap_or(7)
        .max(7);

    for line in &entry.lines {
        output.push_str(&format!(
            "  {:<name_width$}  {:<3}  {:>14}  {} {}\n",
            line.account,
            side_label(line.side),
            line.amount.format_with_symbol(currency),
            if line.side == EntrySide::Debit { "To" } else { "By" },
            entry.contra_accounts(line.side),
            name_width = name_width,
        ));
    }

    output.push('\n');
    output.push_str(&format!(
        "  Total Debit:  {}\n  Total Credit: {}\n",
        entry.total_debit().format_with_symbol(currency),
        entry.total_credit().format_with_symbol(currency)
    ));

    output
}

/// Truncate a string to max length, adding ... if needed
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{JournalLine, Money, RowIdSequence};
    use std::time::Instant;

    fn row(seq: &mut RowIdSequence, name: &str, side: EntrySide, amount: &str) -> AccountRow {
        let mut row = AccountRow::new(seq.allocate(), Instant::now());
        row.name.set(name);
        row.side = side;
        row.amount.set(amount);
        row
    }

    #[test]
    fn test_form_table() {
        let mut seq = RowIdSequence::new();
        let rows = vec![
            row(&mut seq, "Cash", EntrySide::Debit, "100"),
            row(&mut seq, "Capital", EntrySide::Credit, "99"),
        ];
        let totals = Totals::compute(&rows);
        let table = format_form_table(&rows, totals, "₹");

        assert!(table.contains("Cash"));
        assert!(table.contains("Dr."));
        assert!(table.contains("₹100.00"));
        assert!(table.contains("₹99.00"));
        assert!(table.contains("Difference: ₹1.00 (Not balanced)"));
    }

    #[test]
    fn test_entry_details_show_contra_accounts() {
        let entry = JournalEntry::new(
            "2024-04-01",
            "Goods sold",
            vec![
                JournalLine {
                    account: "Cash".into(),
                    side: EntrySide::Debit,
                    amount: Money::from_cents(30_000),
                },
                JournalLine {
                    account: "Debtors".into(),
                    side: EntrySide::Debit,
                    amount: Money::from_cents(20_000),
                },
                JournalLine {
                    account: "Sales".into(),
                    side: EntrySide::Credit,
                    amount: Money::from_cents(50_000),
                },
            ],
        );

        let details = format_entry_details(&entry, "₹");
        assert!(details.contains("To Sales"));
        assert!(details.contains("By Cash & Debtors"));
        assert!(details.contains("Total Debit:  ₹500.00"));
    }

    #[test]
    fn test_empty_list() {
        assert_eq!(format_entry_list(&[], "₹"), "No journal entries found.");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a much longer narration", 10), "a much ...");
    }
}
