//! Session summary display formatting

use crate::reports::SessionSummary;

/// Format a session summary, listing at most `top` accounts
pub fn format_session_summary(summary: &SessionSummary, currency: &str, top: usize) -> String {
    if summary.is_empty() {
        return "No journal entries found.".to_string();
    }

    let mut output = String::new();
    output.push_str("Session Summary\n");
    output.push_str(&"=".repeat(60));
    output.push('\n');

    output.push_str(&format!("  Total Entries:  {}\n", summary.entry_count));
    output.push_str(&format!(
        "  Total Debit:    {}\n",
        summary.total_debit.format_with_symbol(currency)
    ));
    output.push_str(&format!(
        "  Total Credit:   {}\n",
        summary.total_credit.format_with_symbol(currency)
    ));
    output.push_str(&format!(
        "  Net Balance:    {}\n",
        summary.net_balance().format_with_symbol(currency)
    ));

    if let Some((first, last)) = summary.date_range {
        output.push('\n');
        output.push_str("Date Range\n");
        output.push_str(&format!("  From: {}\n", first));
        output.push_str(&format!("  To:   {}\n", last));
    }

    let shown = summary.accounts.len().min(top);
    if shown > 0 {
        output.push('\n');
        output.push_str(&format!("Account Summary (Top {})\n", shown));
        output.push_str(&format!(
            "  {:<25}  {:>14}  {:>14}\n",
            "Account", "Dr.", "Cr."
        ));
        output.push_str(&format!("  {:-<25}  {:->14}  {:->14}\n", "", "", ""));
        for account in summary.accounts.iter().take(top) {
            output.push_str(&format!(
                "  {:<25}  {:>14}  {:>14}\n",
                account.name,
                account.debit.format_with_symbol(currency),
                account.credit.format_with_symbol(currency),
            ));
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EntrySide, JournalEntry, JournalLine, Money};

    fn entry(date: &str, debit: &str, credit: &str, cents: i64) -> JournalEntry {
        JournalEntry::new(
            date,
            "Test",
            vec![
                JournalLine {
                    account: debit.into(),
                    side: EntrySide::Debit,
                    amount: Money::from_cents(cents),
                },
                JournalLine {
                    account: credit.into(),
                    side: EntrySide::Credit,
                    amount: Money::from_cents(cents),
                },
            ],
        )
    }

    #[test]
    fn test_summary_sections() {
        let entries = vec![
            entry("2024-04-01", "Cash", "Capital", 100_000),
            entry("2024-04-05", "Purchases", "Cash", 20_000),
        ];
        let summary = SessionSummary::generate(&entries);
        let text = format_session_summary(&summary, "₹", 10);

        assert!(text.contains("Total Entries:  2"));
        assert!(text.contains("Total Debit:    ₹1200.00"));
        assert!(text.contains("Net Balance:    ₹0.00"));
        assert!(text.contains("From: 2024-04-01"));
        assert!(text.contains("To:   2024-04-05"));
        assert!(text.contains("Account Summary (Top 3)"));
        assert!(text.contains("Purchases"));
    }

    #[test]
    fn test_top_limits_accounts() {
        let entries = vec![
            entry("2024-04-01", "Cash", "Capital", 100_000),
            entry("2024-04-05", "Purchases", "Bank", 20_000),
        ];
        let summary = SessionSummary::generate(&entries);
        let text = format_session_summary(&summary, "₹", 2);

        assert!(text.contains("Account Summary (Top 2)"));
        assert!(text.contains("Cash"));
        assert!(text.contains("Capital"));
        assert!(!text.contains("Purchases"));
    }

    #[test]
    fn test_empty_summary() {
        let summary = SessionSummary::generate(&[]);
        assert_eq!(format_session_summary(&summary, "₹", 10), "No journal entries found.");
    }
}
