//! Session summary
//!
//! Totals across every submitted entry: entry count, debit and credit totals,
//! the date range covered and the per-account debit/credit activity.

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::models::{EntrySide, JournalEntry, Money};

/// Debit and credit activity of one account
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountActivity {
    /// Account name as entered
    pub name: String,
    /// Sum of the debit lines
    pub debit: Money,
    /// Sum of the credit lines
    pub credit: Money,
}

impl AccountActivity {
    /// Debits plus credits, used to rank accounts
    pub fn total_activity(&self) -> Money {
        self.debit + self.credit
    }
}

/// Summary of a set of journal entries
#[derive(Debug, Clone)]
pub struct SessionSummary {
    /// Number of entries
    pub entry_count: usize,
    /// Sum of debits across all entries
    pub total_debit: Money,
    /// Sum of credits across all entries
    pub total_credit: Money,
    /// Earliest and latest entry date, if any date parses
    pub date_range: Option<(NaiveDate, NaiveDate)>,
    /// Accounts ordered by total activity, busiest first
    pub accounts: Vec<AccountActivity>,
}

impl SessionSummary {
    /// Summarise `entries`
    pub fn generate(entries: &[JournalEntry]) -> Self {
        let mut total_debit = Money::zero();
        let mut total_credit = Money::zero();
        let mut activity: HashMap<&str, (Money, Money)> = HashMap::new();

        for entry in entries {
            total_debit += entry.total_debit();
            total_credit += entry.total_credit();

            for line in &entry.lines {
                let totals = activity
                    .entry(line.account.trim())
                    .or_insert((Money::zero(), Money::zero()));
                match line.side {
                    EntrySide::Debit => totals.0 += line.amount,
                    EntrySide::Credit => totals.1 += line.amount,
                    EntrySide::Unset => {}
                }
            }
        }

        let dates: Vec<NaiveDate> = entries.iter().filter_map(|e| e.parsed_date()).collect();
        let date_range = match (dates.iter().min(), dates.iter().max()) {
            (Some(first), Some(last)) => Some((*first, *last)),
            _ => None,
        };

        let mut accounts: Vec<AccountActivity> = activity
            .into_iter()
            .filter(|(name, _)| !name.is_empty())
            .map(|(name, (debit, credit))| AccountActivity {
                name: name.to_string(),
                debit,
                credit,
            })
            .collect();
        accounts.sort_by(|a, b| {
            b.total_activity()
                .cmp(&a.total_activity())
                .then_with(|| a.name.cmp(&b.name))
        });

        Self {
            entry_count: entries.len(),
            total_debit,
            total_credit,
            date_range,
            accounts,
        }
    }

    /// Debits minus credits
    pub fn net_balance(&self) -> Money {
        self.total_debit - self.total_credit
    }

    /// Whether there is nothing to summarise
    pub fn is_empty(&self) -> bool {
        self.entry_count == 0
    }
}
