//! Submission checks
//!
//! Two checks run in order before an entry leaves the form: the balance
//! check, then the content check. Neither mutates anything.

use thiserror::Error;

use crate::models::{JournalLine, Money};

use super::row::AccountRow;
use super::totals::Totals;

/// User-visible conditions that block a form operation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    /// Removing the only remaining row
    #[error("At least one account entry is required!")]
    LastRow,

    /// Debits and credits differ by at least the tolerance
    #[error(
        "Entry is not balanced!\nTotal Debit: {}\nTotal Credit: {}\nDifference: {}",
        .debit.format_with_symbol(.currency),
        .credit.format_with_symbol(.currency),
        .difference.format_with_symbol(.currency)
    )]
    Unbalanced {
        debit: Money,
        credit: Money,
        difference: Money,
        currency: String,
    },

    /// No row has a name, a side and a positive amount
    #[error("Please add at least one valid account entry.")]
    NoValidLines,

    /// A submission is already waiting for its response
    #[error("A submission is already in progress")]
    SubmissionPending,
}

impl FormError {
    /// Title for the alert dialog
    pub fn title(&self) -> &'static str {
        match self {
            Self::LastRow => "Warning",
            Self::Unbalanced { .. } => "Entry Not Balanced",
            Self::NoValidLines => "Validation Error",
            Self::SubmissionPending => "Please Wait",
        }
    }
}

/// Balance check: blocks when the difference reaches the tolerance
pub fn check_balance(totals: &Totals, currency: &str) -> Result<(), FormError> {
    if totals.is_balanced() {
        Ok(())
    } else {
        Err(FormError::Unbalanced {
            debit: totals.debit,
            credit: totals.credit,
            difference: totals.difference(),
            currency: currency.to_string(),
        })
    }
}

/// Content check: collects the complete rows, failing if there are none
pub fn check_content(rows: &[AccountRow]) -> Result<Vec<JournalLine>, FormError> {
    let lines: Vec<JournalLine> = rows.iter().filter_map(AccountRow::to_line).collect();
    if lines.is_empty() {
        Err(FormError::NoValidLines)
    } else {
        Ok(lines)
    }
}

/// Run both checks in order against freshly computed totals
pub fn validate(rows: &[AccountRow], currency: &str) -> Result<Vec<JournalLine>, FormError> {
    let totals = Totals::compute(rows);
    check_balance(&totals, currency)?;
    check_content(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EntrySide, RowIdSequence};
    use std::time::Instant;

    fn rows(spec: &[(&str, EntrySide, &str)]) -> Vec<AccountRow> {
        let mut seq = RowIdSequence::new();
        spec.iter()
            .map(|(name, side, amount)| {
                let mut row = AccountRow::new(seq.allocate(), Instant::now());
                row.name.set(*name);
                row.side = *side;
                row.amount.set(*amount);
                row
            })
            .collect()
    }

    #[test]
    fn test_balanced_entry_passes() {
        let rows = rows(&[
            ("Cash", EntrySide::Debit, "100.00"),
            ("Capital", EntrySide::Credit, "100.00"),
        ]);
        let lines = validate(&rows, "₹").unwrap();
        assert_eq!(lines.len(), 2);
    }

    #[test]
    fn test_unbalanced_message_reports_figures() {
        let rows = rows(&[
            ("Cash", EntrySide::Debit, "100.00"),
            ("Capital", EntrySide::Credit, "99.00"),
        ]);
        let err = validate(&rows, "₹").unwrap_err();
        assert!(matches!(err, FormError::Unbalanced { .. }));
        let text = err.to_string();
        assert!(text.contains("Total Debit: ₹100.00"));
        assert!(text.contains("Total Credit: ₹99.00"));
        assert!(text.contains("Difference: ₹1.00"));
        assert_eq!(err.title(), "Entry Not Balanced");
    }

    #[test]
    fn test_no_complete_rows_is_generic_error() {
        let two = rows(&[("Cash", EntrySide::Unset, "100"), ("", EntrySide::Credit, "")]);
        assert_eq!(validate(&two, "$").unwrap_err(), FormError::NoValidLines);

        let three = rows(&[
            ("", EntrySide::Debit, "50"),
            ("Cash", EntrySide::Unset, "50"),
            ("", EntrySide::Credit, "50"),
        ]);
        assert_eq!(validate(&three, "$").unwrap_err(), FormError::NoValidLines);
    }

    #[test]
    fn test_balance_check_runs_first() {
        let rows = rows(&[("", EntrySide::Debit, "10"), ("", EntrySide::Unset, "")]);
        assert!(matches!(
            validate(&rows, "$").unwrap_err(),
            FormError::Unbalanced { .. }
        ));
    }

    #[test]
    fn test_zero_amount_rows_do_not_qualify() {
        let rows = rows(&[
            ("Cash", EntrySide::Debit, "0"),
            ("Sales", EntrySide::Credit, "abc"),
        ]);
        assert_eq!(validate(&rows, "$").unwrap_err(), FormError::NoValidLines);
    }

    #[test]
    fn test_last_row_message() {
        assert_eq!(
            FormError::LastRow.to_string(),
            "At least one account entry is required!"
        );
    }
}
