//! Running totals
//!
//! Debit and credit totals are always derived from the current rows; nothing
//! is accumulated incrementally.

use crate::models::{EntrySide, Money};

use super::row::AccountRow;

/// Fixed absolute tolerance for a balanced entry (0.01)
pub const BALANCE_TOLERANCE: Money = Money::from_cents(1);

/// Totals shown under the rows
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Totals {
    pub debit: Money,
    pub credit: Money,
}

impl Totals {
    /// Sum amounts by side; rows without a side contribute nothing
    pub fn compute<'a>(rows: impl IntoIterator<Item = &'a AccountRow>) -> Self {
        let mut totals = Self::default();
        for row in rows {
            let amount = row.amount_value();
            match row.side {
                EntrySide::Debit => totals.debit += amount,
                EntrySide::Credit => totals.credit += amount,
                EntrySide::Unset => {}
            }
        }
        totals
    }

    /// Absolute difference between debits and credits
    pub fn difference(&self) -> Money {
        (self.debit - self.credit).abs()
    }

    /// Balance predicate shared by the indicator and the submit gate
    pub fn is_balanced(&self) -> bool {
        self.difference() < BALANCE_TOLERANCE
    }

    /// Indicator state for the totals panel
    pub fn status(&self) -> BalanceStatus {
        if self.is_balanced() {
            BalanceStatus::Balanced
        } else {
            BalanceStatus::Unbalanced
        }
    }
}

/// Visual state of the balance indicator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BalanceStatus {
    /// Success styling
    Balanced,
    /// Warning styling
    Unbalanced,
}
