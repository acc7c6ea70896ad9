//! Focus targets and navigation order
//!
//! Controls are visited in document order: date, narration, then each row's
//! name, type selector and amount.

use crate::models::RowId;

use super::row::AccountRow;

/// A focusable control of the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusTarget {
    #[default]
    Date,
    Narration,
    Name(RowId),
    Side(RowId),
    Amount(RowId),
}

impl FocusTarget {
    /// Row the control belongs to, if any
    pub fn row(&self) -> Option<RowId> {
        match self {
            Self::Name(id) | Self::Side(id) | Self::Amount(id) => Some(*id),
            Self::Date | Self::Narration => None,
        }
    }

    /// Whether the control takes free text
    pub fn is_text(&self) -> bool {
        !matches!(self, Self::Side(_))
    }
}

/// Every focusable control in document order
pub fn focus_order(rows: &[AccountRow]) -> Vec<FocusTarget> {
    let mut order = Vec::with_capacity(2 + rows.len() * 3);
    order.push(FocusTarget::Date);
    order.push(FocusTarget::Narration);
    for row in rows {
        order.push(FocusTarget::Name(row.id));
        order.push(FocusTarget::Side(row.id));
        order.push(FocusTarget::Amount(row.id));
    }
    order
}

/// Control after `current`, or `None` when `current` is the last one
pub fn next_after(rows: &[AccountRow], current: FocusTarget) -> Option<FocusTarget> {
    let order = focus_order(rows);
    let idx = order.iter().position(|t| *t == current)?;
    order.get(idx + 1).copied()
}

/// Control after `current`, wrapping to the first
pub fn next_wrapping(rows: &[AccountRow], current: FocusTarget) -> FocusTarget {
    next_after(rows, current).unwrap_or(FocusTarget::Date)
}

/// Control before `current`, wrapping to the last
pub fn prev_wrapping(rows: &[AccountRow], current: FocusTarget) -> FocusTarget {
    let order = focus_order(rows);
    match order.iter().position(|t| *t == current) {
        Some(0) | None => order.last().copied().unwrap_or_default(),
        Some(idx) => order[idx - 1],
    }
}
