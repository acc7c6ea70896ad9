//! Account name suggestions
//!
//! A fixed list of common account names offered while typing a row name.

/// Common account names
pub const COMMON_ACCOUNTS: &[&str] = &[
    "Cash",
    "Bank",
    "Capital",
    "Sales",
    "Purchases",
    "Rent",
    "Salary",
    "Electricity",
    "Office Expenses",
    "Furniture",
    "Building",
    "Land",
    "Debtors",
    "Creditors",
    "Stock",
    "Interest",
    "Commission",
    "Discount",
    "Advertisement",
    "Insurance",
    "Telephone",
    "Stationery",
    "Transport",
    "Depreciation",
    "Bad Debts",
    "Provision for Bad Debts",
    "Reserve Fund",
];

/// Minimum typed characters before suggestions appear
pub const MIN_PREFIX_CHARS: usize = 2;

/// Most suggestions shown at once
pub const MAX_SUGGESTIONS: usize = 5;

/// Names starting with `typed` (case-insensitive), excluding an exact match
pub fn suggestions(typed: &str) -> Vec<&'static str> {
    let typed = typed.trim().to_lowercase();
    if typed.chars().count() < MIN_PREFIX_CHARS {
        return Vec::new();
    }

    COMMON_ACCOUNTS
        .iter()
        .copied()
        .filter(|name| {
            let lower = name.to_lowercase();
            lower.starts_with(&typed) && lower != typed
        })
        .take(MAX_SUGGESTIONS)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_needs_two_chars() {
        assert!(suggestions("c").is_empty());
        assert_eq!(suggestions("ca"), vec!["Cash", "Capital"]);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(suggestions("BAD"), vec!["Bad Debts"]);
        assert_eq!(suggestions("pro"), vec!["Provision for Bad Debts"]);
    }

    #[test]
    fn test_exact_match_hidden() {
        assert!(suggestions("cash").is_empty());
        assert!(suggestions("zzz").is_empty());
    }

    #[test]
    fn test_limit() {
        assert!(suggestions("co").len() <= MAX_SUGGESTIONS);
    }
}
