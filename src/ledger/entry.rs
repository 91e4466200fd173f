use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Calendar format accepted for expense dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A dated expense. Field names match the persisted record layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseEntry {
    pub amount: f64,
    pub reason: String,
    pub date: String,
}

impl ExpenseEntry {
    pub fn new(amount: f64, reason: impl Into<String>, date: impl Into<String>) -> Self {
        Self {
            amount,
            reason: reason.into(),
            date: date.into(),
        }
    }
}

/// Aggregates over the two entry sequences.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Totals {
    pub income: f64,
    pub expense: f64,
    pub savings: f64,
}

impl Totals {
    pub fn of(incomes: &[f64], expenses: &[ExpenseEntry]) -> Self {
        let income: f64 = incomes.iter().sum();
        let expense: f64 = expenses.iter().map(|entry| entry.amount).sum();
        Self {
            income,
            expense,
            savings: income - expense,
        }
    }
}

/// Entry amounts must be finite and strictly positive.
pub fn is_valid_amount(amount: f64) -> bool {
    amount.is_finite() && amount > 0.0
}

/// True when `raw` is a calendar date in `YYYY-MM-DD` form.
pub fn is_valid_date(raw: &str) -> bool {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn totals_of_empty_sequences_are_zero() {
        assert_eq!(Totals::of(&[], &[]), Totals::default());
    }

    #[test]
    fn savings_may_go_negative() {
        let expenses = vec![ExpenseEntry::new(75.0, "rent", "2024-02-01")];
        let totals = Totals::of(&[50.0], &expenses);
        assert_eq!(totals.savings, -25.0);
    }

    #[test]
    fn amount_validation() {
        assert!(is_valid_amount(0.01));
        assert!(!is_valid_amount(0.0));
        assert!(!is_valid_amount(-5.0));
        assert!(!is_valid_amount(f64::NAN));
        assert!(!is_valid_amount(f64::INFINITY));
    }

    #[test]
    fn date_validation() {
        assert!(is_valid_date("2024-02-29"));
        assert!(is_valid_date(" 2024-01-01 "));
        assert!(!is_valid_date("banana"));
        assert!(!is_valid_date("2023-02-29"));
        assert!(!is_valid_date("01/02/2024"));
        assert!(!is_valid_date(""));
    }
}
