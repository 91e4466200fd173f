//! In-memory ledger state: incomes, dated expenses, and the savings goal.

pub mod entry;
#[allow(clippy::module_inception)]
pub mod ledger;

pub use entry::{is_valid_amount, is_valid_date, ExpenseEntry, Totals, DATE_FORMAT};
pub use ledger::Ledger;
