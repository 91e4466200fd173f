use tracing::info;

use crate::{
    currency::Currency,
    errors::ValidationError,
    storage::{KeyValueStore, SlotStore},
};

use super::entry::{is_valid_amount, is_valid_date, ExpenseEntry, Totals};

/// Ledger state plus the store it writes through to.
///
/// Every successful mutation persists the affected slot before returning, so
/// nothing lives only in memory past a single call.
pub struct Ledger {
    incomes: Vec<f64>,
    expenses: Vec<ExpenseEntry>,
    goal: f64,
    currency: Currency,
    slots: SlotStore,
}

impl Ledger {
    /// Rebuilds state from the store, substituting defaults for absent or
    /// malformed slots.
    pub fn hydrate(store: Box<dyn KeyValueStore>) -> Self {
        let slots = SlotStore::new(store);
        let ledger = Self {
            incomes: slots.read_incomes(),
            expenses: slots.read_expenses(),
            goal: slots.read_goal(),
            currency: slots.read_currency(),
            slots,
        };
        info!(
            incomes = ledger.incomes.len(),
            expenses = ledger.expenses.len(),
            currency = %ledger.currency,
            "ledger hydrated"
        );
        ledger
    }

    pub fn incomes(&self) -> &[f64] {
        &self.incomes
    }

    pub fn expenses(&self) -> &[ExpenseEntry] {
        &self.expenses
    }

    pub fn goal(&self) -> f64 {
        self.goal
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    pub fn add_income(&mut self, amount: f64) -> Result<(), ValidationError> {
        if !is_valid_amount(amount) {
            return Err(ValidationError::InvalidIncome);
        }
        self.incomes.push(amount);
        self.slots.write_incomes(&self.incomes);
        info!(amount, count = self.incomes.len(), "income added");
        Ok(())
    }

    /// Reason must be non-blank and date a `YYYY-MM-DD` calendar date; both
    /// are stored as given.
    pub fn add_expense(
        &mut self,
        amount: f64,
        reason: &str,
        date: &str,
    ) -> Result<(), ValidationError> {
        if !is_valid_amount(amount) || reason.trim().is_empty() || !is_valid_date(date) {
            return Err(ValidationError::InvalidExpense);
        }
        self.expenses.push(ExpenseEntry::new(amount, reason, date));
        self.slots.write_expenses(&self.expenses);
        info!(amount, count = self.expenses.len(), "expense added");
        Ok(())
    }

    /// Accepts any value, NaN included, and persists it unconditionally.
    pub fn set_goal(&mut self, value: f64) {
        self.goal = value;
        self.slots.write_goal(value);
        info!(goal = value, "savings goal set");
    }

    pub fn set_currency(&mut self, currency: Currency) {
        self.currency = currency;
        self.slots.write_currency(currency);
        info!(currency = %currency, "display currency changed");
    }

    pub fn totals(&self) -> Totals {
        Totals::of(&self.incomes, &self.expenses)
    }

    /// Empties both sequences, zeroes the goal, restores the default
    /// currency, and removes every persisted slot.
    pub fn clear_all(&mut self) {
        self.incomes.clear();
        self.expenses.clear();
        self.goal = 0.0;
        self.currency = Currency::default();
        self.slots.remove_all();
        info!("ledger cleared");
    }

    pub fn store(&self) -> &dyn KeyValueStore {
        self.slots.inner()
    }

    pub fn into_store(self) -> Box<dyn KeyValueStore> {
        self.slots.into_inner()
    }
}
