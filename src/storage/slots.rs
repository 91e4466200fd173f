//! Typed access to the four persisted slots.
//!
//! Reads never fail: absent or malformed content falls back to the slot's
//! default and is logged at `warn`.

use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, warn};

use crate::{currency::Currency, ledger::ExpenseEntry};

use super::KeyValueStore;

pub const INCOMES_KEY: &str = "incomes";
pub const EXPENSES_KEY: &str = "expenses";
pub const SAVINGS_GOAL_KEY: &str = "savingsGoal";
pub const CURRENCY_KEY: &str = "currency";

pub const SLOT_KEYS: [&str; 4] = [INCOMES_KEY, EXPENSES_KEY, SAVINGS_GOAL_KEY, CURRENCY_KEY];

pub struct SlotStore {
    store: Box<dyn KeyValueStore>,
}

impl SlotStore {
    pub fn new(store: Box<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    pub fn read_incomes(&self) -> Vec<f64> {
        self.read_json(INCOMES_KEY)
    }

    pub fn write_incomes(&mut self, incomes: &[f64]) {
        self.write_json(INCOMES_KEY, incomes);
    }

    pub fn read_expenses(&self) -> Vec<ExpenseEntry> {
        self.read_json(EXPENSES_KEY)
    }

    pub fn write_expenses(&mut self, expenses: &[ExpenseEntry]) {
        self.write_json(EXPENSES_KEY, expenses);
    }

    /// Zero when absent, unparseable, or NaN.
    pub fn read_goal(&self) -> f64 {
        let Some(raw) = self.store.get(SAVINGS_GOAL_KEY) else {
            return 0.0;
        };
        match raw.trim().parse::<f64>() {
            Ok(value) if !value.is_nan() => value,
            _ => {
                warn!(slot = SAVINGS_GOAL_KEY, raw = %raw, "goal is not numeric; using 0");
                0.0
            }
        }
    }

    /// Stored as the number's text form; NaN is written as `NaN`.
    pub fn write_goal(&mut self, goal: f64) {
        debug!(slot = SAVINGS_GOAL_KEY, "writing slot");
        self.store.set(SAVINGS_GOAL_KEY, &goal.to_string());
    }

    pub fn read_currency(&self) -> Currency {
        let Some(raw) = self.store.get(CURRENCY_KEY) else {
            return Currency::default();
        };
        raw.parse().unwrap_or_else(|_| {
            warn!(slot = CURRENCY_KEY, raw = %raw, "unknown currency code; using default");
            Currency::default()
        })
    }

    pub fn write_currency(&mut self, currency: Currency) {
        debug!(slot = CURRENCY_KEY, "writing slot");
        self.store.set(CURRENCY_KEY, currency.code());
    }

    pub fn remove_all(&mut self) {
        for key in SLOT_KEYS {
            self.store.remove(key);
        }
        debug!("removed all slots");
    }

    pub fn inner(&self) -> &dyn KeyValueStore {
        &*self.store
    }

    pub fn into_inner(self) -> Box<dyn KeyValueStore> {
        self.store
    }

    fn read_json<T: DeserializeOwned + Default>(&self, key: &str) -> T {
        let Some(raw) = self.store.get(key) else {
            return T::default();
        };
        serde_json::from_str(&raw).unwrap_or_else(|err| {
            warn!(slot = key, error = %err, "malformed slot content; using default");
            T::default()
        })
    }

    fn write_json<T: Serialize + ?Sized>(&mut self, key: &str, value: &T) {
        match serde_json::to_string(value) {
            Ok(json) => {
                debug!(slot = key, "writing slot");
                self.store.set(key, &json);
            }
            Err(err) => warn!(slot = key, error = %err, "failed to encode slot"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn slots_with(entries: &[(&str, &str)]) -> SlotStore {
        let mut store = MemoryStore::new();
        for (key, value) in entries {
            store.set(key, value);
        }
        SlotStore::new(Box::new(store))
    }

    #[test]
    fn absent_slots_read_as_defaults() {
        let slots = slots_with(&[]);
        assert!(slots.read_incomes().is_empty());
        assert!(slots.read_expenses().is_empty());
        assert_eq!(slots.read_goal(), 0.0);
        assert_eq!(slots.read_currency(), Currency::default());
    }

    #[test]
    fn malformed_slots_fall_back_silently() {
        let slots = slots_with(&[
            (INCOMES_KEY, "not-json"),
            (EXPENSES_KEY, "[{\"amount\": 3}]"),
            (SAVINGS_GOAL_KEY, "lots"),
            (CURRENCY_KEY, "IND"),
        ]);
        assert!(slots.read_incomes().is_empty());
        assert!(slots.read_expenses().is_empty());
        assert_eq!(slots.read_goal(), 0.0);
        assert_eq!(slots.read_currency(), Currency::Inr);
    }

    #[test]
    fn reads_existing_browser_style_payloads() {
        let slots = slots_with(&[
            (INCOMES_KEY, "[100,25.5]"),
            (
                EXPENSES_KEY,
                r#"[{"amount":40,"reason":"food","date":"2024-01-01"}]"#,
            ),
            (SAVINGS_GOAL_KEY, "250"),
            (CURRENCY_KEY, "USD"),
        ]);
        assert_eq!(slots.read_incomes(), vec![100.0, 25.5]);
        assert_eq!(
            slots.read_expenses(),
            vec![ExpenseEntry::new(40.0, "food", "2024-01-01")]
        );
        assert_eq!(slots.read_goal(), 250.0);
        assert_eq!(slots.read_currency(), Currency::Usd);
    }

    #[test]
    fn nan_goal_is_written_as_text_and_read_back_as_zero() {
        let mut slots = slots_with(&[]);
        slots.write_goal(f64::NAN);
        assert_eq!(slots.inner().get(SAVINGS_GOAL_KEY).as_deref(), Some("NaN"));
        assert_eq!(slots.read_goal(), 0.0);
    }

    #[test]
    fn goal_text_uses_plain_number_form() {
        let mut slots = slots_with(&[]);
        slots.write_goal(1000.0);
        assert_eq!(slots.inner().get(SAVINGS_GOAL_KEY).as_deref(), Some("1000"));
        slots.write_goal(-12.5);
        assert_eq!(slots.inner().get(SAVINGS_GOAL_KEY).as_deref(), Some("-12.5"));
    }

    #[test]
    fn remove_all_clears_every_slot() {
        let mut slots = slots_with(&[
            (INCOMES_KEY, "[1]"),
            (EXPENSES_KEY, "[]"),
            (SAVINGS_GOAL_KEY, "5"),
            (CURRENCY_KEY, "EUR"),
        ]);
        slots.remove_all();
        for key in SLOT_KEYS {
            assert_eq!(slots.inner().get(key), None, "{key} should be gone");
        }
    }
}
