pub mod json_backend;
pub mod slots;

use std::collections::BTreeMap;

pub use json_backend::JsonFileStore;
pub use slots::{SlotStore, CURRENCY_KEY, EXPENSES_KEY, INCOMES_KEY, SAVINGS_GOAL_KEY, SLOT_KEYS};

/// Opaque string-keyed store. Best-effort: implementations log failures
/// instead of returning them, and there is no atomicity across keys.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
    fn remove(&mut self, key: &str);
}

/// In-process store, used by tests and when no backing file is wanted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) {
        (**self).remove(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_get_set_remove() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("incomes"), None);

        store.set("incomes", "[1]");
        assert_eq!(store.get("incomes").as_deref(), Some("[1]"));

        store.set("incomes", "[1,2]");
        assert_eq!(store.get("incomes").as_deref(), Some("[1,2]"));
        assert_eq!(store.len(), 1);

        store.remove("incomes");
        assert!(store.is_empty());
    }

    #[test]
    fn removing_a_missing_key_is_a_no_op() {
        let mut store = MemoryStore::new();
        store.remove("currency");
        assert!(store.is_empty());
    }
}
