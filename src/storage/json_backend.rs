use std::{
    collections::BTreeMap,
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use tracing::{debug, warn};

use crate::{
    errors::Result,
    utils::paths::{ensure_dir, tmp_path},
};

use super::KeyValueStore;

/// File-backed [`KeyValueStore`]: one JSON object mapping slot keys to their
/// serialized text. The whole map is rewritten on every change.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl JsonFileStore {
    /// Opens the store at `path`. A missing or malformed file yields an empty store.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = match load_entries(&path) {
            Ok(entries) => entries,
            Err(err) => {
                warn!(path = %path.display(), error = %err, "store file unreadable; starting empty");
                BTreeMap::new()
            }
        };
        debug!(path = %path.display(), slots = entries.len(), "opened store");
        Self { path, entries }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self) {
        if let Err(err) = save_entries(&self.entries, &self.path) {
            warn!(path = %self.path.display(), error = %err, "failed to write store file");
        }
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
        self.persist();
    }

    fn remove(&mut self, key: &str) {
        if self.entries.remove(key).is_some() {
            self.persist();
        }
    }
}

fn load_entries(path: &Path) -> Result<BTreeMap<String, String>> {
    if !path.exists() {
        return Ok(BTreeMap::new());
    }
    let data = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&data)?)
}

fn save_entries(entries: &BTreeMap<String, String>, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(entries)?;
    let tmp = tmp_path(path);
    write_atomic(&tmp, &json)?;
    fs::rename(&tmp, path)?;
    Ok(())
}

fn write_atomic(path: &Path, data: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_in_temp_dir() -> (JsonFileStore, TempDir) {
        let temp = TempDir::new().expect("temp dir");
        let store = JsonFileStore::open(temp.path().join("store.json"));
        (store, temp)
    }

    #[test]
    fn values_survive_reopen() {
        let (mut store, _guard) = store_in_temp_dir();
        store.set("savingsGoal", "500");
        store.set("currency", "EUR");

        let reopened = JsonFileStore::open(store.path());
        assert_eq!(reopened.get("savingsGoal").as_deref(), Some("500"));
        assert_eq!(reopened.get("currency").as_deref(), Some("EUR"));
    }

    #[test]
    fn remove_is_persisted() {
        let (mut store, _guard) = store_in_temp_dir();
        store.set("incomes", "[10]");
        store.remove("incomes");

        let reopened = JsonFileStore::open(store.path());
        assert_eq!(reopened.get("incomes"), None);
    }

    #[test]
    fn malformed_file_opens_empty() {
        let temp = TempDir::new().expect("temp dir");
        let path = temp.path().join("store.json");
        fs::write(&path, "{not json").expect("write garbage");

        let store = JsonFileStore::open(&path);
        assert_eq!(store.get("incomes"), None);
    }

    #[test]
    fn creates_missing_parent_directories() {
        let temp = TempDir::new().expect("temp dir");
        let path = temp.path().join("nested").join("store.json");
        let mut store = JsonFileStore::open(&path);
        store.set("currency", "USD");
        assert!(path.exists());
        assert!(!tmp_path(&path).exists(), "staging file should be renamed away");
    }
}
