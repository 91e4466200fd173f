use serde::{Deserialize, Serialize};
use std::{
    env,
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use crate::{
    errors::TrackerError,
    utils::paths::{self, ensure_dir, tmp_path},
};

pub const ASSUME_YES_ENV: &str = "FINANCE_TRACKER_ASSUME_YES";

/// Keys accepted by [`Config::set`].
pub const SETTING_KEYS: [&str; 4] = ["color", "confirm-exit", "assume-yes", "store"];

/// User preferences for the CLI shell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Key-value store file. Defaults to `store.json` in the app data dir.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub store_path: Option<PathBuf>,
    #[serde(default = "Config::default_true")]
    pub ui_color_enabled: bool,
    #[serde(default = "Config::default_true")]
    pub confirm_on_exit: bool,
    /// Answer given to confirmations when running non-interactively.
    #[serde(default)]
    pub assume_yes: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store_path: None,
            ui_color_enabled: true,
            confirm_on_exit: true,
            assume_yes: false,
        }
    }
}

impl Config {
    fn default_true() -> bool {
        true
    }

    /// Applies environment overrides on top of the persisted values.
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(raw) = env::var(ASSUME_YES_ENV) {
            self.assume_yes = matches!(
                raw.trim().to_ascii_lowercase().as_str(),
                "1" | "true" | "yes" | "y"
            );
        }
        self
    }

    /// Updates one setting from its textual form.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), TrackerError> {
        match key.to_ascii_lowercase().as_str() {
            "color" => self.ui_color_enabled = parse_switch(value)?,
            "confirm-exit" => self.confirm_on_exit = parse_switch(value)?,
            "assume-yes" => self.assume_yes = parse_switch(value)?,
            "store" => {
                let value = value.trim();
                self.store_path = match value {
                    "" | "default" => None,
                    path => Some(PathBuf::from(path)),
                };
            }
            other => {
                return Err(TrackerError::Config(format!(
                    "unknown setting `{}`; expected one of {}",
                    other,
                    SETTING_KEYS.join(", ")
                )))
            }
        }
        Ok(())
    }
}

fn parse_switch(value: &str) -> Result<bool, TrackerError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "on" | "true" | "yes" | "1" => Ok(true),
        "off" | "false" | "no" | "0" => Ok(false),
        other => Err(TrackerError::Config(format!(
            "expected on or off, got `{}`",
            other
        ))),
    }
}

pub struct ConfigManager {
    base: PathBuf,
    path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Result<Self, TrackerError> {
        Self::with_base_dir(paths::app_data_dir())
    }

    pub fn with_base_dir(base: PathBuf) -> Result<Self, TrackerError> {
        ensure_dir(&base)?;
        Ok(Self {
            path: paths::config_file_in(&base),
            base,
        })
    }

    pub fn load(&self) -> Result<Config, TrackerError> {
        if self.path.exists() {
            let data = fs::read_to_string(&self.path)?;
            serde_json::from_str(&data).map_err(|err| {
                TrackerError::Config(format!("{}: {}", self.path.display(), err))
            })
        } else {
            Ok(Config::default())
        }
    }

    pub fn save(&self, config: &Config) -> Result<(), TrackerError> {
        if let Some(parent) = self.path.parent() {
            ensure_dir(parent)?;
        }
        let json = serde_json::to_string_pretty(config)?;
        let tmp = tmp_path(&self.path);
        let mut file = File::create(&tmp)?;
        file.write_all(json.as_bytes())?;
        file.flush()?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    /// Store file to open: the configured path, or the default under the base dir.
    pub fn store_path(&self, config: &Config) -> PathBuf {
        config
            .store_path
            .clone()
            .unwrap_or_else(|| paths::store_file_in(&self.base))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
