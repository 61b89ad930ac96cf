use crate::birthdays::{BirthdayWindow, DEFAULT_WINDOW_DAYS};
use crate::error::{AddrBookError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";

pub const KEY_BIRTHDAY_WINDOW_DAYS: &str = "birthday_window_days";
pub const KEY_SHIFT_WEEKENDS: &str = "shift_weekends";

/// Configuration for addrbook, stored as config.json in the data directory
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AddrBookConfig {
    /// Lookahead used by `birthdays` when no day count is given
    #[serde(default = "default_window_days")]
    pub birthday_window_days: u32,

    /// Report weekend birthdays on the following Monday
    #[serde(default)]
    pub shift_weekends: bool,
}

fn default_window_days() -> u32 {
    DEFAULT_WINDOW_DAYS
}

impl Default for AddrBookConfig {
    fn default() -> Self {
        Self {
            birthday_window_days: DEFAULT_WINDOW_DAYS,
            shift_weekends: false,
        }
    }
}

impl AddrBookConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(AddrBookError::Io)?;
        let config: AddrBookConfig =
            serde_json::from_str(&content).map_err(AddrBookError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(AddrBookError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(AddrBookError::Serialization)?;
        fs::write(config_path, content).map_err(AddrBookError::Io)?;
        Ok(())
    }

    pub fn keys() -> &'static [&'static str] {
        &[KEY_BIRTHDAY_WINDOW_DAYS, KEY_SHIFT_WEEKENDS]
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            KEY_BIRTHDAY_WINDOW_DAYS => Some(self.birthday_window_days.to_string()),
            KEY_SHIFT_WEEKENDS => Some(self.shift_weekends.to_string()),
            _ => None,
        }
    }

    /// Parses and sets one key. On error the config is unchanged.
    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            KEY_BIRTHDAY_WINDOW_DAYS => {
                self.birthday_window_days = value
                    .parse()
                    .map_err(|_| format!("{key} must be a non-negative whole number"))?;
            }
            KEY_SHIFT_WEEKENDS => {
                self.shift_weekends = parse_bool(value)
                    .ok_or_else(|| format!("{key} must be true or false"))?;
            }
            _ => return Err(format!("Unknown config key: {key}")),
        }
        Ok(())
    }

    /// All keys with their current values, in a stable order.
    pub fn list_all(&self) -> Vec<(String, String)> {
        Self::keys()
            .iter()
            .filter_map(|key| self.get(key).map(|value| (key.to_string(), value)))
            .collect()
    }

    /// The birthday window this config describes, optionally overriding the day count.
    pub fn birthday_window(&self, days: Option<u32>) -> BirthdayWindow {
        BirthdayWindow::days(days.unwrap_or(self.birthday_window_days))
            .with_weekend_shift(self.shift_weekends)
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Some(true),
        "false" | "no" | "off" | "0" => Some(false),
        _ => None,
    }
}
