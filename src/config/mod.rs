use std::{fs, path::PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::{FinanceError, Result};
use crate::utils::{app_data_dir, ensure_dir};

const CONFIG_FILE: &str = "config.json";
const TMP_SUFFIX: &str = "tmp";

/// Display preferences for the dashboard surfaces.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub locale: String,
    pub currency: String,
    #[serde(default)]
    pub date_format: DateFormatStyle,
    /// Period tag applied when a command does not select one explicitly.
    #[serde(default = "default_period_tag")]
    pub default_period: String,
}

fn default_period_tag() -> String {
    "30d".into()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: "en-US".into(),
            currency: "USD".into(),
            date_format: DateFormatStyle::default(),
            default_period: default_period_tag(),
        }
    }
}

/// Locale-facing date label styles for chart axes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum DateFormatStyle {
    Short,
    #[default]
    Medium,
    Long,
}

impl DateFormatStyle {
    pub fn pattern(&self) -> &'static str {
        match self {
            DateFormatStyle::Short => "%m/%d",
            DateFormatStyle::Medium => "%b %d",
            DateFormatStyle::Long => "%B %d, %Y",
        }
    }
}

/// Loads and persists the JSON configuration under the app data directory.
pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Result<Self> {
        Self::from_base(app_data_dir())
    }

    pub fn with_base_dir(base: PathBuf) -> Result<Self> {
        Self::from_base(base)
    }

    fn from_base(base: PathBuf) -> Result<Self> {
        ensure_dir(&base)?;
        Ok(Self {
            path: base.join(CONFIG_FILE),
        })
    }

    pub fn load(&self) -> Result<Config> {
        if self.path.exists() {
            let data = fs::read_to_string(&self.path)?;
            Ok(serde_json::from_str(&data)?)
        } else {
            Ok(Config::default())
        }
    }

    pub fn save(&self, config: &Config) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            ensure_dir(parent)?;
        }
        let json = serde_json::to_string_pretty(config)?;
        let tmp = self.path.with_extension(TMP_SUFFIX);
        fs::write(&tmp, &json)?;
        fs::rename(&tmp, &self.path).map_err(|err| {
            FinanceError::Storage(format!(
                "failed to persist configuration at `{}`: {err}",
                self.path.display()
            ))
        })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_config_falls_back_to_defaults() {
        let dir = TempDir::new().unwrap();
        let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).unwrap();
        let config = manager.load().unwrap();
        assert_eq!(config.currency, "USD");
        assert_eq!(config.default_period, "30d");
        assert_eq!(config.date_format, DateFormatStyle::Medium);
    }

    #[test]
    fn save_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).unwrap();
        let mut config = Config::default();
        config.currency = "EUR".into();
        config.date_format = DateFormatStyle::Short;
        manager.save(&config).unwrap();

        let loaded = manager.load().unwrap();
        assert_eq!(loaded.currency, "EUR");
        assert_eq!(loaded.date_format, DateFormatStyle::Short);
    }
}
