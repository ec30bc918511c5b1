use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::debug;

use crate::currency::DEFAULT_SYMBOL;
use crate::domain::PeriodSelector;
use crate::errors::{FinanceError, Result};
use crate::storage::json_backend::write_atomic;
use crate::utils::paths::{ensure_dir, PathResolver};

/// User preferences persisted at `<base>/config/config.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub currency_symbol: String,
    pub locale: String,
    pub default_period: PeriodSelector,
    /// Seed the sample dataset when no transactions are stored yet.
    pub seed_sample_data: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            currency_symbol: DEFAULT_SYMBOL.into(),
            locale: "en-IN".into(),
            default_period: PeriodSelector::CurrentMonth,
            seed_sample_data: true,
        }
    }
}

impl Config {
    /// Updates one field from its textual key/value form.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "currency_symbol" => {
                let symbol = value.trim();
                if symbol.is_empty() {
                    return Err(FinanceError::ConfigError(
                        "currency_symbol must not be empty".into(),
                    ));
                }
                self.currency_symbol = symbol.to_string();
            }
            "locale" => self.locale = value.trim().to_string(),
            "default_period" => {
                self.default_period = value
                    .parse()
                    .map_err(|err: FinanceError| FinanceError::ConfigError(err.to_string()))?;
            }
            "seed_sample_data" => {
                self.seed_sample_data = match value.trim().to_ascii_lowercase().as_str() {
                    "true" | "yes" | "on" | "1" => true,
                    "false" | "no" | "off" | "0" => false,
                    other => {
                        return Err(FinanceError::ConfigError(format!(
                            "expected a boolean for seed_sample_data, got `{}`",
                            other
                        )))
                    }
                };
            }
            other => {
                return Err(FinanceError::ConfigError(format!(
                    "unknown configuration key `{}`",
                    other
                )))
            }
        }
        Ok(())
    }

    pub fn entries(&self) -> Vec<(&'static str, String)> {
        vec![
            ("currency_symbol", self.currency_symbol.clone()),
            ("locale", self.locale.clone()),
            ("default_period", self.default_period.to_string()),
            ("seed_sample_data", self.seed_sample_data.to_string()),
        ]
    }
}

pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Result<Self> {
        Self::from_base(PathResolver::base_dir())
    }

    pub fn with_base_dir(base: PathBuf) -> Result<Self> {
        Self::from_base(base)
    }

    fn from_base(base: PathBuf) -> Result<Self> {
        ensure_dir(&base)?;
        ensure_dir(&PathResolver::config_dir_in(&base))?;
        Ok(Self {
            path: PathResolver::config_file_in(&base),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Result<Config> {
        if !self.path.exists() {
            return Ok(Config::default());
        }
        let data = fs::read_to_string(&self.path)?;
        serde_json::from_str(&data).map_err(|err| {
            FinanceError::ConfigError(format!("{}: {}", self.path.display(), err))
        })
    }

    pub fn save(&self, config: &Config) -> Result<()> {
        let json = serde_json::to_string_pretty(config)?;
        write_atomic(&self.path, &json)?;
        debug!(path = %self.path.display(), "configuration saved");
        Ok(())
    }
}
