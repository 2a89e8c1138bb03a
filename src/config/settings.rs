//! Settings Module
//!
//! String-level access to [`Config`] keys for the `config` command.

use super::{ColorMode, Config};
use crate::core::ranker::MAX_RESULTS;
use crate::core::types::Tool;
use crate::error::{PacwiseError, Result};
use crate::utils::paths;
use std::path::{Path, PathBuf};

/// Every recognised key, in display order.
pub const KEYS: [&str; 10] = [
    "preferred-helper",
    "auto-install-helper",
    "max-results",
    "confirm-before-action",
    "noconfirm",
    "search-cutoff",
    "max-retries",
    "backup-before-operations",
    "aur-search",
    "color",
];

/// Settings manager
pub struct Settings {
    settings_file: PathBuf,
    config: Config,
}

impl Settings {
    /// Load settings from the default config file
    pub fn load() -> Result<Self> {
        Self::load_from(paths::config_file()?)
    }

    pub fn load_from(settings_file: PathBuf) -> Result<Self> {
        let config = Config::load_from(&settings_file)?;
        Ok(Self {
            settings_file,
            config,
        })
    }

    pub fn path(&self) -> &Path {
        &self.settings_file
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Get a setting value
    pub fn get(&self, key: &str) -> Result<String> {
        let c = &self.config;
        let value = match key {
            "preferred-helper" => c.preferred_helper.to_string(),
            "auto-install-helper" => c.auto_install_helper.to_string(),
            "max-results" => c.max_results.to_string(),
            "confirm-before-action" => c.confirm_before_action.to_string(),
            "noconfirm" => c.noconfirm.to_string(),
            "search-cutoff" => c.search_cutoff.to_string(),
            "max-retries" => c.max_retries.to_string(),
            "backup-before-operations" => c.backup_before_operations.to_string(),
            "aur-search" => c.aur_search.to_string(),
            "color" => c.color.to_string(),
            _ => return Err(unknown_key(key)),
        };
        Ok(value)
    }

    /// Get all settings as key/value pairs
    pub fn all(&self) -> Result<Vec<(&'static str, String)>> {
        KEYS.iter().map(|k| Ok((*k, self.get(k)?))).collect()
    }

    /// Set a setting value and save
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        validate_key(key)?;
        apply(&mut self.config, key, value.trim())?;
        self.config.save_to(&self.settings_file)
    }

    /// Reset a setting to default and save
    pub fn reset(&mut self, key: &str) -> Result<()> {
        validate_key(key)?;
        let defaults = Settings {
            settings_file: PathBuf::new(),
            config: Config::default(),
        };
        let default = defaults.get(key)?;
        apply(&mut self.config, key, &default)?;
        self.config.save_to(&self.settings_file)
    }
}

fn validate_key(key: &str) -> Result<()> {
    if !KEYS.contains(&key) {
        return Err(unknown_key(key));
    }
    Ok(())
}

fn unknown_key(key: &str) -> PacwiseError {
    PacwiseError::ConfigError(format!(
        "Unknown setting: '{}'. Valid settings: {}",
        key,
        KEYS.join(", ")
    ))
}

fn invalid(key: &str, value: &str, valid: &str) -> PacwiseError {
    PacwiseError::ConfigError(format!(
        "Invalid value for '{}': '{}'. Valid: {}",
        key, value, valid
    ))
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    match value.to_lowercase().as_str() {
        "true" | "yes" | "on" => Ok(true),
        "false" | "no" | "off" => Ok(false),
        _ => Err(invalid(key, value, "true, false")),
    }
}

fn apply(config: &mut Config, key: &str, value: &str) -> Result<()> {
    match key {
        "preferred-helper" => {
            config.preferred_helper = value
                .parse::<Tool>()
                .map_err(|_| invalid(key, value, "pacman, yay, paru"))?;
        }
        "auto-install-helper" => config.auto_install_helper = parse_bool(key, value)?,
        "max-results" => {
            let n: usize = value
                .parse()
                .map_err(|_| invalid(key, value, &format!("1-{}", MAX_RESULTS)))?;
            if !(1..=MAX_RESULTS).contains(&n) {
                return Err(invalid(key, value, &format!("1-{}", MAX_RESULTS)));
            }
            config.max_results = n;
        }
        "confirm-before-action" => config.confirm_before_action = parse_bool(key, value)?,
        "noconfirm" => config.noconfirm = parse_bool(key, value)?,
        "search-cutoff" => {
            let cutoff: f64 = value
                .parse()
                .map_err(|_| invalid(key, value, "a number between 0 and 1"))?;
            if !(0.0..=1.0).contains(&cutoff) {
                return Err(invalid(key, value, "a number between 0 and 1"));
            }
            config.search_cutoff = cutoff;
        }
        "max-retries" => {
            let n: u32 = value
                .parse()
                .map_err(|_| invalid(key, value, "a positive integer"))?;
            if n == 0 {
                return Err(invalid(key, value, "a positive integer"));
            }
            config.max_retries = n;
        }
        "backup-before-operations" => config.backup_before_operations = parse_bool(key, value)?,
        "aur-search" => config.aur_search = parse_bool(key, value)?,
        "color" => {
            config.color = value
                .parse::<ColorMode>()
                .map_err(|_| invalid(key, value, "auto, always, never"))?;
        }
        _ => {}
    }
    Ok(())
}
