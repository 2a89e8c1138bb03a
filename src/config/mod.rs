//! # Configuration
//!
//! User configuration stored as JSON at `<config>/pacwise/config.json`.
//! Every key is optional; missing keys take their defaults.
//!
//! - `mod.rs`: the [`Config`] struct, loading and saving
//! - `settings.rs`: string-level get/set/reset used by the `config` command

pub mod settings;

use crate::core::ranker::{DEFAULT_CUTOFF, MAX_RESULTS, Ranker};
use crate::core::selector::DEFAULT_MAX_RETRIES;
use crate::core::types::Tool;
use crate::error::{PacwiseError, Result};
use crate::utils::paths;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorMode::Auto => write!(f, "auto"),
            ColorMode::Always => write!(f, "always"),
            ColorMode::Never => write!(f, "never"),
        }
    }
}

impl FromStr for ColorMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "auto" => Ok(ColorMode::Auto),
            "always" => Ok(ColorMode::Always),
            "never" => Ok(ColorMode::Never),
            other => Err(format!("unknown color mode '{}' (expected auto, always or never)", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Config {
    /// Tool used for searches and official-repo actions when installed
    pub preferred_helper: Tool,
    /// Build an AUR helper from source when an AUR action needs one
    pub auto_install_helper: bool,
    pub max_results: usize,
    pub confirm_before_action: bool,
    /// Pass `--noconfirm` to the package manager
    pub noconfirm: bool,
    pub search_cutoff: f64,
    pub max_retries: u32,
    pub backup_before_operations: bool,
    /// Query the AUR RPC when no helper is installed
    pub aur_search: bool,
    pub color: ColorMode,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            preferred_helper: Tool::Pacman,
            auto_install_helper: false,
            max_results: MAX_RESULTS,
            confirm_before_action: true,
            noconfirm: false,
            search_cutoff: DEFAULT_CUTOFF,
            max_retries: DEFAULT_MAX_RETRIES,
            backup_before_operations: true,
            aur_search: true,
            color: ColorMode::Auto,
        }
    }
}

impl Config {
    /// Load from the default location, falling back to defaults when the
    /// file does not exist.
    pub fn load() -> Result<Self> {
        Self::load_from(&paths::config_file()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| PacwiseError::IoError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = serde_json::from_str(&content).map_err(|e| {
            PacwiseError::ConfigError(format!("{}: {}", path.display(), e))
        })?;

        Ok(config.normalized())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| PacwiseError::IoError {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let mut content = serde_json::to_string_pretty(self)?;
        content.push('\n');
        fs::write(path, content).map_err(|e| PacwiseError::IoError {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Clamp out-of-range values instead of rejecting the whole file.
    pub fn normalized(mut self) -> Self {
        self.max_results = self.max_results.clamp(1, MAX_RESULTS);
        self.search_cutoff = if self.search_cutoff.is_finite() {
            self.search_cutoff.clamp(0.0, 1.0)
        } else {
            DEFAULT_CUTOFF
        };
        self.max_retries = self.max_retries.max(1);
        self
    }

    pub fn ranker(&self) -> Ranker {
        Ranker::new(self.search_cutoff, self.max_results)
    }
}
