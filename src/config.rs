//! Configuration for the SiteLedger frontend.
//!
//! The ledger core takes no configuration; this file belongs to the terminal
//! frontend. A single optional `config.toml` under the platform config dir:
//!
//!   data_dir = "/srv/siteledger"   # where collection documents live
//!
//!   [currency]
//!   symbol = "₹"
//!
//!   [ui]
//!   color = true
//!
//! Missing file means defaults; unknown keys are warnings, not errors.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{LedgerError, LedgerResult};

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    /// Overrides the platform data dir for collection documents.
    #[serde(default)]
    pub data_dir: Option<PathBuf>,

    #[serde(default)]
    pub currency: CurrencyConfig,

    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CurrencyConfig {
    #[serde(default = "default_symbol")]
    pub symbol: String,
}

impl Default for CurrencyConfig {
    fn default() -> Self {
        CurrencyConfig {
            symbol: default_symbol(),
        }
    }
}

fn default_symbol() -> String {
    "₹".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UiConfig {
    #[serde(default = "default_true")]
    pub color: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig { color: true }
    }
}

fn default_true() -> bool {
    true
}

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown config key: {}", self.key)
    }
}

impl Config {
    /// Load configuration and collect non-fatal warnings (unknown keys).
    pub fn load(path: &Path) -> LedgerResult<(Config, Vec<ConfigWarning>)> {
        let content = fs::read_to_string(path)?;

        let mut unknown_paths: Vec<String> = Vec::new();
        let deserializer = toml::de::Deserializer::new(&content);

        let config: Config = serde_ignored::deserialize(deserializer, |p| {
            unknown_paths.push(p.to_string());
        })
        .map_err(|e| LedgerError::InvalidConfig {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let warnings = unknown_paths
            .into_iter()
            .map(|path_str| ConfigWarning {
                key: path_str
                    .split('.')
                    .next_back()
                    .unwrap_or(path_str.as_str())
                    .to_string(),
            })
            .collect();

        Ok((config, warnings))
    }

    /// Load from the default location, falling back to defaults when the file
    /// is absent or broken. A broken file is reported as a warning so a typo
    /// never locks anyone out of their ledger.
    pub fn load_or_default() -> (Config, Vec<ConfigWarning>) {
        let Some(path) = default_config_path() else {
            return (Config::default(), Vec::new());
        };
        if !path.exists() {
            return (Config::default(), Vec::new());
        }
        match Config::load(&path) {
            Ok(loaded) => loaded,
            Err(err) => {
                tracing::warn!(error = %err, "ignoring unreadable config file");
                (Config::default(), Vec::new())
            }
        }
    }
}

/// `~/.config/siteledger/config.toml` (platform equivalent).
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("siteledger").join("config.toml"))
}

/// `~/.local/share/siteledger` (platform equivalent).
pub fn default_data_dir() -> Option<PathBuf> {
    dirs::data_dir().map(|dir| dir.join("siteledger"))
}
