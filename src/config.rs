//! Desk configuration
//!
//! Configuration is optional. Without a file the desk uses the compiled-in
//! seed catalog and master table, stores data under `billing_data/` in the
//! current directory, and records purchases in SQLite.
//!
//! ```toml
//! data_dir = "billing_data"
//! sink = "csv"
//!
//! [[catalog]]
//! name = "Milk"
//! price = "45"
//!
//! [[master]]
//! name = "Apple"
//! price = "120"
//! ```
//!
//! Command-line flags override file values, see [`Config::apply_overrides`].

use crate::core::seed::{default_catalog, default_master};
use crate::sink::SinkKind;
use crate::types::{BillingError, CatalogEntry, MasterIngredient};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Default data directory, relative to the working directory
pub const DEFAULT_DATA_DIR: &str = "billing_data";

/// Config file looked up inside the data directory when `--config` is absent
pub const CONFIG_FILE_NAME: &str = "billing.toml";

/// Folder under the data directory holding per-date bill logs
pub const HISTORY_DIR_NAME: &str = "billing_history";

/// Raw file contents; every field is optional
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    data_dir: Option<PathBuf>,
    sink: Option<SinkKind>,
    catalog: Option<Vec<CatalogEntry>>,
    master: Option<Vec<MasterIngredient>>,
}

/// Resolved desk configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Directory holding history and purchase storage
    pub data_dir: PathBuf,
    /// Purchase storage backend
    pub sink: SinkKind,
    /// Items offered when the desk opens
    pub catalog: Vec<CatalogEntry>,
    /// Ingredients searched by the suggestion box
    pub master: Vec<MasterIngredient>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            sink: SinkKind::default(),
            catalog: default_catalog(),
            master: default_master(),
        }
    }
}

impl Config {
    /// Parse configuration from TOML text, filling gaps with defaults
    ///
    /// # Errors
    ///
    /// Returns `BillingError::ConfigError` for malformed TOML, unknown keys,
    /// unknown sink names, or duplicate item names.
    pub fn from_toml(text: &str) -> Result<Self, BillingError> {
        let file: ConfigFile = toml::from_str(text)?;
        let defaults = Config::default();

        let config = Config {
            data_dir: file.data_dir.unwrap_or(defaults.data_dir),
            sink: file.sink.unwrap_or(defaults.sink),
            catalog: file.catalog.unwrap_or(defaults.catalog),
            master: file.master.unwrap_or(defaults.master),
        };
        config.validate()?;
        Ok(config)
    }

    /// Load configuration
    ///
    /// An explicit path must exist. Without one, `billing.toml` inside the
    /// data directory (the override if given, else the default) is used when
    /// present, and built-in defaults otherwise.
    ///
    /// # Errors
    ///
    /// Returns an error if an explicit file is missing or any file found is
    /// unreadable or invalid.
    pub fn load(explicit: Option<&Path>, data_dir: Option<&Path>) -> Result<Self, BillingError> {
        let path = match explicit {
            Some(path) => Some(path.to_path_buf()),
            None => {
                let dir = data_dir.unwrap_or_else(|| Path::new(DEFAULT_DATA_DIR));
                let candidate = dir.join(CONFIG_FILE_NAME);
                candidate.is_file().then_some(candidate)
            }
        };

        match path {
            Some(path) => {
                log::debug!("Loading config from {}", path.display());
                let text = fs::read_to_string(&path).map_err(|e| BillingError::ConfigError {
                    path: Some(path.display().to_string()),
                    message: e.to_string(),
                })?;
                Config::from_toml(&text).map_err(|e| e.with_config_path(&path))
            }
            None => Ok(Config::default()),
        }
    }

    /// Apply command-line overrides
    pub fn apply_overrides(&mut self, data_dir: Option<&Path>, sink: Option<SinkKind>) {
        if let Some(dir) = data_dir {
            self.data_dir = dir.to_path_buf();
        }
        if let Some(sink) = sink {
            self.sink = sink;
        }
    }

    /// Directory holding per-date bill logs
    pub fn history_dir(&self) -> PathBuf {
        self.data_dir.join(HISTORY_DIR_NAME)
    }

    fn validate(&self) -> Result<(), BillingError> {
        check_unique("catalog", self.catalog.iter().map(|e| e.name.as_str()))?;
        check_unique("master", self.master.iter().map(|m| m.name.as_str()))?;

        // the master table must cover every seeded catalog item
        for entry in &self.catalog {
            if !self.master.iter().any(|m| m.name == entry.name) {
                return Err(BillingError::ConfigError {
                    path: None,
                    message: format!("catalog item '{}' is missing from master", entry.name),
                });
            }
        }
        Ok(())
    }
}

fn check_unique<'a>(
    table: &str,
    names: impl Iterator<Item = &'a str>,
) -> Result<(), BillingError> {
    let mut seen = std::collections::HashSet::new();
    for name in names {
        if name.trim().is_empty() {
            return Err(BillingError::ConfigError {
                path: None,
                message: format!("empty item name in {}", table),
            });
        }
        if !seen.insert(name) {
            return Err(BillingError::ConfigError {
                path: None,
                message: format!("duplicate item '{}' in {}", name, table),
            });
        }
    }
    Ok(())
}
