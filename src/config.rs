//! Game configuration.
//!
//! Loaded from TOML; every field has a default so an empty file is valid.
//!
//! ```toml
//! log_filter = "cup_match=debug"
//! auto_record = true
//!
//! [store]
//! kind = "csv"
//! path = "results.csv"
//! ```

use crate::record::{CsvStore, MemoryStore, ResultStore};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Where results are recorded.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum StoreConfig {
    /// Keep results in process memory
    #[default]
    Memory,
    /// Append results to a CSV file
    Csv { path: PathBuf },
}

impl StoreConfig {
    /// Open the configured store.
    pub fn open(&self) -> Arc<dyn ResultStore> {
        match self {
            Self::Memory => Arc::new(MemoryStore::new()),
            Self::Csv { path } => Arc::new(CsvStore::new(path.clone())),
        }
    }
}

/// Top-level configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// `tracing` filter directive; `RUST_LOG` takes precedence
    pub log_filter: String,
    /// Record anonymously as soon as a game is solved
    pub auto_record: bool,
    pub store: StoreConfig,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            log_filter: "info".to_string(),
            auto_record: false,
            store: StoreConfig::default(),
        }
    }
}

impl GameConfig {
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }
}
