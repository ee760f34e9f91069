//! kibembe-core
//!
//! Language-agnostic pieces shared by the Kibembe translator crates:
//! configuration and the rolling translation history.
//!
//! Public API:
//! - `Config` - History sizing and storage key, (de)serializable from TOML
//! - `History` - Most-recent-first translation history (in-memory or redb)
//! - `HistoryRecord` - One `{input, output, timestamp}` entry
//! - `HistoryError` - Persistence failures
use serde::{Deserialize, Serialize};

pub mod history;
pub use history::{History, HistoryError, HistoryRecord, InMemoryHistory, RedbHistory};

/// Default number of records kept in the translation history.
pub const DEFAULT_HISTORY_LIMIT: usize = 10;

/// Default key under which the history list is stored.
pub const DEFAULT_HISTORY_KEY: &str = "kibembeTranslationHistory";

/// Generic configuration for the translator front end.
///
/// This config contains only language-agnostic fields. Options tied to the
/// Kibembe crate (history file location, log filter) live in `KibembeConfig`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Maximum number of records kept in the history (oldest dropped first)
    pub history_limit: usize,

    /// Fixed key of the history list inside the key-value store
    pub history_key: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            history_limit: DEFAULT_HISTORY_LIMIT,
            history_key: DEFAULT_HISTORY_KEY.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load_toml<P: AsRef<std::path::Path>>(
        path: P,
    ) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a TOML file.
    pub fn save_toml<P: AsRef<std::path::Path>>(
        &self,
        path: P,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Load configuration from TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Serialize configuration to TOML string.
    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
