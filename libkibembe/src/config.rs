use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Kibembe-specific configuration that extends the base `Config` from core.
///
/// This configuration includes:
/// - All generic options from `kibembe_core::Config` (flattened via serde)
/// - Location of the persistent history database
/// - Default log filter for the command-line front end
///
/// # Example
///
/// ```rust
/// use libkibembe::KibembeConfig;
///
/// let config = KibembeConfig::from_toml_str("history_limit = 5\n").unwrap();
/// assert_eq!(config.base().history_limit, 5);
/// assert_eq!(config.log_filter, "warn");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct KibembeConfig {
    /// Base configuration fields (history size and key)
    #[serde(flatten)]
    pub base: kibembe_core::Config,

    /// History database file; `None` means `$HOME/.kibembe/history.redb`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub history_path: Option<PathBuf>,

    /// `tracing` filter used when `KIBEMBE_LOG` is not set
    pub log_filter: String,
}

impl Default for KibembeConfig {
    fn default() -> Self {
        Self {
            base: kibembe_core::Config::default(),
            history_path: None,
            log_filter: "warn".to_string(),
        }
    }
}

impl KibembeConfig {
    /// Load configuration from a TOML file.
    pub fn load_toml<P: AsRef<Path>>(
        path: P,
    ) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self::from_toml_str(&content)?)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Convert this config into the base config
    pub fn into_base(self) -> kibembe_core::Config {
        self.base
    }

    /// Get a reference to the base config
    pub fn base(&self) -> &kibembe_core::Config {
        &self.base
    }

    /// Get a mutable reference to the base config
    pub fn base_mut(&mut self) -> &mut kibembe_core::Config {
        &mut self.base
    }

    /// The configured history file, or the per-user default.
    pub fn resolved_history_path(&self) -> PathBuf {
        self.history_path
            .clone()
            .unwrap_or_else(default_history_path)
    }
}

/// `$HOME/.kibembe/history.redb`, falling back to `USERPROFILE` and then the
/// current directory.
pub fn default_history_path() -> PathBuf {
    let home = std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .unwrap_or_else(|_| ".".to_string());
    PathBuf::from(home).join(".kibembe").join("history.redb")
}
