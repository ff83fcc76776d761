//! Configuration file support for Befund.
//!
//! Configuration is loaded from `$XDG_CONFIG_HOME/befund/config.toml`.
//! Command-line flags take precedence over anything set here.

use crate::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub catalog: CatalogConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

/// Catalog source configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CatalogConfig {
    #[serde(default = "default_csv_path")]
    pub csv_path: PathBuf,

    /// Only offer items whose `active` column is truthy
    #[serde(default)]
    pub active_only: bool,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            csv_path: default_csv_path(),
            active_only: false,
        }
    }
}

/// Report output configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_clipboard")]
    pub clipboard: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            clipboard: default_clipboard(),
        }
    }
}

// Default value functions
fn default_csv_path() -> PathBuf {
    PathBuf::from("organe.csv")
}

fn default_clipboard() -> bool {
    true
}

impl Config {
    /// Load configuration from the standard config path
    pub fn load() -> Result<Self> {
        let config_path = Self::default_config_path();
        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            tracing::info!(
                "No config file found at {:?}, using defaults",
                config_path
            );
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        tracing::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Get the default config file path
    pub fn default_config_path() -> PathBuf {
        let base = dirs::config_dir().unwrap_or_else(|| {
            std::env::var_os("HOME")
                .map(|home| PathBuf::from(home).join(".config"))
                .unwrap_or_else(|| PathBuf::from(".config"))
        });
        base.join("befund").join("config.toml")
    }
}
