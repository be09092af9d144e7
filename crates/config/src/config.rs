//! Configuration structures and loading

use serde::{Deserialize, Serialize};
use stagehand_core::{Error, Result};
use std::path::Path;

/// Top-level stagehand configuration
///
/// Example `stagehand.toml`:
///
/// ```toml
/// namespace = "deploy"
///
/// [hooks]
/// accepted = ["nightly", "canary"]
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Namespace prepended to hook names at dispatch time
    /// (`deploy` turns `after` into `deploy/after`)
    pub namespace: String,

    /// Hook gate settings
    pub hooks: HooksConfig,
}

/// Hook gate settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HooksConfig {
    /// Hook names accepted in addition to the built-in set
    pub accepted: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            namespace: "deploy".to_string(),
            hooks: HooksConfig::default(),
        }
    }
}

impl Config {
    /// Parse configuration from a TOML string
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::Config(e.to_string()))
    }

    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        tracing::debug!(path = %path.display(), "Loading configuration");
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Load configuration from the default location
    ///
    /// A missing file is not an error; defaults apply.
    pub fn load_default() -> Result<Self> {
        match crate::dirs::default_config_path() {
            Some(path) if path.exists() => Self::load(&path),
            _ => {
                tracing::debug!("No configuration file found, using defaults");
                Ok(Self::default())
            }
        }
    }
}
