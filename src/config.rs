//! Optional TOML configuration file.
//!
//! Lives at `<config_dir>/freqtab/config.toml` (platform config dir via
//! `dirs`). Every field has a default, so a missing file is not an error;
//! a malformed one is.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::export::DEFAULT_OUTPUT_DIR;

/// Display truncation limit used when none is configured.
pub const DEFAULT_TOP_N: usize = 20;

/// User-tunable defaults for the reports.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Columns analyzed when none are given on the command line.
    /// Empty means every column in the table.
    pub columns: Vec<String>,
    /// Number of top values shown per column report.
    pub top_n: usize,
    /// Directory exported frequency tables are written to.
    pub output_dir: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            columns: Vec::new(),
            top_n: DEFAULT_TOP_N,
            output_dir: DEFAULT_OUTPUT_DIR.to_string(),
        }
    }
}

/// Locates and loads the config file.
#[derive(Clone)]
pub struct ConfigManager {
    config_dir: PathBuf,
}

impl ConfigManager {
    /// Create a ConfigManager with a custom config directory (primarily for testing)
    pub fn with_dir(config_dir: PathBuf) -> Self {
        Self { config_dir }
    }

    /// Create a ConfigManager rooted at the platform config directory.
    pub fn new(app_name: &str) -> Result<Self> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| Error::Config("could not determine config directory".to_string()))?
            .join(app_name);
        Ok(Self { config_dir })
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    pub fn config_path(&self) -> PathBuf {
        self.config_dir.join("config.toml")
    }

    /// Load the config file, falling back to defaults when it is absent.
    pub fn load(&self) -> Result<AppConfig> {
        let path = self.config_path();
        if !path.exists() {
            return Ok(AppConfig::default());
        }
        let contents = std::fs::read_to_string(&path)
            .map_err(|err| Error::Config(format!("could not read {}: {err}", path.display())))?;
        toml::from_str(&contents)
            .map_err(|err| Error::Config(format!("could not parse {}: {err}", path.display())))
    }
}
