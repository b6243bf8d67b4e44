//! CLI configuration
//!
//! ```toml
//! [extract]
//! mode = "strict"
//! max_depth = 32
//!
//! [output]
//! pretty = true
//! ```

use std::path::{Path, PathBuf};

use dataex_core::{DataExError, ExtractOptions, Result};
use serde::{Deserialize, Serialize};

/// Environment variable naming a config file
pub const CONFIG_ENV_VAR: &str = "DATAEX_CONFIG";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    pub extract: ExtractOptions,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    pub pretty: bool,
}

impl CliConfig {
    /// Load configuration from file or defaults.
    ///
    /// Loading priority:
    /// 1. Explicit `config_path` (from `--config` flag), which must exist
    /// 2. `DATAEX_CONFIG` env var, skipped if the file does not exist
    /// 3. Built-in defaults
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        if let Some(path) = config_path {
            return Self::from_file(path);
        }

        match Self::env_config_path() {
            Some(path) if path.exists() => Self::from_file(&path),
            _ => Ok(Self::default()),
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self> {
        toml::from_str(contents).map_err(|e| DataExError::Config {
            message: e.to_string(),
        })
    }

    fn env_config_path() -> Option<PathBuf> {
        std::env::var_os(CONFIG_ENV_VAR).map(PathBuf::from)
    }
}
