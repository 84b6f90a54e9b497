//! Configuration loading from files and environment variables

use crate::error::{Error, Result};
use config::{Config as ConfigLib, Environment, File};
use std::path::Path;
use tracing::debug;

use super::{global_config_path, local_config_path, Config};

impl Config {
    /// Loads configuration from a TOML file with environment variable overrides
    ///
    /// Environment variables are prefixed with `TASTEBENCH_` and use double
    /// underscores for nested values. For example:
    /// - `TASTEBENCH_QA__SENTINEL_POLICY=exclude`
    /// - `TASTEBENCH_SUBSTITUTES__FREQUENT_VOCABULARY_SIZE=500`
    pub fn from_file(path: &Path) -> Result<Self> {
        let mut builder = ConfigLib::builder();

        // Every section is fully defaulted, so a missing file is not an error
        if path.exists() {
            builder = builder.add_source(File::from(path));
        }

        builder = builder.add_source(
            Environment::with_prefix("TASTEBENCH")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder
            .build()
            .map_err(|e| Error::config(format!("Failed to build config: {e}")))?;

        config
            .try_deserialize()
            .map_err(|e| Error::config(format!("Failed to deserialize config: {e}")))
    }

    /// Creates a config from a TOML string (useful for testing)
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::config(format!("Failed to parse TOML: {e}")))
    }

    /// Load configuration from a single file
    ///
    /// Precedence (lowest to highest):
    /// 1. Hardcoded defaults
    /// 2. Config file (./tastebench.toml, ~/.tastebench/config.toml, or a
    ///    custom --config path)
    /// 3. Environment variables (TASTEBENCH_*)
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let path = match config_path {
            Some(p) => {
                if !p.exists() {
                    return Err(Error::config(format!(
                        "Configuration file {} not found",
                        p.display()
                    )));
                }
                p.to_path_buf()
            }
            None => {
                let local = local_config_path();
                if local.exists() {
                    local
                } else {
                    global_config_path()?
                }
            }
        };
        debug!("Loading configuration from {}", path.display());
        Self::from_file(&path)
    }
}
