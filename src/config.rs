// Demo runner configuration, read from an optional TOML file.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing_subscriber::EnvFilter;

use crate::error::PatternError;

/// Environment variable naming the config file. Unset means defaults.
pub const CONFIG_ENV: &str = "SOLID_PATTERNS_CONFIG";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DemoConfig {
    /// Style console lines. Off keeps the output byte-exact.
    pub color: bool,
    /// `tracing` filter used when `RUST_LOG` is not set.
    pub log_filter: String,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            color: false,
            log_filter: "warn".to_string(),
        }
    }
}

impl DemoConfig {
    pub fn load() -> Result<Self, PatternError> {
        match std::env::var_os(CONFIG_ENV) {
            Some(path) => Self::from_path(Path::new(&path)),
            None => Ok(Self::default()),
        }
    }

    pub fn from_path(path: &Path) -> Result<Self, PatternError> {
        let content = fs::read_to_string(path).map_err(|source| PatternError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, PatternError> {
        let config: DemoConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), PatternError> {
        EnvFilter::try_new(&self.log_filter).map_err(|err| PatternError::InvalidLogFilter {
            filter: self.log_filter.clone(),
            reason: err.to_string(),
        })?;
        Ok(())
    }
}
