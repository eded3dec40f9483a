use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PatternError {
    #[error("Unrecognized {kind} variant: '{tag}'")]
    UnrecognizedVariant { kind: &'static str, tag: String },

    #[error("Failed to read config file {}: {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Invalid log filter '{filter}': {reason}")]
    InvalidLogFilter { filter: String, reason: String },
}

impl PatternError {
    pub fn unrecognized(kind: &'static str, tag: impl Into<String>) -> Self {
        Self::UnrecognizedVariant {
            kind,
            tag: tag.into(),
        }
    }
}
