//! Structured error types for vinylvault-core.
//!
//! The binary (vinylvault-cli) wraps these in `anyhow` for reporting,
//! library consumers match on the variants.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for vinylvault-core operations
#[derive(Error, Debug)]
pub enum VaultError {
    /// Settings file could not be read
    #[error("Failed to read config file {path:?}: {source}")]
    ReadConfig { path: PathBuf, source: io::Error },

    /// Settings file is not valid YAML for [`crate::Settings`]
    #[error("Failed to parse config file {path:?}: {source}")]
    ParseConfig {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    /// Environment override holds a value that cannot be used
    #[error("Invalid value '{value}' for {var}: {reason}")]
    InvalidOverride {
        var: &'static str,
        value: String,
        reason: String,
    },

    /// Required setting absent from both the file and the environment
    #[error("Missing required setting '{key}' (set it in the config file or via {var})")]
    MissingSetting { key: &'static str, var: &'static str },

    /// Settings could not be rendered back to YAML
    #[error("Failed to serialize settings: {source}")]
    SerializeConfig { source: serde_yaml::Error },
}

/// Result type alias for vinylvault-core operations
pub type Result<T> = std::result::Result<T, VaultError>;

impl VaultError {
    /// Create a read error for a settings file
    pub fn read_config(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::ReadConfig {
            path: path.into(),
            source,
        }
    }

    /// Create a parse error for a settings file
    pub fn parse_config(path: impl Into<PathBuf>, source: serde_yaml::Error) -> Self {
        Self::ParseConfig {
            path: path.into(),
            source,
        }
    }

    /// Create an invalid environment override error
    pub fn invalid_override(
        var: &'static str,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidOverride {
            var,
            value: value.into(),
            reason: reason.into(),
        }
    }
}
