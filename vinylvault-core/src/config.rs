//! Settings loading: YAML file, then environment overrides.
//!
//! Environment variables:
//! - `VINYLVAULT_DATABASE_URL`: replaces `db_url` from the file
//! - `VINYLVAULT_PORT`: replaces `port` from the file
//!
//! Settings are built once at startup and passed by value to the connection
//! manager and router.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Deserializer, Serialize};
use url::Url;

use crate::error::{Result, VaultError};

pub const DATABASE_URL_ENV: &str = "VINYLVAULT_DATABASE_URL";
pub const PORT_ENV: &str = "VINYLVAULT_PORT";
pub const CONFIG_PATH_ENV: &str = "VINYLVAULT_CONFIG";
pub const DEFAULT_CONFIG_PATH: &str = "config.yml";

/// Service settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// PostgreSQL connection string
    #[serde(rename = "db_url", default)]
    pub database_url: String,

    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port", deserialize_with = "port_from_yaml")]
    pub port: u16,

    /// Upper bound on pooled connections
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_max_connections() -> u32 {
    5
}

/// Ports are commonly written quoted in YAML (`port: "8080"`), accept both.
fn port_from_yaml<'de, D>(deserializer: D) -> std::result::Result<u16, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawPort {
        Number(u16),
        Text(String),
    }

    match RawPort::deserialize(deserializer)? {
        RawPort::Number(port) => Ok(port),
        RawPort::Text(text) => text.trim().parse().map_err(serde::de::Error::custom),
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            database_url: String::new(),
            host: default_host(),
            port: default_port(),
            max_connections: default_max_connections(),
        }
    }
}

impl Settings {
    /// Load settings from a YAML file and the process environment.
    ///
    /// Fails if the file is unreadable or malformed, if an override is
    /// unusable, or if no database URL ends up configured.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| VaultError::read_config(path, e))?;

        let mut settings = Self::from_yaml_str(&content, path)?;
        settings.apply_overrides(|key| std::env::var(key).ok())?;
        settings.validate()?;

        tracing::debug!(
            path = %path.display(),
            host = %settings.host,
            port = settings.port,
            "Settings loaded"
        );
        Ok(settings)
    }

    /// Parse settings from YAML text. `origin` is only used in errors.
    pub fn from_yaml_str(content: &str, origin: impl AsRef<Path>) -> Result<Self> {
        serde_yaml::from_str(content)
            .map_err(|e| VaultError::parse_config(origin.as_ref(), e))
    }

    /// Replace file values with environment values where set.
    ///
    /// `lookup` resolves a variable name; [`Settings::load`] passes
    /// `std::env::var`, tests pass a map.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(DATABASE_URL_ENV) {
            self.database_url = url;
        }

        if let Some(port) = lookup(PORT_ENV) {
            self.port = port
                .trim()
                .parse()
                .map_err(|e: std::num::ParseIntError| {
                    VaultError::invalid_override(PORT_ENV, port.as_str(), e.to_string())
                })?;
        }

        Ok(())
    }

    /// Check that the settings can start a server
    pub fn validate(&self) -> Result<()> {
        if self.database_url.trim().is_empty() {
            return Err(VaultError::MissingSetting {
                key: "db_url",
                var: DATABASE_URL_ENV,
            });
        }
        Ok(())
    }

    /// `host:port` for the listener
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Copy with the database password masked, for display
    pub fn redacted(&self) -> Self {
        Self {
            database_url: redact_url(&self.database_url),
            ..self.clone()
        }
    }

    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|source| VaultError::SerializeConfig { source })
    }
}

fn redact_url(raw: &str) -> String {
    match Url::parse(raw) {
        Ok(mut url) if url.password().is_some() => {
            // Only fails for cannot-be-a-base URLs, which carry no password.
            let _ = url.set_password(Some("****"));
            url.to_string()
        }
        _ => raw.to_string(),
    }
}
