//! Proxy configuration loaded from YAML with built-in defaults.

use std::{fs, path::Path};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

/// Base URL of the public GIM TEC forecast service.
pub const DEFAULT_UPSTREAM_URL: &str = "https://services.simurg.space/gim-tec-forecast";

/// Address the proxy listens on when nothing else is configured.
pub const DEFAULT_LISTEN: &str = "127.0.0.1:8000";

/// Errors that can occur when loading or processing configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O error while reading the config file.
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
    /// YAML parsing error.
    #[error("yaml: {0}")]
    Yaml(#[from] serde_yaml::Error),
    /// Upstream URL could not be parsed.
    #[error("url: {0}")]
    Url(#[from] url::ParseError),
}

/// Proxy settings.
///
/// Every key is optional in the file; missing keys take the defaults above.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ProxyConfig {
    /// Address to bind the HTTP listener to.
    pub listen: String,
    /// Base URL of the upstream forecast service.
    pub upstream_url: String,
}

impl Default for ProxyConfig {
    fn default() -> Self {
        Self { listen: DEFAULT_LISTEN.to_string(), upstream_url: DEFAULT_UPSTREAM_URL.to_string() }
    }
}

impl ProxyConfig {
    /// Load configuration from a YAML file.
    ///
    /// # Parameters
    ///
    /// - `path` - Path to the YAML config file
    ///
    /// # Returns
    ///
    /// Returns `Ok(ProxyConfig)` on success, or `ConfigError` if the file cannot be read or parsed.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let txt = fs::read_to_string(path)?;
        // An empty file deserializes to unit, not to a mapping.
        if txt.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_str(&txt)?;
        config.upstream_url()?;
        Ok(config)
    }

    /// Override the listen address.
    pub fn with_listen(mut self, listen: impl Into<String>) -> Self {
        self.listen = listen.into();
        self
    }

    /// Override the upstream base URL.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Url` if `upstream_url` is not an absolute URL.
    pub fn with_upstream_url(mut self, upstream_url: &str) -> Result<Self, ConfigError> {
        Url::parse(upstream_url)?;
        self.upstream_url = upstream_url.to_string();
        Ok(self)
    }

    /// Parse the configured upstream base URL.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Url` if the stored value is not an absolute URL.
    pub fn upstream_url(&self) -> Result<Url, ConfigError> {
        Ok(Url::parse(&self.upstream_url)?)
    }
}
