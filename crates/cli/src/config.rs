//! Configuration loading from statement-qa.toml.

use finance::FinanceConfig;
use serde::Deserialize;
use std::path::Path;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Remote inference service the tool forwards queries to.
    #[serde(default)]
    pub remote: FinanceConfig,
}

/// Values given on the command line or through the environment.
///
/// Each one replaces the corresponding file value.
#[derive(Debug, Default)]
pub struct Overrides {
    pub endpoint_url: Option<String>,
    pub run_id: Option<String>,
    pub timeout_ms: Option<u64>,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::parse(&content)
    }

    /// Parse configuration from TOML string.
    pub fn parse(toml: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load `path` if it exists, otherwise start from defaults.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn apply(mut self, overrides: Overrides) -> Self {
        if let Some(url) = overrides.endpoint_url {
            self.remote.endpoint_url = url;
        }
        if let Some(run_id) = overrides.run_id {
            self.remote.run_id = run_id;
        }
        if let Some(timeout_ms) = overrides.timeout_ms {
            self.remote.timeout_ms = timeout_ms;
        }
        self
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(String),
}
