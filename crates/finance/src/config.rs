//! Remote target configuration.

use crate::{Error, Result};
use reqwest::Url;
use serde::Deserialize;
use std::time::Duration;

pub const DEFAULT_ENDPOINT_URL: &str = "http://localhost:7860";
pub const DEFAULT_RUN_ID: &str = "666cad48-1b9f-4c40-b5fd-21dbd50dc05c";
pub const DEFAULT_TIMEOUT_MS: u64 = 120_000;

/// Components of the default flow. Each is sent with an empty tweak object.
pub const DEFAULT_TWEAKS: [&str; 6] = [
    "ChatInput-rIbgA",
    "ChatOutput-oaNin",
    "ParseData-TP3z7",
    "File-rZLa5",
    "Prompt-BlK5R",
    "AnthropicModel-0Sjx5",
];

/// Where and how the finance flow is run.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FinanceConfig {
    /// Base URL of the inference service.
    #[serde(default = "default_endpoint_url")]
    pub endpoint_url: String,

    /// Identifier of the flow to run.
    #[serde(default = "default_run_id")]
    pub run_id: String,

    /// Request deadline in milliseconds. `0` disables the deadline.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// Component ids of the flow, passed through as empty tweaks.
    #[serde(default = "default_tweaks")]
    pub tweaks: Vec<String>,
}

fn default_endpoint_url() -> String {
    DEFAULT_ENDPOINT_URL.to_string()
}

fn default_run_id() -> String {
    DEFAULT_RUN_ID.to_string()
}

fn default_timeout_ms() -> u64 {
    DEFAULT_TIMEOUT_MS
}

fn default_tweaks() -> Vec<String> {
    DEFAULT_TWEAKS.iter().map(|t| t.to_string()).collect()
}

impl Default for FinanceConfig {
    fn default() -> Self {
        Self {
            endpoint_url: default_endpoint_url(),
            run_id: default_run_id(),
            timeout_ms: default_timeout_ms(),
            tweaks: default_tweaks(),
        }
    }
}

impl FinanceConfig {
    /// Full URL of the run endpoint, including `stream=false`.
    pub fn run_url(&self) -> Result<Url> {
        let run_id = self.run_id.trim();
        if run_id.is_empty() {
            return Err(Error::Config("run_id must not be empty".into()));
        }

        let base = self.endpoint_url.trim_end_matches('/');
        let mut url = Url::parse(&format!("{base}/api/v1/run/{run_id}")).map_err(|e| {
            Error::Config(format!("invalid endpoint_url '{}': {e}", self.endpoint_url))
        })?;
        url.query_pairs_mut().append_pair("stream", "false");
        Ok(url)
    }

    /// The request deadline, if one is configured.
    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_ms > 0).then(|| Duration::from_millis(self.timeout_ms))
    }
}
