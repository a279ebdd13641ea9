//! Configuration for the `acp` CLI.
//!
//! Sources are layered with the `config` crate: built-in defaults, the global
//! TOML file, `ACP__*` environment variables, then the `SEARCH_URL` override.

pub mod facade;
pub mod merge;
pub mod paths;
pub mod sources;

pub use facade::ConfigLoader;

use crate::logging::LoggingConfig;
use crate::search::DEFAULT_SEARCH_URL;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default total request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AcpConfig {
    #[serde(default)]
    pub search: SearchConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Search endpoint settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Search endpoint URL
    #[serde(default = "default_search_url")]
    pub url: String,

    /// Total request timeout in seconds; 0 waits indefinitely
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_search_url() -> String {
    DEFAULT_SEARCH_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            url: default_search_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl SearchConfig {
    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_secs > 0).then(|| Duration::from_secs(self.timeout_secs))
    }

    pub fn validate(&self) -> Result<(), String> {
        let url = self.url.trim();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(format!("Invalid search URL: {}", self.url));
        }
        Ok(())
    }
}
