//! Built-in defaults at the bottom of the precedence stack.

use crate::config::DEFAULT_TIMEOUT_SECS;
use crate::search::DEFAULT_SEARCH_URL;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError};

/// Builder seeded with the built-in defaults.
pub fn builder_with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Config::builder()
        .set_default("search.url", DEFAULT_SEARCH_URL)?
        .set_default("search.timeout_secs", DEFAULT_TIMEOUT_SECS as i64)
}
