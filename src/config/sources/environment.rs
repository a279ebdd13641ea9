//! Environment variable sources: ACP__* overlay and the SEARCH_URL override.

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::ConfigError;
use config::Environment;

/// Variable that overrides the search endpoint URL.
pub const SEARCH_URL_ENV: &str = "SEARCH_URL";

/// Add environment variable overlay to builder.
/// Uses ACP prefix and __ as separator for nested keys (ACP__SEARCH__TIMEOUT_SECS).
pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let builder = builder.add_source(
        Environment::with_prefix("ACP")
            .separator("__")
            .try_parsing(true),
    );
    Ok(builder)
}

/// Apply `SEARCH_URL` on top of every other source. Empty values are ignored.
pub fn add_search_url_override(
    builder: ConfigBuilder<DefaultState>,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    match std::env::var(SEARCH_URL_ENV) {
        Ok(url) if !url.trim().is_empty() => builder.set_override("search.url", url),
        _ => Ok(builder),
    }
}
