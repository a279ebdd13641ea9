//! MergeService: orchestrates sources, applies merge policy, deserializes to AcpConfig.

use crate::config::sources::{environment, global_file};
use crate::config::AcpConfig;
use config::ConfigError;
use config::File;
use std::path::Path;

use super::merge_policy;

/// Merge service for config composition.
pub struct MergeService;

impl MergeService {
    /// Load config from standard sources.
    /// Precedence: defaults (lowest) -> global file -> ACP__ environment -> SEARCH_URL (highest).
    pub fn load() -> Result<AcpConfig, ConfigError> {
        let builder = merge_policy::builder_with_defaults()?;
        let builder = global_file::add_to_builder(builder)?;
        let builder = environment::add_to_builder(builder)?;
        let builder = environment::add_search_url_override(builder)?;

        let config = builder.build()?;
        config.try_deserialize()
    }

    /// Load config from a specific file with environment overlay.
    pub fn load_from_file(path: &Path) -> Result<AcpConfig, ConfigError> {
        let builder = merge_policy::builder_with_defaults()?;
        let builder = builder.add_source(File::from(path).required(true));
        let builder = environment::add_to_builder(builder)?;
        let builder = environment::add_search_url_override(builder)?;

        let config = builder.build()?;
        config.try_deserialize()
    }
}
