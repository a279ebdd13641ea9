//! ConfigLoader facade delegating to merge service.

use super::merge::service::MergeService;
use super::AcpConfig;
use crate::error::ApiError;
use std::path::Path;

/// Configuration loader facade.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from the global file and environment.
    pub fn load() -> Result<AcpConfig, ApiError> {
        Self::checked(MergeService::load()?)
    }

    /// Load configuration from a specific file.
    pub fn load_from_file(path: &Path) -> Result<AcpConfig, ApiError> {
        Self::checked(MergeService::load_from_file(path)?)
    }

    fn checked(config: AcpConfig) -> Result<AcpConfig, ApiError> {
        config.search.validate().map_err(ApiError::ConfigError)?;
        Ok(config)
    }
}
