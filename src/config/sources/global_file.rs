//! Global config file source: $XDG_CONFIG_HOME/acp/config.toml

use crate::config::paths::xdg_root;
use config::builder::DefaultState;
use config::ConfigBuilder;
use config::ConfigError;
use config::File;

/// Add the global config file to builder when one can be located. Missing files are skipped.
pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    match xdg_root::global_config_path() {
        Ok(path) => Ok(builder.add_source(File::from(path).required(false))),
        Err(_) => Ok(builder),
    }
}
