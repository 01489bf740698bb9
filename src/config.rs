//! Configuration loading
//!
//! The config file lives at `$CONFIG_DIR/typeahead/config.toml`. A missing
//! file is not an error; every field falls back to its default.

mod types;

use std::path::{Path, PathBuf};

pub use types::{AutocompleteConfig, Config, SourceConfig, SourceKind};

use crate::error::ConfigError;

/// Default location of the config file, if the platform has a config dir
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("typeahead").join("config.toml"))
}

/// Load the config from the default location
pub fn load_config() -> Result<Config, ConfigError> {
    match config_path() {
        Some(path) if path.exists() => load_config_from(&path),
        Some(path) => {
            log::debug!("No config file at {}, using defaults", path.display());
            Ok(Config::default())
        }
        None => Ok(Config::default()),
    }
}

/// Load the config from an explicit path, which must exist
pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    toml::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
