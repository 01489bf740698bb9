use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by the demo binary
#[derive(Debug, Error)]
pub enum TypeaheadError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Lookup for {query:?} did not settle within {timeout_ms}ms")]
    LookupTimeout { query: String, timeout_ms: u64 },
}

/// Errors raised while loading the configuration file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
