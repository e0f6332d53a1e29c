//! Error types for configuration loading.
//!
//! Responsibilities:
//! - Define error variants for every resolver failure (endpoint, decode, file I/O).
//! - Provide conversions from lower-level errors (`serde_yaml`, `reqwest`).
//!
//! Invariants:
//! - All error variants include context for debugging (endpoint strings, paths).
//! - Variants never carry credential values.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while resolving a configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid endpoint URL '{endpoint}': {source}")]
    UrlParse {
        endpoint: String,
        #[source]
        source: url::ParseError,
    },

    #[error("Endpoint '{endpoint}' must include an explicit port (e.g. https://api.example.com:443)")]
    MissingPort { endpoint: String },

    #[error("Unsupported protocol '{0}', expected http or https")]
    UnsupportedProtocol(String),

    #[error("Failed to decode configuration: {0}")]
    Decode(#[from] serde_yaml::Error),

    #[error("Invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },

    #[error("Failed to read config file at {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write config file at {path}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unable to determine home directory")]
    HomeDirUnavailable,

    #[error("Failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
}
