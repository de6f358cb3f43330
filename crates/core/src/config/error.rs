//! Error types for configuration loading.
//!
//! This module defines all errors that can occur while locating, reading,
//! decoding and parsing the configuration file.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("Failed to read config file at {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The file bytes are not valid UTF-8.
    #[error("Failed to decode config file at {path} as UTF-8: {source}")]
    Decode {
        path: PathBuf,
        source: std::string::FromUtf8Error,
    },

    /// The file content is not valid JSON.
    #[error("Failed to parse JSON file at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// The directory of the running executable could not be determined.
    #[error("Failed to locate the directory of the running executable: {source}")]
    ExecutableDir { source: std::io::Error },
}

/// Type alias for Result with ConfigError.
pub type ConfigResult<T> = Result<T, ConfigError>;
