//! Configuration file loader for `data.json`.
//!
//! The editor writes the pipeline description next to the launcher binary
//! and starts the launcher without arguments, so the default location is
//! derived from the running executable. [`load_config`] itself always takes
//! an explicit path.

use crate::config::error::ConfigError;
use crate::config::error::ConfigResult;
use serde_json::Value;
use std::path::Path;
use std::path::PathBuf;
use tracing::debug;
use tracing::error;

/// File name of the configuration written by the editor.
pub const DEFAULT_CONFIG_FILE: &str = "data.json";

/// Returns the default configuration path: `data.json` in the directory of
/// the running executable.
///
/// # Errors
///
/// Returns `ConfigError::ExecutableDir` if the executable path cannot be
/// resolved or has no parent directory.
pub fn default_config_path() -> ConfigResult<PathBuf> {
    let exe = std::env::current_exe().map_err(|source| ConfigError::ExecutableDir { source })?;
    let dir = exe.parent().ok_or_else(|| ConfigError::ExecutableDir {
        source: std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("{} has no parent directory", exe.display()),
        ),
    })?;
    Ok(dir.join(DEFAULT_CONFIG_FILE))
}

/// Loads and parses the configuration file at `path`.
///
/// The file is read in one scoped call, decoded as UTF-8 and parsed as JSON.
/// Any top-level shape is accepted; no schema is enforced here.
///
/// # Errors
///
/// Returns `ConfigError` if:
/// - The file cannot be read (`FileRead`)
/// - The bytes are not valid UTF-8 (`Decode`)
/// - The text is not valid JSON (`Parse`)
///
/// Each failure is logged once, naming the file and the cause, before it is
/// returned.
///
/// # Example
///
/// ```rust,no_run
/// use rl_core::config::loader::load_config;
/// use std::path::Path;
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = load_config(Path::new("data.json"))?;
/// println!("Loaded {} top-level nodes", config.as_array().map_or(0, Vec::len));
/// # Ok(())
/// # }
/// ```
pub fn load_config(path: &Path) -> ConfigResult<Value> {
    read_config(path).inspect_err(|err| {
        error!(path = %path.display(), error = %err, "Failed to load configuration");
    })
}

fn read_config(path: &Path) -> ConfigResult<Value> {
    let bytes = std::fs::read(path).map_err(|source| ConfigError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;

    let content = String::from_utf8(bytes).map_err(|source| ConfigError::Decode {
        path: path.to_path_buf(),
        source,
    })?;

    let value: Value = serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(path = %path.display(), bytes = content.len(), "Loaded configuration");
    Ok(value)
}
