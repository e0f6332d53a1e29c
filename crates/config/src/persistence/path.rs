//! Path helpers for configuration file locations.
//!
//! Responsibilities:
//! - Determine the user config file path.
//! - Use the `directories` crate to locate the home directory.
//!
//! Does NOT handle:
//! - File I/O operations.

use std::path::{Path, PathBuf};

use crate::constants::{HOME_PREFIX, USER_CONFIG_DIR, USER_CONFIG_FILE};
use crate::loader::ConfigError;

fn home_dir() -> Result<PathBuf, ConfigError> {
    directories::BaseDirs::new()
        .map(|dirs| dirs.home_dir().to_path_buf())
        .ok_or(ConfigError::HomeDirUnavailable)
}

/// Returns the path to the user config file.
///
/// - Linux/macOS: `~/.qingcloud/config.yaml`
/// - Windows: `%USERPROFILE%\.qingcloud\config.yaml`
pub fn user_config_path() -> Result<PathBuf, ConfigError> {
    Ok(user_config_path_in(&home_dir()?))
}

fn user_config_path_in(home: &Path) -> PathBuf {
    home.join(USER_CONFIG_DIR).join(USER_CONFIG_FILE)
}

/// Expand a leading `~/` to the home directory.
///
/// Paths without that prefix are returned unchanged, and the home directory is
/// only resolved when it is actually needed.
pub fn expand_home(path: &Path) -> Result<PathBuf, ConfigError> {
    match path.strip_prefix(HOME_PREFIX) {
        Ok(rest) if path.components().count() > 1 => Ok(home_dir()?.join(rest)),
        _ => Ok(path.to_path_buf()),
    }
}
