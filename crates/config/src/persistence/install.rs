//! Installation of the built-in default document as a user config file.

use std::io::{ErrorKind, Write};
use std::path::Path;

use tempfile::NamedTempFile;

use super::path::user_config_path;
use crate::constants::DEFAULT_CONFIG;
use crate::loader::ConfigError;

/// Install the built-in default document at the user config path if missing.
///
/// Returns `true` if a file was written, `false` if one already existed.
pub fn ensure_user_config_exists() -> Result<bool, ConfigError> {
    ensure_config_exists_at(&user_config_path()?)
}

/// Install the built-in default document at `path` if nothing exists there.
///
/// Parent directories are created as needed. The document is written to a
/// temporary sibling first and then published without replacing anything, so
/// readers never observe a partially written file and a file created by
/// another process in the meantime is left untouched.
pub fn ensure_config_exists_at(path: &Path) -> Result<bool, ConfigError> {
    if path.exists() {
        return Ok(false);
    }

    let write_error = |source: std::io::Error| ConfigError::FileWrite {
        path: path.to_path_buf(),
        source,
    };

    let parent = path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    std::fs::create_dir_all(parent).map_err(write_error)?;

    let mut temp = NamedTempFile::new_in(parent).map_err(write_error)?;
    temp.write_all(DEFAULT_CONFIG.as_bytes())
        .and_then(|()| temp.flush())
        .map_err(write_error)?;

    match temp.persist_noclobber(path) {
        Ok(_) => {}
        Err(err) if err.error.kind() == ErrorKind::AlreadyExists => {
            tracing::debug!(path = %path.display(), "Config file appeared during install");
            return Ok(false);
        }
        Err(err) => return Err(write_error(err.error)),
    }

    tracing::warn!(
        path = %path.display(),
        "Installed default config file"
    );

    Ok(true)
}
