//! User config file location and installation.
//!
//! Responsibilities:
//! - Resolve the per-user config file path (`~/.qingcloud/config.yaml`).
//! - Expand a leading `~/` in caller-supplied paths.
//! - Install a copy of the built-in default document when the user file is missing.
//!
//! Does NOT handle:
//! - Decoding config files (see `loader` module).
//!
//! Invariants:
//! - Loading never writes to disk; installation only happens through
//!   [`ensure_user_config_exists`].
//! - Installation is atomic (temp file published without clobbering) and
//!   never overwrites an existing file, even one created concurrently.

mod install;
mod path;

pub use install::{ensure_config_exists_at, ensure_user_config_exists};
pub use path::{expand_home, user_config_path};
