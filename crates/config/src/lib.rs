//! Configuration management for the QingCloud SDK.
//!
//! This crate resolves SDK connection parameters from a built-in default
//! document, the per-user config file (`~/.qingcloud/config.yaml`), any YAML
//! file or in-memory buffer, and explicit overrides, and attaches a
//! ready-to-use HTTP client to the result.
//!
//! ```rust,no_run
//! use qingcloud_config::{Config, ensure_user_config_exists};
//!
//! # fn main() -> Result<(), qingcloud_config::ConfigError> {
//! ensure_user_config_exists()?;
//! let mut config = Config::new_default()?;
//! config.load_user_config()?;
//! println!("{}", config.base_url());
//! # Ok(())
//! # }
//! ```

pub mod constants;
mod loader;
pub mod persistence;
pub mod types;

pub use constants::DEFAULT_CONFIG;
pub use loader::{ConfigError, Endpoint};
pub use persistence::{
    ensure_config_exists_at, ensure_user_config_exists, expand_home, user_config_path,
};
pub use types::{Config, ConfigDocument, Connection, LogLevel, Protocol};
