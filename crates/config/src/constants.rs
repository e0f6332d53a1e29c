//! Centralized constants for the QingCloud configuration crate.
//!
//! This module contains file locations and default values used across the
//! loader and persistence modules to avoid magic value duplication.

// =============================================================================
// Built-in Default Document
// =============================================================================

/// The built-in default configuration document, embedded at compile time.
///
/// This is the base layer applied before any user file or explicit override.
pub const DEFAULT_CONFIG: &str = include_str!("../assets/default_config.yaml");

// =============================================================================
// User Config File Location
// =============================================================================

/// Directory (relative to the home directory) holding the user config file.
pub const USER_CONFIG_DIR: &str = ".qingcloud";

/// File name of the user config file inside [`USER_CONFIG_DIR`].
pub const USER_CONFIG_FILE: &str = "config.yaml";

/// Prefix expanded to the home directory when loading from a path.
pub const HOME_PREFIX: &str = "~";

// =============================================================================
// Connection Defaults
// =============================================================================

/// Default HTTPS port used when an endpoint names `https` with no other hint.
pub const DEFAULT_HTTPS_PORT: u16 = 443;

/// Default HTTP port.
pub const DEFAULT_HTTP_PORT: u16 = 80;

/// Placeholder rendered instead of a secret value.
pub const REDACTED: &str = "********";
