//! Configuration loader for the built-in document, config files and buffers.
//!
//! Responsibilities:
//! - Decode YAML documents into `ConfigDocument` overlays and layer them onto a `Config`.
//! - Parse endpoint URLs into host, port, protocol and uri.
//! - Provide the `Config` constructors and reload operations.
//!
//! Does NOT handle:
//! - Resolving or installing the user config file (see `persistence` module).
//! - Logging setup; the resolved `LogLevel` is returned to the caller.
//!
//! Invariants / Assumptions:
//! - Later layers overwrite earlier ones key by key; absent keys are retained.
//! - A malformed document is rejected as a whole.

mod document;
mod endpoint;
mod error;
mod resolver;

#[cfg(test)]
mod tests;

pub use endpoint::Endpoint;
pub use error::ConfigError;
