//! Configuration type definitions for the QingCloud SDK.
//!
//! Responsibilities:
//! - Define the resolved `Config` record and its typed fields (`Protocol`, `LogLevel`).
//! - Define the `Connection` handle attached to every resolved config.
//! - Provide the serializable `ConfigDocument` view used for rendering.
//!
//! Does NOT handle:
//! - Decoding YAML documents onto a config (see `loader` module).
//! - Locating or installing the user config file (see `persistence` module).
//!
//! Invariants:
//! - Credentials are stored as `secrecy::SecretString` to prevent accidental logging.
//! - A `Config` always carries a usable `Connection`.

mod config;
mod connection;
mod document;
mod log_level;
mod protocol;

pub use config::Config;
pub use connection::Connection;
pub use document::ConfigDocument;
pub use log_level::LogLevel;
pub use protocol::{Protocol, UnknownProtocol};
