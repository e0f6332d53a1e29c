//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish error types.
//! - Map `ConfigError` variants to appropriate exit codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//!
//! Invariants:
//! - Exit codes 1-4 are reserved for specific error categories.

use qingcloud_config::ConfigError;

/// Structured exit codes for qy-config.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// General error - unhandled or generic failure.
    GeneralError = 1,

    /// A config file could not be read or written, or the home directory is unknown.
    FileError = 2,

    /// A config document is malformed or holds an out-of-range value.
    InvalidConfig = 3,

    /// An endpoint URL is malformed, lacks a port, or uses an unsupported scheme.
    InvalidEndpoint = 4,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

impl From<&ConfigError> for ExitCode {
    fn from(err: &ConfigError) -> Self {
        match err {
            ConfigError::FileRead { .. }
            | ConfigError::FileWrite { .. }
            | ConfigError::HomeDirUnavailable => ExitCode::FileError,

            ConfigError::Decode(_) | ConfigError::InvalidValue { .. } => ExitCode::InvalidConfig,

            ConfigError::UrlParse { .. }
            | ConfigError::MissingPort { .. }
            | ConfigError::UnsupportedProtocol(_) => ExitCode::InvalidEndpoint,

            ConfigError::HttpClient(_) => ExitCode::GeneralError,
        }
    }
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Returns ExitCode::GeneralError if no `ConfigError` is in the chain.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        self.chain()
            .find_map(|cause| cause.downcast_ref::<ConfigError>())
            .map_or(ExitCode::GeneralError, ExitCode::from)
    }
}
