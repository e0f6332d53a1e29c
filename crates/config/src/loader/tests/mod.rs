//! Tests for the configuration resolver.
//!
//! Responsibilities:
//! - Test the constructors against the built-in document.
//! - Test reloading from buffers, files and the user config path.
//!
//! Invariants:
//! - Tests that touch `HOME` use `serial_test` and `temp_env` to prevent
//!   environment pollution.
//! - Temporary directories are cleaned up automatically via `tempfile`.

use secrecy::ExposeSecret;

use crate::types::Config;

pub mod file_tests;

/// Asserts that every scalar field of two configs is equal.
pub fn assert_same_settings(left: &Config, right: &Config) {
    assert_eq!(
        left.access_key_id.expose_secret(),
        right.access_key_id.expose_secret()
    );
    assert_eq!(
        left.secret_access_key.expose_secret(),
        right.secret_access_key.expose_secret()
    );
    assert_eq!(left.host, right.host);
    assert_eq!(left.port, right.port);
    assert_eq!(left.protocol, right.protocol);
    assert_eq!(left.uri, right.uri);
    assert_eq!(left.connection_retries, right.connection_retries);
    assert_eq!(left.connection_timeout, right.connection_timeout);
    assert_eq!(left.log_level, right.log_level);
    assert_eq!(left.zone, right.zone);
    assert_eq!(
        left.connection.dial_timeout(),
        right.connection.dial_timeout()
    );
}
