//! The resolved configuration record.
//!
//! Responsibilities:
//! - Hold every connection parameter the SDK request layer needs.
//! - Render a serializable, secret-masking view of itself.
//!
//! Does NOT handle:
//! - Constructing or reloading a config (see `loader::resolver`).
//!
//! Invariants:
//! - `connection` is always present and was built from the current
//!   `connection_timeout` whenever that field was last loaded.
//! - `Debug` output never exposes credentials.

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};

use super::connection::Connection;
use super::document::ConfigDocument;
use super::log_level::LogLevel;
use super::protocol::Protocol;
use crate::constants::REDACTED;

/// A fully populated QingCloud SDK configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Access key identifier (`qy_access_key_id`).
    pub access_key_id: SecretString,
    /// Secret access key (`qy_secret_access_key`).
    pub secret_access_key: SecretString,
    pub host: String,
    pub port: u16,
    pub protocol: Protocol,
    /// Path prefix prepended to every API request (e.g. `/iaas`).
    pub uri: String,
    /// Retry budget for the request layer. Stored only.
    pub connection_retries: u32,
    /// Dial timeout for new connections, in whole seconds.
    pub connection_timeout: Duration,
    pub log_level: LogLevel,
    pub zone: String,
    /// Network client built for this configuration.
    pub connection: Connection,
}

impl Config {
    /// Active log level, for callers to thread into their subscriber.
    pub fn log_level(&self) -> LogLevel {
        self.log_level
    }

    /// Base URL of the API, e.g. `https://api.qingcloud.com:443/iaas`.
    pub fn base_url(&self) -> String {
        format!(
            "{}://{}:{}{}",
            self.protocol, self.host, self.port, self.uri
        )
    }

    /// Whether both credentials are non-empty.
    pub fn has_credentials(&self) -> bool {
        !self.access_key_id.expose_secret().is_empty()
            && !self.secret_access_key.expose_secret().is_empty()
    }

    /// Render this config as a document using the same keys as the YAML input.
    ///
    /// Non-empty credentials are replaced by a placeholder unless
    /// `reveal_secrets` is set.
    pub fn to_document(&self, reveal_secrets: bool) -> ConfigDocument {
        let render = |secret: &SecretString| {
            let value = secret.expose_secret();
            if value.is_empty() {
                None
            } else if reveal_secrets {
                Some(value.to_string())
            } else {
                Some(REDACTED.to_string())
            }
        };

        ConfigDocument {
            access_key_id: render(&self.access_key_id),
            secret_access_key: render(&self.secret_access_key),
            host: Some(self.host.clone()),
            port: Some(self.port),
            protocol: Some(self.protocol),
            uri: Some(self.uri.clone()),
            connection_retries: Some(self.connection_retries),
            connection_timeout: Some(self.connection_timeout.as_secs()),
            log_level: Some(self.log_level),
            zone: (!self.zone.is_empty()).then(|| self.zone.clone()),
        }
    }
}
