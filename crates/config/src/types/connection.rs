//! Network client handle attached to a resolved configuration.
//!
//! Responsibilities:
//! - Build the `reqwest::Client` consumed by the SDK request layer.
//! - Record the dial (connect) timeout the client was built with.
//!
//! Does NOT handle:
//! - Sending requests or retrying them; `connection_retries` is a passthrough
//!   for the request layer.
//!
//! Invariants:
//! - The recorded `dial_timeout` is exactly what was passed to
//!   `reqwest::ClientBuilder::connect_timeout`.
//! - A zero timeout means "no connect timeout", never "fail immediately".

use std::time::Duration;

use crate::loader::ConfigError;

/// A reusable HTTP client plus the dial timeout it enforces.
///
/// Cloning is cheap: `reqwest::Client` is reference counted internally.
#[derive(Debug, Clone)]
pub struct Connection {
    http: reqwest::Client,
    dial_timeout: Option<Duration>,
}

impl Connection {
    /// Build a client with the default transport and no explicit dial timeout.
    pub fn new() -> Result<Self, ConfigError> {
        let http = reqwest::Client::builder().build()?;
        Ok(Self {
            http,
            dial_timeout: None,
        })
    }

    /// Build a client whose connector aborts connection attempts after `timeout`.
    ///
    /// A zero `timeout` builds a default-transport client instead.
    pub fn with_dial_timeout(timeout: Duration) -> Result<Self, ConfigError> {
        if timeout.is_zero() {
            return Self::new();
        }

        let http = reqwest::Client::builder()
            .connect_timeout(timeout)
            .build()?;

        Ok(Self {
            http,
            dial_timeout: Some(timeout),
        })
    }

    /// The underlying HTTP client.
    pub fn http(&self) -> &reqwest::Client {
        &self.http
    }

    /// Dial timeout enforced by the client, if any.
    pub fn dial_timeout(&self) -> Option<Duration> {
        self.dial_timeout
    }
}
