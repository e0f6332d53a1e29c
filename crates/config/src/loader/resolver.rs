//! Layered construction and reloading of a [`Config`].
//!
//! Responsibilities:
//! - Provide the constructors (`new`, `with_endpoint`, `new_default`).
//! - Reload a config from the built-in document, the user file, any file
//!   path, or an in-memory buffer.
//! - Rebuild the attached `Connection` when the timeout field is reloaded.
//!
//! Does NOT handle:
//! - Installing the user config file (see `persistence::ensure_user_config_exists`).
//! - Configuring process-wide logging; callers read `Config::log_level`.
//!
//! Invariants / Assumptions:
//! - Layer order is built-in default, then file or buffer, then explicit setters.
//! - Every reload starts from the built-in document; keys a layer omits keep
//!   the value they had before that layer was applied.
//! - Reloads are atomic: on error the config is left exactly as it was.

use std::path::Path;
use std::time::Duration;

use secrecy::SecretString;

use super::endpoint::Endpoint;
use super::error::ConfigError;
use crate::constants::DEFAULT_CONFIG;
use crate::persistence::{expand_home, user_config_path};
use crate::types::{Config, ConfigDocument, Connection, LogLevel, Protocol};

impl Config {
    /// Create a config from the built-in defaults and the given credentials.
    ///
    /// The attached client uses the default transport, without a dial timeout.
    pub fn new(
        access_key_id: impl Into<String>,
        secret_access_key: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        let mut config = Self::from_builtin(|_| Connection::new())?;
        config.set_credentials(access_key_id, secret_access_key);
        Ok(config)
    }

    /// Create a config from the built-in defaults, the given credentials and
    /// an endpoint URL of the form `scheme://host:port[/path]`.
    ///
    /// # Errors
    ///
    /// Fails with [`ConfigError::UrlParse`] or [`ConfigError::MissingPort`] if
    /// the endpoint cannot be split into host and port.
    pub fn with_endpoint(
        access_key_id: impl Into<String>,
        secret_access_key: impl Into<String>,
        endpoint: &str,
    ) -> Result<Self, ConfigError> {
        let endpoint = Endpoint::parse(endpoint)?;
        let mut config = Self::new(access_key_id, secret_access_key)?;
        config.apply_endpoint(endpoint);
        Ok(config)
    }

    /// Create a config from the built-in defaults only.
    ///
    /// The attached client enforces `connection_timeout` as its dial timeout.
    pub fn new_default() -> Result<Self, ConfigError> {
        Self::from_builtin(Connection::with_dial_timeout)
    }

    fn from_builtin(
        connect: impl FnOnce(Duration) -> Result<Connection, ConfigError>,
    ) -> Result<Self, ConfigError> {
        let document = ConfigDocument::decode(DEFAULT_CONFIG.as_bytes())?;
        let timeout = Duration::from_secs(document.connection_timeout.unwrap_or_default());

        let mut config = Self {
            access_key_id: empty_secret(),
            secret_access_key: empty_secret(),
            host: String::new(),
            port: Protocol::default().default_port(),
            protocol: Protocol::default(),
            uri: String::new(),
            connection_retries: 0,
            connection_timeout: timeout,
            log_level: LogLevel::default(),
            zone: String::new(),
            connection: connect(timeout)?,
        };
        document.apply_to(&mut config);

        tracing::debug!(source = "built-in", "Configuration loaded");
        Ok(config)
    }

    /// Reload the built-in default document over this config.
    ///
    /// Keys the built-in document does not set, such as credentials, keep
    /// their current values. The connection is rebuilt only if the timeout
    /// changes.
    pub fn load_default(&mut self) -> Result<(), ConfigError> {
        let mut next = self.clone();
        next.apply_builtin()?;

        if next.connection_timeout != self.connection_timeout {
            next.connection = Connection::with_dial_timeout(next.connection_timeout)?;
        }

        *self = next;
        tracing::debug!(source = "built-in", "Configuration loaded");
        Ok(())
    }

    /// Load the user config file (`~/.qingcloud/config.yaml`).
    ///
    /// This is a pure read. Call
    /// [`ensure_user_config_exists`](crate::ensure_user_config_exists) first to
    /// install the default file on a fresh machine.
    pub fn load_user_config(&mut self) -> Result<(), ConfigError> {
        let path = user_config_path()?;
        self.load_from_file(path)
    }

    /// Load a config file, expanding a leading `~/` to the home directory.
    ///
    /// # Errors
    ///
    /// Fails with [`ConfigError::FileRead`] if the expanded path cannot be
    /// read, or [`ConfigError::Decode`] if its content is malformed.
    pub fn load_from_file(&mut self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = expand_home(path.as_ref())?;

        let content = std::fs::read(&path).map_err(|source| ConfigError::FileRead {
            path: path.clone(),
            source,
        })?;

        self.load_from_content(&content)?;
        tracing::debug!(path = %path.display(), "Configuration file loaded");
        Ok(())
    }

    /// Load a YAML document from memory.
    ///
    /// The built-in defaults are re-applied first, then `content` is layered
    /// over them and the connection is rebuilt with the resulting dial timeout.
    /// Loading the same bytes twice gives the same result as loading them once.
    pub fn load_from_content(&mut self, content: &[u8]) -> Result<(), ConfigError> {
        let document = ConfigDocument::decode(content)?;

        let mut next = self.clone();
        next.apply_builtin()?;
        document.apply_to(&mut next);
        next.connection = Connection::with_dial_timeout(next.connection_timeout)?;

        *self = next;
        tracing::debug!(
            source = "content",
            log_level = %self.log_level,
            "Configuration loaded"
        );
        Ok(())
    }

    /// Overwrite both credentials.
    pub fn set_credentials(
        &mut self,
        access_key_id: impl Into<String>,
        secret_access_key: impl Into<String>,
    ) {
        let access_key_id: String = access_key_id.into();
        let secret_access_key: String = secret_access_key.into();
        self.access_key_id = SecretString::new(access_key_id.into());
        self.secret_access_key = SecretString::new(secret_access_key.into());
    }

    /// Point this config at `endpoint`, overwriting host, port, protocol and uri.
    ///
    /// Nothing is changed if the endpoint is rejected.
    pub fn set_endpoint(&mut self, endpoint: &str) -> Result<(), ConfigError> {
        let endpoint = Endpoint::parse(endpoint)?;
        self.apply_endpoint(endpoint);
        Ok(())
    }

    pub fn set_zone(&mut self, zone: impl Into<String>) {
        self.zone = zone.into();
    }

    fn apply_endpoint(&mut self, endpoint: Endpoint) {
        self.host = endpoint.host;
        self.port = endpoint.port;
        self.protocol = endpoint.protocol;
        self.uri = endpoint.uri;
    }

    fn apply_builtin(&mut self) -> Result<(), ConfigError> {
        ConfigDocument::decode(DEFAULT_CONFIG.as_bytes())?.apply_to(self);
        Ok(())
    }
}

fn empty_secret() -> SecretString {
    SecretString::new(String::new().into())
}
