//! Decoding configuration documents and layering them onto a `Config`.
//!
//! Responsibilities:
//! - Parse YAML bytes into a `ConfigDocument` overlay.
//! - Reject documents that parse but carry out-of-range values.
//! - Apply an overlay onto an existing config, field by field.
//!
//! Invariants:
//! - Decoding is all-or-nothing: a document is either fully valid or rejected.
//! - Applying never fails; every check happens at decode time.
//! - Empty documents decode to an empty overlay.

use std::time::Duration;

use secrecy::SecretString;

use super::error::ConfigError;
use crate::types::{Config, ConfigDocument};

impl ConfigDocument {
    /// Decode and validate a YAML document.
    pub(crate) fn decode(content: &[u8]) -> Result<Self, ConfigError> {
        if content.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }

        let value: serde_yaml::Value = serde_yaml::from_slice(content)?;
        let document = match value {
            // A document holding only comments.
            serde_yaml::Value::Null => Self::default(),
            value => serde_yaml::from_value(value)?,
        };

        document.validate()?;
        Ok(document)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.port == Some(0) {
            return Err(ConfigError::InvalidValue {
                field: "port".to_string(),
                message: "must be between 1 and 65535".to_string(),
            });
        }
        Ok(())
    }

    /// Overwrite every field of `config` that this document names.
    pub(crate) fn apply_to(self, config: &mut Config) {
        if let Some(id) = self.access_key_id {
            config.access_key_id = SecretString::new(id.into());
        }
        if let Some(key) = self.secret_access_key {
            config.secret_access_key = SecretString::new(key.into());
        }
        if let Some(host) = self.host {
            config.host = host;
        }
        if let Some(port) = self.port {
            config.port = port;
        }
        if let Some(protocol) = self.protocol {
            config.protocol = protocol;
        }
        if let Some(uri) = self.uri {
            config.uri = uri;
        }
        if let Some(retries) = self.connection_retries {
            config.connection_retries = retries;
        }
        if let Some(secs) = self.connection_timeout {
            config.connection_timeout = Duration::from_secs(secs);
        }
        if let Some(level) = self.log_level {
            config.log_level = level;
        }
        if let Some(zone) = self.zone {
            config.zone = zone;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{LogLevel, Protocol};

    #[test]
    fn test_decode_empty_document() {
        assert_eq!(ConfigDocument::decode(b"").unwrap(), ConfigDocument::default());
        assert_eq!(
            ConfigDocument::decode(b"  \n\t").unwrap(),
            ConfigDocument::default()
        );
    }

    #[test]
    fn test_decode_comment_only_document() {
        let document = ConfigDocument::decode(b"# nothing here\n").unwrap();
        assert_eq!(document, ConfigDocument::default());
    }

    #[test]
    fn test_decode_recognized_keys() {
        let content = b"qy_access_key_id: 'AKID'\nhost: example.com\nport: 4000\n\
protocol: http\nconnection_timeout: 15\nlog_level: debug\nzone: pek3a\n";
        let document = ConfigDocument::decode(content).unwrap();

        assert_eq!(document.access_key_id.as_deref(), Some("AKID"));
        assert_eq!(document.host.as_deref(), Some("example.com"));
        assert_eq!(document.port, Some(4000));
        assert_eq!(document.protocol, Some(Protocol::Http));
        assert_eq!(document.connection_timeout, Some(15));
        assert_eq!(document.log_level, Some(LogLevel::Debug));
        assert_eq!(document.zone.as_deref(), Some("pek3a"));
        assert_eq!(document.uri, None);
    }

    #[test]
    fn test_decode_ignores_unknown_keys() {
        let document = ConfigDocument::decode(b"host: a.example\nunknown_key: 1\n").unwrap();
        assert_eq!(document.host.as_deref(), Some("a.example"));
    }

    #[test]
    fn test_decode_null_value_keeps_field_unset() {
        let document = ConfigDocument::decode(b"host: ~\nport: 80\n").unwrap();
        assert_eq!(document.host, None);
        assert_eq!(document.port, Some(80));
    }

    #[test]
    fn test_decode_rejects_non_mapping() {
        let result = ConfigDocument::decode(b"- just\n- a list\n");
        assert!(matches!(result, Err(ConfigError::Decode(_))));
    }

    #[test]
    fn test_decode_rejects_wrong_types() {
        let result = ConfigDocument::decode(b"port: not-a-number\n");
        assert!(matches!(result, Err(ConfigError::Decode(_))));

        let result = ConfigDocument::decode(b"port: 70000\n");
        assert!(matches!(result, Err(ConfigError::Decode(_))));
    }

    #[test]
    fn test_decode_rejects_zero_port() {
        let result = ConfigDocument::decode(b"port: 0\n");
        assert!(matches!(
            result,
            Err(ConfigError::InvalidValue { ref field, .. }) if field == "port"
        ));
    }

    #[test]
    fn test_decode_rejects_malformed_yaml() {
        let result = ConfigDocument::decode(b"host: [unclosed\n");
        assert!(matches!(result, Err(ConfigError::Decode(_))));
    }
}
