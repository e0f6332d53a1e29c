//! Serializable overlay of a configuration document.
//!
//! Every field is optional: a key missing from a document (or set to `null`)
//! leaves the corresponding `Config` field untouched when the overlay is
//! applied. Unknown keys are ignored.

use serde::{Deserialize, Serialize};

use super::log_level::LogLevel;
use super::protocol::Protocol;

/// One layer of configuration, keyed exactly like the YAML files.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigDocument {
    #[serde(rename = "qy_access_key_id", skip_serializing_if = "Option::is_none")]
    pub access_key_id: Option<String>,
    #[serde(
        rename = "qy_secret_access_key",
        skip_serializing_if = "Option::is_none"
    )]
    pub secret_access_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protocol: Option<Protocol>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connection_retries: Option<u32>,
    /// Seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connection_timeout: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_level: Option<LogLevel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zone: Option<String>,
}
