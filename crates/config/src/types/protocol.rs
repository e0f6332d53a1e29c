//! Wire protocol used to reach the API endpoint.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{DEFAULT_HTTP_PORT, DEFAULT_HTTPS_PORT};

/// Protocol spoken to the API endpoint.
///
/// Documents may spell the protocol in any case (`https`, `HTTPS`, `Http`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Protocol {
    Http,
    #[default]
    Https,
}

impl Protocol {
    /// URL scheme for this protocol.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Http => "http",
            Self::Https => "https",
        }
    }

    /// Port implied by the scheme when a URL omits it.
    pub fn default_port(self) -> u16 {
        match self {
            Self::Http => DEFAULT_HTTP_PORT,
            Self::Https => DEFAULT_HTTPS_PORT,
        }
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a scheme is neither `http` nor `https`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown protocol '{0}', expected 'http' or 'https'")]
pub struct UnknownProtocol(pub String);

impl FromStr for Protocol {
    type Err = UnknownProtocol;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "http" => Ok(Self::Http),
            "https" => Ok(Self::Https),
            _ => Err(UnknownProtocol(s.to_string())),
        }
    }
}

impl TryFrom<String> for Protocol {
    type Error = UnknownProtocol;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_is_case_insensitive() {
        assert_eq!("HTTPS".parse::<Protocol>(), Ok(Protocol::Https));
        assert_eq!("http".parse::<Protocol>(), Ok(Protocol::Http));
    }

    #[test]
    fn test_from_str_rejects_other_schemes() {
        assert_eq!(
            "ftp".parse::<Protocol>(),
            Err(UnknownProtocol("ftp".to_string()))
        );
    }

    #[test]
    fn test_default_ports() {
        assert_eq!(Protocol::Http.default_port(), 80);
        assert_eq!(Protocol::Https.default_port(), 443);
    }

    #[test]
    fn test_yaml_uses_lowercase_names() {
        let protocol: Protocol = serde_yaml::from_str("http").unwrap();
        assert_eq!(protocol, Protocol::Http);
        assert!(serde_yaml::from_str::<Protocol>("gopher").is_err());
        assert_eq!(serde_yaml::to_string(&Protocol::Https).unwrap(), "https\n");
    }

    #[test]
    fn test_yaml_accepts_any_case() {
        for raw in ["HTTPS", "Https", "hTtPs"] {
            let protocol: Protocol = serde_yaml::from_str(raw).unwrap();
            assert_eq!(protocol, Protocol::Https);
        }
        let protocol: Protocol = serde_yaml::from_str("HTTP").unwrap();
        assert_eq!(protocol, Protocol::Http);
    }

    #[test]
    fn test_unknown_protocol_message() {
        let err = "gopher".parse::<Protocol>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "unknown protocol 'gopher', expected 'http' or 'https'"
        );
    }
}
