//! Endpoint URL parsing.
//!
//! Responsibilities:
//! - Parse `scheme://host:port[/path]` strings into their components.
//! - Require an explicit port, including when it equals the scheme default.
//!
//! Invariants:
//! - Parsing never yields partial results: either every component is
//!   extracted or an error is returned.
//! - `host` and `uri` are taken from the input as written: no case folding,
//!   no dot-segment removal, no percent-encoding.
//! - `uri` is empty when the endpoint has no path, never `/`.

use url::Url;

use super::error::ConfigError;
use crate::types::Protocol;

/// Components of an API endpoint URL.
///
/// The URL is validated with [`Url`], but `host` and `uri` keep the
/// spelling of the input. Query and fragment are dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    pub host: String,
    pub port: u16,
    pub protocol: Protocol,
    pub uri: String,
}

impl Endpoint {
    /// Parse an endpoint URL.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::UrlParse`] if `raw` is not a valid absolute URL.
    /// - [`ConfigError::MissingPort`] if no port segment is present.
    /// - [`ConfigError::UnsupportedProtocol`] if the scheme is not http(s).
    /// - [`ConfigError::InvalidValue`] if the port is `0`.
    pub fn parse(raw: &str) -> Result<Self, ConfigError> {
        let trimmed = raw.trim();

        let url = Url::parse(trimmed).map_err(|source| ConfigError::UrlParse {
            endpoint: trimmed.to_string(),
            source,
        })?;

        let (authority, rest) = split_authority(trimmed).ok_or_else(|| missing_port(trimmed))?;
        let host = split_host_port(authority)
            .map(|(host, _)| host)
            .filter(|host| !host.is_empty())
            .ok_or_else(|| missing_port(trimmed))?
            .to_string();

        let protocol: Protocol = url
            .scheme()
            .parse()
            .map_err(|e: crate::types::UnknownProtocol| ConfigError::UnsupportedProtocol(e.0))?;

        // `Url` drops a port equal to the scheme default, even when spelled out.
        let port = url.port().unwrap_or_else(|| protocol.default_port());
        if port == 0 {
            return Err(ConfigError::InvalidValue {
                field: "port".to_string(),
                message: "must be between 1 and 65535".to_string(),
            });
        }

        let path_end = rest.find(['?', '#']).unwrap_or(rest.len());
        let uri = rest[..path_end].to_string();

        Ok(Self {
            host,
            port,
            protocol,
            uri,
        })
    }
}

fn missing_port(endpoint: &str) -> ConfigError {
    ConfigError::MissingPort {
        endpoint: endpoint.to_string(),
    }
}

/// Split `scheme://authority/rest` into `(authority, rest)`.
fn split_authority(raw: &str) -> Option<(&str, &str)> {
    let (_, after_scheme) = raw.split_once("://")?;
    let end = after_scheme
        .find(['/', '?', '#'])
        .unwrap_or(after_scheme.len());
    Some(after_scheme.split_at(end))
}

/// Split an authority into host and a non-empty port, ignoring userinfo.
fn split_host_port(authority: &str) -> Option<(&str, &str)> {
    let host_port = authority
        .rsplit_once('@')
        .map_or(authority, |(_, host_port)| host_port);

    // Skip over a bracketed IPv6 literal so its colons are not mistaken for a port.
    let host_end = host_port.rfind(']').map_or(0, |idx| idx + 1);
    let colon = host_end + host_port[host_end..].find(':')?;

    let (host, port) = (&host_port[..colon], &host_port[colon + 1..]);
    (!port.is_empty()).then_some((host, port))
}
