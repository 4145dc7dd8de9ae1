//! # Client Handle
//!
//! [`SortingHatClient`] describes how to reach a SortingHat server: host, port, optional API
//! path, optional credentials and whether TLS is used. Building one never touches the network;
//! the handle only captures configuration, and the service URL is derived on demand.
//!
//! Constructors go through the [`ServiceClient`] trait so the context initializer can build any
//! client type from the same [`ClientConfig`].

use crate::error::Result;
use std::fmt;
use url::{Host, ParseError, Url};

/// Connection configuration captured from the command line.
#[derive(Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub host: String,
    pub port: u16,
    pub path: Option<String>,
    pub user: Option<String>,
    pub password: Option<String>,
    pub ssl: bool,
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("path", &self.path)
            .field("user", &self.user)
            .field("password", &self.password.as_ref().map(|_| "********"))
            .field("ssl", &self.ssl)
            .finish()
    }
}

/// A client that can be built from a [`ClientConfig`] without performing I/O.
pub trait ServiceClient {
    fn configure(config: ClientConfig) -> Self;
}

/// Handle to a SortingHat server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortingHatClient {
    config: ClientConfig,
}

impl ServiceClient for SortingHatClient {
    fn configure(config: ClientConfig) -> Self {
        Self { config }
    }
}

impl SortingHatClient {
    pub fn new(config: ClientConfig) -> Self {
        Self::configure(config)
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn host(&self) -> &str {
        &self.config.host
    }

    pub fn port(&self) -> u16 {
        self.config.port
    }

    pub fn path(&self) -> Option<&str> {
        self.config.path.as_deref()
    }

    pub fn user(&self) -> Option<&str> {
        self.config.user.as_deref()
    }

    pub fn uses_ssl(&self) -> bool {
        self.config.ssl
    }

    /// True when both a user and a password were given.
    pub fn has_credentials(&self) -> bool {
        self.config.user.is_some() && self.config.password.is_some()
    }

    pub fn scheme(&self) -> &'static str {
        if self.config.ssl {
            "https"
        } else {
            "http"
        }
    }

    /// Builds the service URL: `<scheme>://<host>:<port>/<path>`.
    ///
    /// The host must be a bare domain, an IPv4 address or an IPv6 address (bracketed or not).
    /// Anything the URL parser would read as user info, port, path, query or fragment is
    /// rejected.
    pub fn url(&self) -> Result<Url> {
        let host = parse_host(&self.config.host)?;

        let mut base = Url::parse(&format!("{}://localhost/", self.scheme()))?;
        base.set_host(Some(&host.to_string()))?;
        base.set_port(Some(self.config.port))
            .map_err(|_| ParseError::InvalidPort)?;

        match self.config.path.as_deref().map(|p| p.trim_start_matches('/')) {
            Some(path) if !path.is_empty() => Ok(base.join(path)?),
            _ => Ok(base),
        }
    }
}

fn parse_host(host: &str) -> std::result::Result<Host, ParseError> {
    if host.is_empty() {
        return Err(ParseError::EmptyHost);
    }

    // Colons only belong to IPv6 literals; `host:port` would move the port.
    if host.contains(':') || host.starts_with('[') {
        let bracketed = if host.starts_with('[') {
            host.to_string()
        } else {
            format!("[{}]", host)
        };
        return match Host::parse(&bracketed)? {
            ipv6 @ Host::Ipv6(_) => Ok(ipv6),
            _ => Err(ParseError::InvalidIpv6Address),
        };
    }

    if host
        .chars()
        .any(|c| matches!(c, '/' | '\\' | '@' | '?' | '#' | '%') || c.is_whitespace())
    {
        return Err(ParseError::InvalidDomainCharacter);
    }

    Host::parse(host)
}
