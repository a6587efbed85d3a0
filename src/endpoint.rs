//! Parsed `host:port` addresses.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;

use crate::error::EndpointParseError;

const MAX_DOMAIN_LEN: usize = 253;
const MAX_LABEL_LEN: usize = 63;

/// A `Domain` built by hand is not checked until it goes through
/// [`Endpoint::new`] or parsing.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Host {
    Ip(IpAddr),
    Domain(String),
}

impl Host {
    pub fn ip(&self) -> Option<IpAddr> {
        match self {
            Host::Ip(ip) => Some(*ip),
            Host::Domain(_) => None,
        }
    }
}

impl FromStr for Host {
    type Err = EndpointParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(ip) = s.parse::<IpAddr>() {
            return Ok(Host::Ip(ip));
        }
        if is_valid_domain(s) {
            Ok(Host::Domain(s.to_string()))
        } else {
            Err(EndpointParseError::InvalidHost(s.to_string()))
        }
    }
}

impl fmt::Display for Host {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Host::Ip(IpAddr::V6(ip)) => write!(f, "[{}]", ip),
            Host::Ip(IpAddr::V4(ip)) => write!(f, "{}", ip),
            Host::Domain(name) => f.write_str(name),
        }
    }
}

fn is_valid_domain(s: &str) -> bool {
    if s.is_empty() || s.len() > MAX_DOMAIN_LEN {
        return false;
    }
    // All-numeric dotted names look like a botched IPv4 literal, not a hostname.
    if s.split('.').all(|label| label.bytes().all(|b| b.is_ascii_digit())) {
        return false;
    }
    s.split('.').all(|label| {
        !label.is_empty()
            && label.len() <= MAX_LABEL_LEN
            && !label.starts_with('-')
            && !label.ends_with('-')
            && label.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'-')
    })
}

/// A network address a connection layer can dial.
///
/// Equality and hashing use the parsed host and port. `Display` renders the
/// text the endpoint was parsed from, so a table entry comes back unchanged.
#[derive(Debug, Clone)]
pub struct Endpoint {
    host: Host,
    port: u16,
    raw: String,
}

impl Endpoint {
    /// Domain hosts are checked with the same rules as parsing.
    pub fn new(host: Host, port: u16) -> Result<Self, EndpointParseError> {
        if let Host::Domain(name) = &host {
            if !is_valid_domain(name) {
                return Err(EndpointParseError::InvalidHost(name.clone()));
            }
        }
        Ok(Self::from_parts(host, port))
    }

    fn from_parts(host: Host, port: u16) -> Self {
        let raw = format!("{}:{}", host, port);
        Self { host, port, raw }
    }

    pub fn host(&self) -> &Host {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Only IP hosts convert; domain names are left for the caller to resolve.
    pub fn socket_addr(&self) -> Option<SocketAddr> {
        self.host.ip().map(|ip| SocketAddr::new(ip, self.port))
    }
}

impl PartialEq for Endpoint {
    fn eq(&self, other: &Self) -> bool {
        self.host == other.host && self.port == other.port
    }
}

impl Eq for Endpoint {}

impl Hash for Endpoint {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.host.hash(state);
        self.port.hash(state);
    }
}

impl From<SocketAddr> for Endpoint {
    fn from(addr: SocketAddr) -> Self {
        Self::from_parts(Host::Ip(addr.ip()), addr.port())
    }
}

impl FromStr for Endpoint {
    type Err = EndpointParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(EndpointParseError::Empty);
        }

        let (host, port) = if let Some(rest) = s.strip_prefix('[') {
            let (ip, after) = rest
                .split_once(']')
                .ok_or_else(|| EndpointParseError::InvalidHost(s.to_string()))?;
            let port = after
                .strip_prefix(':')
                .ok_or_else(|| EndpointParseError::MissingPort(s.to_string()))?;
            let ip: std::net::Ipv6Addr = ip
                .parse()
                .map_err(|_| EndpointParseError::InvalidHost(ip.to_string()))?;
            (Host::Ip(IpAddr::V6(ip)), port)
        } else {
            let (host, port) = s
                .rsplit_once(':')
                .ok_or_else(|| EndpointParseError::MissingPort(s.to_string()))?;
            // Bare IPv6 ("::1:80") is ambiguous without brackets.
            if host.contains(':') {
                return Err(EndpointParseError::InvalidHost(host.to_string()));
            }
            (host.parse::<Host>()?, port)
        };

        if port.is_empty() || !port.bytes().all(|b| b.is_ascii_digit()) {
            return Err(EndpointParseError::InvalidPort(port.to_string()));
        }
        let port: u16 = port
            .parse()
            .map_err(|_| EndpointParseError::InvalidPort(port.to_string()))?;

        Ok(Self {
            host,
            port,
            raw: s.to_string(),
        })
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}
