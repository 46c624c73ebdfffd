//! IP Addresses
//!
//! The IP side of [`super::Address`]. A host name may be attached as a
//! label, but identity is the IP address alone: two values with the same
//! address and different names are equal.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::net::IpAddr;

use serde::{Deserialize, Serialize};

use super::AddressFamily;

/// An IPv4 or IPv6 address with an optional host name
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct IpAddress {
    ip: IpAddr,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    host_name: Option<String>,
}

impl IpAddress {
    /// Wrap an IP address with no host name
    #[must_use]
    pub fn new(ip: IpAddr) -> Self {
        Self { ip, host_name: None }
    }

    /// Wrap an IP address with a known host name
    ///
    /// The name is not resolved or checked against the address.
    #[must_use]
    pub fn with_host_name(ip: IpAddr, host_name: impl Into<String>) -> Self {
        Self {
            ip,
            host_name: Some(host_name.into()),
        }
    }

    /// The wrapped address
    #[must_use]
    pub fn ip(&self) -> IpAddr {
        self.ip
    }

    /// [`AddressFamily::Inet`] or [`AddressFamily::Inet6`]
    #[must_use]
    pub fn family(&self) -> AddressFamily {
        match self.ip {
            IpAddr::V4(_) => AddressFamily::Inet,
            IpAddr::V6(_) => AddressFamily::Inet6,
        }
    }

    /// Host name, if one was supplied
    #[must_use]
    pub fn host_name(&self) -> Option<&str> {
        self.host_name.as_deref()
    }

    /// Address octets in network order (4 or 16 bytes)
    #[must_use]
    pub fn address_bytes(&self) -> Vec<u8> {
        match self.ip {
            IpAddr::V4(v4) => v4.octets().to_vec(),
            IpAddr::V6(v6) => v6.octets().to_vec(),
        }
    }

    /// Literal text form of the address, e.g. `127.0.0.1`
    #[must_use]
    pub fn host_address(&self) -> String {
        self.ip.to_string()
    }
}

impl PartialEq for IpAddress {
    fn eq(&self, other: &Self) -> bool {
        self.ip == other.ip
    }
}

impl Eq for IpAddress {}

impl Hash for IpAddress {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.ip.hash(state);
    }
}

/// Renders as `host/literal`, with an empty host part when no name is known.
impl fmt::Display for IpAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.host_name.as_deref().unwrap_or(""), self.ip)
    }
}

impl From<IpAddr> for IpAddress {
    fn from(ip: IpAddr) -> Self {
        Self::new(ip)
    }
}
