//! Network Address Values
//!
//! Two kinds of address share one capability set:
//!
//! - [`IpAddress`]: an IP address with an optional host name label
//! - [`PathAddress`]: a filesystem path naming a local (Unix domain) socket
//!
//! [`Address`] is the sum over both. Code that handles addresses
//! polymorphically matches on it or uses its shared accessors; code that
//! only ever deals with local sockets takes a [`PathAddress`] directly.
//!
//! ```text
//!                 Address
//!          ┌─────────┴─────────┐
//!     Ip(IpAddress)     Path(PathAddress)
//!    AF_INET/AF_INET6        AF_UNIX
//! ```
//!
//! Values of different kinds never compare equal, so both can live in the
//! same `HashMap<Address, _>` without collisions between an IP literal and
//! a path that happens to spell the same bytes.

mod ip;
mod path;

pub use ip::IpAddress;
pub use path::PathAddress;

use std::fmt;
use std::net::IpAddr;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AddressError;

/// Addressing domain a value belongs to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AddressFamily {
    /// IPv4
    Inet,
    /// IPv6
    Inet6,
    /// Local (Unix domain) sockets addressed by path
    Unix,
}

impl AddressFamily {
    /// The platform `AF_*` constant for this family
    #[cfg(unix)]
    #[must_use]
    pub fn as_raw(self) -> libc::c_int {
        match self {
            Self::Inet => libc::AF_INET,
            Self::Inet6 => libc::AF_INET6,
            Self::Unix => libc::AF_UNIX,
        }
    }

    /// Whether this is one of the IP families
    #[must_use]
    pub fn is_ip(self) -> bool {
        matches!(self, Self::Inet | Self::Inet6)
    }
}

impl fmt::Display for AddressFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Inet => write!(f, "AF_INET"),
            Self::Inet6 => write!(f, "AF_INET6"),
            Self::Unix => write!(f, "AF_UNIX"),
        }
    }
}

impl FromStr for AddressFamily {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "inet" | "ipv4" | "af_inet" => Ok(Self::Inet),
            "inet6" | "ipv6" | "af_inet6" => Ok(Self::Inet6),
            "unix" | "local" | "af_unix" | "af_local" => Ok(Self::Unix),
            _ => Err(AddressError::UnknownFamily(s.to_string())),
        }
    }
}

/// Any network address: IP-based or path-based
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Address {
    /// An IPv4 or IPv6 address
    Ip(IpAddress),
    /// A local socket path
    Path(PathAddress),
}

impl Address {
    /// Family tag of the wrapped value
    #[must_use]
    pub fn family(&self) -> AddressFamily {
        match self {
            Self::Ip(ip) => ip.family(),
            Self::Path(path) => path.family(),
        }
    }

    /// Raw address bytes, as an independent copy
    ///
    /// Octets for IP addresses, path bytes for local sockets.
    #[must_use]
    pub fn address_bytes(&self) -> Vec<u8> {
        match self {
            Self::Ip(ip) => ip.address_bytes(),
            Self::Path(path) => path.address_bytes(),
        }
    }

    /// Textual form of the address without any label
    #[must_use]
    pub fn host_address(&self) -> String {
        match self {
            Self::Ip(ip) => ip.host_address(),
            Self::Path(path) => path.host_address(),
        }
    }

    /// Host name, if one is known
    ///
    /// Always `None` for path addresses.
    #[must_use]
    pub fn host_name(&self) -> Option<&str> {
        match self {
            Self::Ip(ip) => ip.host_name(),
            Self::Path(path) => path.host_name(),
        }
    }

    /// Whether this is a local socket path
    #[must_use]
    pub fn is_path(&self) -> bool {
        matches!(self, Self::Path(_))
    }

    /// Borrow the path address, if this is one
    #[must_use]
    pub fn as_path(&self) -> Option<&PathAddress> {
        match self {
            Self::Path(path) => Some(path),
            Self::Ip(_) => None,
        }
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ip(ip) => fmt::Display::fmt(ip, f),
            Self::Path(path) => fmt::Display::fmt(path, f),
        }
    }
}

impl From<PathAddress> for Address {
    fn from(path: PathAddress) -> Self {
        Self::Path(path)
    }
}

impl From<IpAddress> for Address {
    fn from(ip: IpAddress) -> Self {
        Self::Ip(ip)
    }
}

impl From<IpAddr> for Address {
    fn from(ip: IpAddr) -> Self {
        Self::Ip(IpAddress::new(ip))
    }
}

impl TryFrom<Address> for PathAddress {
    type Error = AddressError;

    fn try_from(address: Address) -> Result<Self, Self::Error> {
        match address {
            Address::Path(path) => Ok(path),
            Address::Ip(ip) => Err(AddressError::FamilyMismatch {
                expected: AddressFamily::Unix,
                found: ip.family(),
            }),
        }
    }
}
