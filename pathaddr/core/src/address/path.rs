//! Path Addresses
//!
//! A [`PathAddress`] names a local (Unix domain) socket by its filesystem
//! path. It is an immutable byte holder: nothing here validates, resolves or
//! touches the filesystem.
//!
//! # Ownership
//!
//! The bytes live in a `Box<[u8]>` owned by the value. Every constructor
//! copies (or takes ownership of) its input and every public byte accessor
//! returns a fresh `Vec<u8>`, so no buffer outside the value ever aliases
//! its storage. The unix socket hand-off (`to_socket_addr`) is the only
//! reader of the stored slice itself.
//!
//! # Text decoding
//!
//! Bytes are decoded with [`String::from_utf8_lossy`]: each invalid UTF-8
//! sequence becomes U+FFFD. Both [`fmt::Display`] and
//! [`PathAddress::host_address`] use this policy.

use std::borrow::Cow;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{Address, AddressFamily};

/// A local socket address identified by a filesystem path
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PathAddress {
    address: Box<[u8]>,
}

impl PathAddress {
    /// Create a path address from text
    ///
    /// The string is stored as its UTF-8 bytes. Empty strings, interior NUL
    /// bytes and anything else are accepted unchanged.
    #[must_use]
    pub fn new(path: &str) -> Self {
        Self::from_bytes(path.as_bytes())
    }

    /// Create a path address from raw bytes
    ///
    /// The bytes are copied; later changes to the caller's buffer do not
    /// affect this value.
    #[must_use]
    pub fn from_bytes(path: &[u8]) -> Self {
        Self {
            address: Box::from(path),
        }
    }

    /// Address family, always [`AddressFamily::Unix`]
    #[must_use]
    pub fn family(&self) -> AddressFamily {
        AddressFamily::Unix
    }

    /// Host name of this address
    ///
    /// Path addresses have no resolvable name, so this is always `None`.
    #[must_use]
    pub fn host_name(&self) -> Option<&str> {
        None
    }

    /// Copy of the raw path bytes
    #[must_use]
    pub fn address_bytes(&self) -> Vec<u8> {
        self.address.to_vec()
    }

    /// The stored path bytes, without copying
    ///
    /// For the socket layer only: it passes the slice straight into a
    /// `sockaddr_un`. The borrow is shared, so even trusted callers cannot
    /// write through it. Everyone else uses [`PathAddress::address_bytes`].
    pub(crate) fn address_bytes_internal(&self) -> &[u8] {
        &self.address
    }

    /// The path decoded as text, without the `PathAddress[...]` label
    #[must_use]
    pub fn host_address(&self) -> String {
        self.decoded().into_owned()
    }

    /// Number of bytes in the path
    #[must_use]
    pub fn len(&self) -> usize {
        self.address.len()
    }

    /// Whether the path is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.address.is_empty()
    }

    /// Copy of the path as a [`std::path::PathBuf`]
    #[cfg(unix)]
    #[must_use]
    pub fn to_path_buf(&self) -> std::path::PathBuf {
        use std::os::unix::ffi::OsStrExt;

        std::path::PathBuf::from(std::ffi::OsStr::from_bytes(&self.address))
    }

    fn decoded(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.address)
    }
}

impl fmt::Display for PathAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PathAddress[{}]", self.decoded())
    }
}

impl fmt::Debug for PathAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PathAddress")
            .field(&format_args!("\"{}\"", self.address.escape_ascii()))
            .finish()
    }
}

impl From<&str> for PathAddress {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}

impl From<String> for PathAddress {
    fn from(path: String) -> Self {
        Self::from(path.into_bytes())
    }
}

impl From<&[u8]> for PathAddress {
    fn from(path: &[u8]) -> Self {
        Self::from_bytes(path)
    }
}

/// Takes ownership of the buffer; the caller keeps no handle to it.
impl From<Vec<u8>> for PathAddress {
    fn from(path: Vec<u8>) -> Self {
        Self {
            address: path.into_boxed_slice(),
        }
    }
}

#[cfg(unix)]
impl From<&std::path::Path> for PathAddress {
    fn from(path: &std::path::Path) -> Self {
        use std::os::unix::ffi::OsStrExt;

        Self::from_bytes(path.as_os_str().as_bytes())
    }
}

impl FromStr for PathAddress {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl PartialEq<Address> for PathAddress {
    fn eq(&self, other: &Address) -> bool {
        other.as_path() == Some(self)
    }
}

impl PartialEq<PathAddress> for Address {
    fn eq(&self, other: &PathAddress) -> bool {
        other == self
    }
}
