//! Socket Layer Hand-off
//!
//! Turns a [`PathAddress`] into the std socket address that `bind` and
//! `connect` consume. This is where path bytes first meet the OS addressing
//! rules, so this is also where unusable paths are rejected:
//!
//! - interior NUL bytes (`sun_path` is NUL-terminated)
//! - paths longer than `sun_path`
//!
//! No system call is made here.

use std::ffi::OsStr;
use std::os::unix::ffi::OsStrExt;
use std::os::unix::net::SocketAddr;

use crate::address::PathAddress;
use crate::error::AddressError;

impl PathAddress {
    /// Build a `sockaddr_un`-backed address for this path
    ///
    /// # Errors
    ///
    /// Returns [`AddressError::InvalidSocketPath`] when the platform cannot
    /// represent the path as a Unix socket address.
    pub fn to_socket_addr(&self) -> Result<SocketAddr, AddressError> {
        let raw = self.address_bytes_internal();

        SocketAddr::from_pathname(OsStr::from_bytes(raw)).map_err(|source| {
            tracing::debug!(path = %self.host_address(), error = %source, "Rejected socket path");
            AddressError::InvalidSocketPath {
                path: self.host_address(),
                source,
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::os::unix::net::UnixListener;
    use tempfile::TempDir;

    #[test]
    fn test_to_socket_addr() {
        let addr = PathAddress::new("/tmp/pathaddr-test.sock");
        let sock = addr.to_socket_addr().unwrap();
        assert_eq!(
            sock.as_pathname(),
            Some(std::path::Path::new("/tmp/pathaddr-test.sock"))
        );
    }

    #[test]
    fn test_interior_nul_rejected() {
        let addr = PathAddress::new("/tmp/a\0b.sock");
        let result = addr.to_socket_addr();
        assert!(matches!(result, Err(AddressError::InvalidSocketPath { .. })));
    }

    #[test]
    fn test_overlong_path_rejected() {
        let long = format!("/tmp/{}", "x".repeat(200));
        let result = PathAddress::new(&long).to_socket_addr();
        assert!(matches!(result, Err(AddressError::InvalidSocketPath { .. })));
    }

    #[test]
    fn test_listener_address_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let socket_path = temp_dir.path().join("roundtrip.sock");

        let listener = UnixListener::bind(&socket_path).unwrap();
        let local = listener.local_addr().unwrap();

        let addr = PathAddress::from(local.as_pathname().unwrap());
        assert_eq!(addr, PathAddress::from(socket_path.as_path()));
    }
}
