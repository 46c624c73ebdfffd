//! Address Errors
//!
//! The value types themselves are total: building, copying, comparing,
//! hashing and rendering never fail. Errors only arise when converting
//! between address kinds, parsing a family name, or handing a path to the
//! socket layer.

use thiserror::Error;

use crate::address::AddressFamily;

/// Errors produced by address conversions
#[derive(Debug, Error)]
pub enum AddressError {
    /// An address of one family was used where another was required
    #[error("Expected {expected} address, found {found}")]
    FamilyMismatch {
        /// The family the caller asked for
        expected: AddressFamily,
        /// The family the value actually has
        found: AddressFamily,
    },

    /// A family name that is not one of inet, inet6 or unix
    #[error("Unknown address family: {0}")]
    UnknownFamily(String),

    /// The OS socket layer cannot address this path
    ///
    /// Raised at the socket hand-off only, typically for interior NUL bytes
    /// or paths longer than `sun_path`.
    #[error("Path {path:?} is not a usable socket address: {source}")]
    InvalidSocketPath {
        /// Lossy text form of the rejected path
        path: String,
        /// The underlying error from std
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_family_mismatch_message() {
        let err = AddressError::FamilyMismatch {
            expected: AddressFamily::Unix,
            found: AddressFamily::Inet,
        };
        assert_eq!(err.to_string(), "Expected AF_UNIX address, found AF_INET");
    }

    #[test]
    fn test_unknown_family_message() {
        let err = AddressError::UnknownFamily("appletalk".to_string());
        assert!(err.to_string().contains("appletalk"));
    }
}
