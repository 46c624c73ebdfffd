//! pathaddr Core - Filesystem-Path Socket Addresses
//!
//! Immutable address values for local inter-process sockets, which are
//! named by a filesystem path rather than an IP host/port pair.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                 Socket / networking layer                │
//! │        (bind, connect, accept: outside this crate)       │
//! └───────────────▲──────────────────────────▲───────────────┘
//!                 │ to_socket_addr()         │ address_bytes()
//! ┌───────────────┴──────────────────────────┴───────────────┐
//! │                      PATHADDR CORE                       │
//! │   ┌──────────────────────────────────────────────────┐   │
//! │   │                    Address                       │   │
//! │   │     ┌──────────────┐       ┌────────────────┐    │   │
//! │   │     │  IpAddress   │       │  PathAddress   │    │   │
//! │   │     └──────────────┘       └────────────────┘    │   │
//! │   └──────────────────────────────────────────────────┘   │
//! │   config: default socket path (file, env, CLI)           │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! # Key Types
//!
//! - [`PathAddress`]: a socket path stored as raw bytes
//! - [`IpAddress`]: an IP address with an optional host name label
//! - [`Address`]: either of the above, with a shared set of accessors
//! - [`AddressFamily`]: the family tag (`AF_INET`, `AF_INET6`, `AF_UNIX`)
//!
//! # Quick Start
//!
//! ```
//! use pathaddr_core::{Address, AddressFamily, PathAddress};
//!
//! let addr = PathAddress::new("/tmp/socket");
//! assert_eq!(addr.host_address(), "/tmp/socket");
//! assert_eq!(addr.to_string(), "PathAddress[/tmp/socket]");
//!
//! let any = Address::from(addr.clone());
//! assert_eq!(any.family(), AddressFamily::Unix);
//! assert_eq!(any.host_name(), None);
//! ```
//!
//! # Module Overview
//!
//! - [`address`]: the address value types
//! - [`config`]: default socket path resolution from TOML, env and CLI
//! - [`error`]: conversion errors
//! - `socket`: hand-off of a path to a std Unix socket address (unix only)

#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod address;
pub mod config;
pub mod error;
#[cfg(unix)]
mod socket;

// Re-exports for convenience
pub use address::{Address, AddressFamily, IpAddress, PathAddress};
pub use error::AddressError;

// Config exports
pub use config::{
    default_config_path, load_config, load_config_from_path, ConfigError, ConfigOverrides,
    ConfigSource, PathConfig,
};
