//! Address Reports
//!
//! Plain data describing an address, printed either as `key: value` lines
//! or as JSON.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::path::PathBuf;

use anyhow::Context;
use serde::Serialize;

use pathaddr_core::{AddressFamily, ConfigSource, PathAddress, PathConfig};

/// Build an address from a command-line argument
///
/// With `hex` set the argument is hex-encoded path bytes, which lets
/// non-UTF-8 paths be entered.
pub fn parse_address(input: &str, hex: bool) -> anyhow::Result<PathAddress> {
    if hex {
        let bytes = hex::decode(input).with_context(|| format!("Invalid hex path {input:?}"))?;
        Ok(PathAddress::from(bytes))
    } else {
        Ok(PathAddress::new(input))
    }
}

/// Everything observable about one path address
#[derive(Debug, Serialize)]
pub struct AddressReport {
    pub display: String,
    pub host_address: String,
    pub family: AddressFamily,
    pub length: usize,
    pub bytes_hex: String,
    /// Hash under this build's `DefaultHasher`; only comparable within one run
    pub hash: u64,
}

impl AddressReport {
    pub fn new(addr: &PathAddress) -> Self {
        let mut hasher = DefaultHasher::new();
        addr.hash(&mut hasher);

        Self {
            display: addr.to_string(),
            host_address: addr.host_address(),
            family: addr.family(),
            length: addr.len(),
            bytes_hex: hex::encode(addr.address_bytes()),
            hash: hasher.finish(),
        }
    }

    pub fn render_text(&self) -> String {
        format!(
            "display: {}\nhost_address: {}\nfamily: {}\nlength: {}\nbytes: {}\nhash: {:016x}",
            self.display, self.host_address, self.family, self.length, self.bytes_hex, self.hash
        )
    }
}

/// Result of comparing two addresses
#[derive(Debug, Serialize)]
pub struct ComparisonReport {
    pub equal: bool,
    pub left: AddressReport,
    pub right: AddressReport,
}

impl ComparisonReport {
    pub fn new(left: &PathAddress, right: &PathAddress) -> Self {
        Self {
            equal: left == right,
            left: AddressReport::new(left),
            right: AddressReport::new(right),
        }
    }

    pub fn render_text(&self) -> String {
        format!(
            "equal: {}\nleft: {} (hash {:016x})\nright: {} (hash {:016x})",
            self.equal, self.left.display, self.left.hash, self.right.display, self.right.hash
        )
    }
}

/// The configured default socket address and where it came from
#[derive(Debug, Serialize)]
pub struct DefaultReport {
    pub address: AddressReport,
    pub source: ConfigSource,
    pub config_file: Option<PathBuf>,
}

impl DefaultReport {
    pub fn new(config: &PathConfig) -> Self {
        Self {
            address: AddressReport::new(&config.socket_address()),
            source: config.source(),
            config_file: config.config_file_path.clone(),
        }
    }

    pub fn render_text(&self) -> String {
        let text = format!("{}\nsource: {}", self.address.render_text(), self.source);
        match self.config_file {
            Some(ref path) => format!("{text}\nconfig_file: {}", path.display()),
            None => text,
        }
    }
}
