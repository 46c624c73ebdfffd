//! TOML Configuration File Support
//!
//! Resolves the default socket address a local service should use, from a
//! TOML file at `~/.config/pathaddr/pathaddr.toml`, environment variables
//! and command-line overrides.
//!
//! # Configuration Priority
//!
//! Values are applied in this order (highest first):
//! 1. CLI arguments ([`ConfigOverrides`])
//! 2. Environment variables
//! 3. TOML configuration file
//! 4. Default values
//!
//! # Example Configuration
//!
//! ```toml
//! [socket]
//! # Full path; when set, runtime_dir and name are ignored
//! path = "/run/user/1000/pathaddr/pathaddr.sock"
//! runtime_dir = "/run/user/1000"
//! name = "pathaddr.sock"
//! ```
//!
//! # Environment Variables
//!
//! - `PATHADDR_SOCKET`: full socket path
//! - `PATHADDR_RUNTIME_DIR`: base directory for the default path
//! - `PATHADDR_SOCKET_NAME`: socket file name for the default path

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::address::PathAddress;

/// Socket file name used when none is configured
pub const DEFAULT_SOCKET_NAME: &str = "pathaddr.sock";

// =============================================================================
// Error Types
// =============================================================================

/// Errors that can occur when loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read config file
    #[error("Failed to read config file at {path}: {source}")]
    ReadError {
        /// The path that was attempted
        path: PathBuf,
        /// The underlying IO error
        source: std::io::Error,
    },

    /// Failed to parse TOML
    #[error("Failed to parse TOML config: {0}")]
    ParseError(#[from] toml::de::Error),

    /// Invalid configuration value
    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

// =============================================================================
// Configuration Source Tracking
// =============================================================================

/// Tracks where a configuration value came from
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfigSource {
    /// Value from command-line argument
    Cli,
    /// Value from environment variable
    Env,
    /// Value from TOML configuration file
    File,
    /// Default value
    Default,
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Cli => write!(f, "CLI"),
            Self::Env => write!(f, "environment"),
            Self::File => write!(f, "config file"),
            Self::Default => write!(f, "default"),
        }
    }
}

// =============================================================================
// TOML Configuration Structures
// =============================================================================

/// Socket section of the TOML configuration
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SocketToml {
    /// Full socket path
    pub path: Option<String>,

    /// Base directory for the default socket path
    pub runtime_dir: Option<PathBuf>,

    /// Socket file name for the default socket path
    pub name: Option<String>,
}

/// Top-level TOML configuration structure
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PathAddrToml {
    /// Socket configuration section
    pub socket: SocketToml,
}

// =============================================================================
// Main Configuration Struct
// =============================================================================

/// Resolved socket configuration
#[derive(Clone, Debug)]
pub struct PathConfig {
    /// Explicit socket path, overriding the derived default
    pub socket_path: Option<String>,

    /// Base directory for the derived default (None = platform runtime dir)
    pub runtime_dir: Option<PathBuf>,

    /// File name for the derived default
    pub socket_name: String,

    /// Path to the config file that was loaded (if any)
    pub config_file_path: Option<PathBuf>,

    /// Source of configuration values
    source: ConfigSource,
}

impl Default for PathConfig {
    fn default() -> Self {
        Self {
            socket_path: None,
            runtime_dir: None,
            socket_name: DEFAULT_SOCKET_NAME.to_string(),
            config_file_path: None,
            source: ConfigSource::Default,
        }
    }
}

impl PathConfig {
    /// Create a new configuration with default values
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the primary source of this configuration
    #[must_use]
    pub fn source(&self) -> ConfigSource {
        self.source
    }

    /// Set the configuration source
    pub fn set_source(&mut self, source: ConfigSource) {
        self.source = source;
    }

    /// Record `source` for a runtime dir or socket name change
    ///
    /// Those fields only shape the derived default, so an explicit
    /// `socket_path` keeps the source of whichever layer set it.
    fn mark_derived_source(&mut self, source: ConfigSource) {
        if self.socket_path.is_none() {
            self.source = source;
        }
    }

    /// Filesystem path of the configured socket
    ///
    /// An explicit `socket_path` wins. Otherwise the path is
    /// `<runtime_dir>/pathaddr/<socket_name>`, with the runtime dir taken
    /// from the config, then `$XDG_RUNTIME_DIR`, and finally
    /// `/tmp/pathaddr-$UID/<socket_name>` when neither is available.
    #[must_use]
    pub fn socket_path(&self) -> PathBuf {
        if let Some(ref path) = self.socket_path {
            return PathBuf::from(path);
        }

        match self.runtime_dir.clone().or_else(dirs::runtime_dir) {
            Some(runtime_dir) => runtime_dir.join("pathaddr").join(&self.socket_name),
            None => fallback_runtime_dir().join(&self.socket_name),
        }
    }

    /// The configured socket as a [`PathAddress`]
    #[must_use]
    pub fn socket_address(&self) -> PathAddress {
        path_address(&self.socket_path())
    }

    /// Check values that would produce an unusable socket path
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ValidationError`] for an empty socket path, or
    /// a socket name that is empty or contains a path separator.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.socket_path.as_deref() == Some("") {
            return Err(ConfigError::ValidationError(
                "socket path must not be empty".to_string(),
            ));
        }
        if self.socket_name.is_empty() {
            return Err(ConfigError::ValidationError(
                "socket name must not be empty".to_string(),
            ));
        }
        if self.socket_name.contains('/') {
            return Err(ConfigError::ValidationError(format!(
                "socket name {:?} must not contain '/'",
                self.socket_name
            )));
        }
        Ok(())
    }
}

#[cfg(unix)]
fn fallback_runtime_dir() -> PathBuf {
    let uid = unsafe { libc::getuid() };
    PathBuf::from(format!("/tmp/pathaddr-{uid}"))
}

#[cfg(not(unix))]
fn fallback_runtime_dir() -> PathBuf {
    std::env::temp_dir().join("pathaddr")
}

#[cfg(unix)]
fn path_address(path: &Path) -> PathAddress {
    PathAddress::from(path)
}

#[cfg(not(unix))]
fn path_address(path: &Path) -> PathAddress {
    PathAddress::new(&path.to_string_lossy())
}

// =============================================================================
// Configuration Loading
// =============================================================================

/// Get the default configuration file path
///
/// Returns `$XDG_CONFIG_HOME/pathaddr/pathaddr.toml` or
/// `~/.config/pathaddr/pathaddr.toml` if `XDG_CONFIG_HOME` is not set.
#[must_use]
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("pathaddr").join("pathaddr.toml"))
}

/// Load configuration from all sources with proper priority
///
/// CLI overrides are not handled here; the caller applies
/// [`ConfigOverrides`] afterwards.
///
/// # Errors
///
/// Returns an error if the config file exists but cannot be parsed, or the
/// resulting values fail [`PathConfig::validate`]. A missing config file is
/// not an error.
pub fn load_config() -> Result<PathConfig, ConfigError> {
    load_config_from_path(default_config_path())
}

/// Load configuration from a specific path
///
/// # Arguments
///
/// * `path` - Optional path to the configuration file. If `None`, only defaults
///   and environment variables are used.
///
/// # Errors
///
/// Returns an error if the specified config file cannot be read or parsed.
pub fn load_config_from_path(path: Option<PathBuf>) -> Result<PathConfig, ConfigError> {
    let mut config = PathConfig::default();

    if let Some(ref config_path) = path {
        if config_path.exists() {
            let toml_content =
                std::fs::read_to_string(config_path).map_err(|e| ConfigError::ReadError {
                    path: config_path.clone(),
                    source: e,
                })?;

            let toml_config: PathAddrToml = toml::from_str(&toml_content)?;
            apply_toml_config(&mut config, &toml_config);
            config.config_file_path = Some(config_path.clone());
            config.source = ConfigSource::File;

            tracing::info!(
                path = %config_path.display(),
                "Loaded configuration from file"
            );
        } else {
            tracing::debug!(
                path = %config_path.display(),
                "Config file not found, using defaults"
            );
        }
    }

    apply_env_config(&mut config, |key| std::env::var(key).ok());

    config.validate()?;
    Ok(config)
}

/// Apply TOML configuration values to the config struct
fn apply_toml_config(config: &mut PathConfig, toml: &PathAddrToml) {
    if toml.socket.path.is_some() {
        config.socket_path = toml.socket.path.clone();
    }
    if toml.socket.runtime_dir.is_some() {
        config.runtime_dir = toml.socket.runtime_dir.clone();
    }
    if let Some(ref name) = toml.socket.name {
        config.socket_name = name.clone();
    }
}

/// Apply environment variable overrides, reading variables through `var`
fn apply_env_config<F>(config: &mut PathConfig, var: F)
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(path) = var("PATHADDR_SOCKET") {
        tracing::debug!(path = %path, "Socket path from environment");
        config.socket_path = Some(path);
        config.source = ConfigSource::Env;
    }
    if let Some(dir) = var("PATHADDR_RUNTIME_DIR") {
        config.runtime_dir = Some(PathBuf::from(dir));
        config.mark_derived_source(ConfigSource::Env);
    }
    if let Some(name) = var("PATHADDR_SOCKET_NAME") {
        config.socket_name = name;
        config.mark_derived_source(ConfigSource::Env);
    }
}

// =============================================================================
// CLI Overrides
// =============================================================================

/// Command-line overrides applied on top of file and environment values
#[derive(Clone, Debug, Default)]
pub struct ConfigOverrides {
    /// Socket path override
    pub socket_path: Option<String>,

    /// Runtime directory override
    pub runtime_dir: Option<PathBuf>,
}

impl ConfigOverrides {
    /// Create a new empty set of overrides
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set socket path override
    #[must_use]
    pub fn with_socket_path(mut self, path: String) -> Self {
        self.socket_path = Some(path);
        self
    }

    /// Set runtime directory override
    #[must_use]
    pub fn with_runtime_dir(mut self, dir: PathBuf) -> Self {
        self.runtime_dir = Some(dir);
        self
    }

    /// Apply these overrides to a configuration
    pub fn apply(&self, config: &mut PathConfig) {
        if let Some(ref path) = self.socket_path {
            config.socket_path = Some(path.clone());
            config.source = ConfigSource::Cli;
        }
        if let Some(ref dir) = self.runtime_dir {
            config.runtime_dir = Some(dir.clone());
            config.mark_derived_source(ConfigSource::Cli);
        }
    }
}
