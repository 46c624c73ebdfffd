//! pathaddr CLI
//!
//! Inspect filesystem-path socket addresses the way the socket layer sees
//! them: display text, decoded host address, raw bytes and identity.
//!
//! # Usage
//!
//! ```bash
//! # Describe a socket path
//! pathaddr show /run/user/1000/app.sock
//!
//! # Non-UTF-8 paths as hex bytes
//! pathaddr show --hex 2f746d702fff
//!
//! # Check whether two paths name the same address
//! pathaddr compare /a/b /a/b
//!
//! # Where the default socket lives, and which setting chose it
//! pathaddr default
//! pathaddr --json default --socket /srv/app.sock
//! ```
//!
//! # Environment Variables
//!
//! - `PATHADDR_CONFIG`: Configuration file path
//! - `PATHADDR_SOCKET`, `PATHADDR_RUNTIME_DIR`, `PATHADDR_SOCKET_NAME`:
//!   default socket settings
//! - `RUST_LOG`: Log level (trace, debug, info, warn, error)

mod report;

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::debug;

use pathaddr_core::config::{load_config, load_config_from_path, ConfigOverrides};

use crate::report::{parse_address, AddressReport, ComparisonReport, DefaultReport};

/// Inspect filesystem-path socket addresses
#[derive(Debug, Parser)]
#[command(name = "pathaddr", version, about)]
struct Cli {
    /// Configuration file (default: ~/.config/pathaddr/pathaddr.toml)
    #[arg(long, env = "PATHADDR_CONFIG", global = true)]
    config: Option<PathBuf>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Describe a single address
    Show {
        /// Socket path (or hex bytes with --hex)
        path: String,
        /// Treat the argument as hex-encoded bytes
        #[arg(long)]
        hex: bool,
    },

    /// Compare two addresses for equality
    Compare {
        /// First socket path
        left: String,
        /// Second socket path
        right: String,
        /// Treat both arguments as hex-encoded bytes
        #[arg(long)]
        hex: bool,
    },

    /// Show the configured default socket address
    #[command(name = "default")]
    DefaultSocket {
        /// Override the socket path
        #[arg(long)]
        socket: Option<String>,
        /// Override the runtime directory
        #[arg(long)]
        runtime_dir: Option<PathBuf>,
    },
}

fn print_report<T: Serialize>(report: &T, text: &str, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
    } else {
        println!("{text}");
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so stdout stays parseable
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("pathaddr=info".parse()?)
                .add_directive("pathaddr_core=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();

    let cli = Cli::parse();
    debug!(command = ?cli.command, "Parsed arguments");

    match cli.command {
        Command::Show { path, hex } => {
            let addr = parse_address(&path, hex)?;
            let report = AddressReport::new(&addr);
            print_report(&report, &report.render_text(), cli.json)?;
        }

        Command::Compare { left, right, hex } => {
            let left = parse_address(&left, hex)?;
            let right = parse_address(&right, hex)?;
            let report = ComparisonReport::new(&left, &right);
            print_report(&report, &report.render_text(), cli.json)?;
        }

        Command::DefaultSocket {
            socket,
            runtime_dir,
        } => {
            let mut config = match cli.config {
                Some(path) => {
                    anyhow::ensure!(
                        path.is_file(),
                        "Config file not found: {}",
                        path.display()
                    );
                    load_config_from_path(Some(path.clone())).with_context(|| {
                        format!("Failed to load config from {}", path.display())
                    })?
                }
                None => load_config().context("Failed to load config")?,
            };

            let mut overrides = ConfigOverrides::new();
            if let Some(socket) = socket {
                overrides = overrides.with_socket_path(socket);
            }
            if let Some(dir) = runtime_dir {
                overrides = overrides.with_runtime_dir(dir);
            }
            overrides.apply(&mut config);
            config.validate()?;

            let report = DefaultReport::new(&config);
            print_report(&report, &report.render_text(), cli.json)?;
        }
    }

    Ok(())
}
