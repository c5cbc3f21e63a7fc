//! Command-line arguments.
//!
//! The port is taken as a raw string so a bad value can fall back to the
//! default with a warning instead of aborting startup.

use std::path::PathBuf;

use clap::Parser;

use crate::config::schema::ProxyConfig;

#[derive(Debug, Parser)]
#[command(name = "ocds-cors-proxy")]
#[command(about = "CORS proxy in front of the OCDS releases API", long_about = None)]
pub struct Cli {
    /// Port to listen on (defaults to 8080)
    pub port: Option<String>,

    /// Optional TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override the upstream base URL
    #[arg(short, long)]
    pub upstream: Option<String>,
}

impl Cli {
    /// Layer command-line overrides on top of a loaded configuration.
    pub fn apply(&self, config: &mut ProxyConfig) {
        if self.port.is_some() {
            config.listener.port = resolve_port(self.port.as_deref(), config.listener.port);
        }
        if let Some(upstream) = &self.upstream {
            config.upstream.base_url = upstream.clone();
        }
    }
}

/// Resolve the positional port argument.
///
/// Anything that is not a valid `u16` logs a warning and yields `default`.
pub fn resolve_port(arg: Option<&str>, default: u16) -> u16 {
    let Some(raw) = arg else {
        return default;
    };

    match raw.trim().parse::<u16>() {
        Ok(port) => port,
        Err(e) => {
            tracing::warn!(
                argument = %raw,
                error = %e,
                default_port = default,
                "Invalid port number, using default"
            );
            default
        }
    }
}
