//! OCDS CORS proxy binary.
//!
//! ```text
//!     Browser                    ┌──────────────────────────────────────┐
//!     ───────────────────────────┼─▶ http ──▶ routing ──▶ upstream ─────┼──▶ OCDS API
//!     ◀──────────────────────────┼── response (JSON + CORS) ◀───────────┼───
//!                                └──────────────────────────────────────┘
//! ```
//!
//! Usage: `ocds-cors-proxy [PORT] [--config FILE] [--upstream URL]`

use clap::Parser;

use ocds_cors_proxy::config::{read_config, validate_config, Cli, ConfigError, ProxyConfig};
use ocds_cors_proxy::http::HttpServer;
use ocds_cors_proxy::lifecycle::{log_banner, wait_for_signal};
use ocds_cors_proxy::observability::{logging, metrics};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => read_config(path)?,
        None => ProxyConfig::default(),
    };

    logging::init_logging(&config.observability.log_level);

    cli.apply(&mut config);
    validate_config(&config).map_err(ConfigError::Validation)?;

    tracing::info!(
        bind_address = %config.listener.bind_address(),
        upstream = %config.upstream.base_url,
        upstream_timeout_secs = config.timeouts.upstream_secs,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => {
                if let Err(e) = metrics::init_metrics(addr) {
                    tracing::error!(error = %e, "Failed to start metrics endpoint");
                }
            }
            Err(e) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                error = %e,
                "Failed to parse metrics address"
            ),
        }
    }

    let upstream = config.upstream.base_url.clone();
    let server = HttpServer::new(config)?.start().await?;
    log_banner(server.local_addr(), &upstream);

    wait_for_signal().await;
    server.stop().await?;

    tracing::info!("Server stopped");
    Ok(())
}
