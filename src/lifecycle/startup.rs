//! Startup banner.

use std::net::SocketAddr;

/// Announce where the proxy listens and what it fronts.
pub fn log_banner(local_addr: SocketAddr, upstream: &str) {
    tracing::info!(
        address = %local_addr,
        "CORS Proxy Server running on http://localhost:{}",
        local_addr.port()
    );
    tracing::info!(upstream = %upstream, "Proxying requests to: {}", upstream);
    tracing::info!("Press Ctrl+C to stop");
}
