//! Outbound side of the proxy.
//!
//! # Data Flow
//! ```text
//! Route (from routing)
//!     → client.rs (build target URL, GET with deadline)
//!     → whole body buffered in memory
//!     → handed back to the HTTP layer verbatim
//! ```
//!
//! # Design Decisions
//! - One shared hyper client, built at startup, rustls with webpki roots
//! - Path and query go out exactly as received
//! - Every fetch is bounded by the configured upstream timeout
//! - Non-2xx upstream statuses are failures, never relayed
//! - No retries

pub mod client;

pub use client::UpstreamClient;
