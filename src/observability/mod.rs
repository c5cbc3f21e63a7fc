//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! http layer produces:
//!     → logging.rs (startup banner, access log, upstream errors)
//!     → metrics.rs (counters, histograms)
//!
//! Consumers:
//!     → stdout
//!     → Metrics endpoint (Prometheus scrape, opt-in)
//! ```

pub mod logging;
pub mod metrics;
