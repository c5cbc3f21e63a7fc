//! CORS proxy for the OCDS releases API.
//!
//! Forwards `GET /api/OCDSReleases` and `GET /api/OCDSReleases/release/<ocid>`
//! to a single upstream, relays the JSON body untouched and adds the
//! `Access-Control-Allow-*` headers browsers need. `OPTIONS` on any path is
//! answered locally.

pub mod config;
pub mod error;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod routing;
pub mod upstream;

#[cfg(test)]
mod test_support;

pub use config::schema::ProxyConfig;
pub use error::ProxyError;
pub use http::{HttpServer, RunningServer};
pub use lifecycle::Shutdown;
