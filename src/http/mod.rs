//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware stack)
//!     → request.rs (request ID, access log)
//!     → server.rs handler: OPTIONS → preflight, GET → routing
//!     → upstream client (fetch whole body)
//!     → response.rs (JSON relay + CORS headers, or error)
//!     → Send to client
//! ```

pub mod request;
pub mod response;
pub mod server;

pub use request::X_REQUEST_ID;
pub use response::CorsHeaders;
pub use server::{AppState, HttpServer, RunningServer};
