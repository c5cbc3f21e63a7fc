//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! optional config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → args.rs (command-line overrides: port, upstream)
//!     → validation.rs (semantic checks, once, on the merged result)
//!     → ProxyConfig (immutable for the life of the server)
//! ```
//!
//! # Design Decisions
//! - All fields have defaults; no file is needed to run
//! - Validation separates syntactic (serde) from semantic checks
//! - A bad port argument is a warning, a bad config file is fatal

pub mod args;
pub mod loader;
pub mod schema;
pub mod validation;

pub use args::{resolve_port, Cli};
pub use loader::{load_config, read_config, ConfigError};
pub use schema::{
    CorsConfig, ListenerConfig, ObservabilityConfig, ProxyConfig, TimeoutConfig, UpstreamConfig,
};
pub use validation::{validate_config, ValidationError};
