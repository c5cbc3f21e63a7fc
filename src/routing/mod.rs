//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming GET (raw path, query)
//!     → matcher.rs (classify against the two known shapes)
//!     → router.rs (Route → upstream URL)
//!     → Return: ListReleases | ReleaseDetail | Unmatched
//! ```
//!
//! # Design Decisions
//! - Stateless and deterministic: same input always yields the same route
//! - First match wins (listing before detail)

pub mod matcher;
pub mod router;

pub use matcher::classify;
pub use router::{Route, LIST_RELEASES_PATH, RELEASE_DETAIL_PREFIX};
