//! Route matching logic.
//!
//! # Design Decisions
//! - Exact match for the listing path, prefix match for the detail path
//! - Path matching is case-sensitive and runs on the raw (encoded) path
//! - No regex; listing is checked before detail

use crate::routing::router::{Route, LIST_RELEASES_PATH, RELEASE_DETAIL_PREFIX};

/// Classify a GET request by its raw path and query string.
///
/// The OCID is everything after the last `/`, forwarded without validation.
pub fn classify(path: &str, query: Option<&str>) -> Route {
    if path == LIST_RELEASES_PATH {
        return Route::ListReleases {
            query: query.unwrap_or_default().to_string(),
        };
    }

    if path.starts_with(RELEASE_DETAIL_PREFIX) {
        let ocid = path.rsplit('/').next().unwrap_or_default();
        return Route::ReleaseDetail {
            ocid: ocid.to_string(),
        };
    }

    Route::Unmatched
}
