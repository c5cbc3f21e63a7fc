//! Route classification results and upstream URL construction.
//!
//! # Design Decisions
//! - Query strings and OCIDs are carried verbatim; nothing is decoded or re-encoded
//! - Explicit `Unmatched` rather than a silent default

/// Inbound path of the listing endpoint, mirrored upstream.
pub const LIST_RELEASES_PATH: &str = "/api/OCDSReleases";

/// Inbound prefix of the detail endpoint, mirrored upstream.
pub const RELEASE_DETAIL_PREFIX: &str = "/api/OCDSReleases/release/";

/// Classification of an inbound GET request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// `GET /api/OCDSReleases?<query>`
    ListReleases { query: String },
    /// `GET /api/OCDSReleases/release/<ocid>`
    ReleaseDetail { ocid: String },
    /// Anything else; answered with 404.
    Unmatched,
}

impl Route {
    /// Stable label used in logs and metrics.
    pub fn name(&self) -> &'static str {
        match self {
            Route::ListReleases { .. } => "list_releases",
            Route::ReleaseDetail { .. } => "release_detail",
            Route::Unmatched => "unmatched",
        }
    }

    /// Build the upstream URL for this route against `base`.
    ///
    /// The listing URL always carries a `?`, even for an empty query.
    /// Returns `None` for [`Route::Unmatched`].
    pub fn target_url(&self, base: &str) -> Option<String> {
        let base = base.trim_end_matches('/');
        match self {
            Route::ListReleases { query } => Some(format!("{base}{LIST_RELEASES_PATH}?{query}")),
            Route::ReleaseDetail { ocid } => Some(format!("{base}{RELEASE_DETAIL_PREFIX}{ocid}")),
            Route::Unmatched => None,
        }
    }
}
