//! Error taxonomy for request handling and startup.

use std::error::Error as StdError;

use axum::http::header::InvalidHeaderValue;
use axum::http::uri::InvalidUri;
use axum::http::StatusCode;

/// Everything that can go wrong while serving a request or building the server.
#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    /// The path matches neither known route shape.
    #[error("Not Found")]
    RouteNotFound,

    /// Connect, TLS or protocol failure talking to the upstream.
    #[error("request to {url} failed: {}", describe(.source))]
    Upstream {
        url: String,
        source: hyper_util::client::legacy::Error,
    },

    /// The upstream answered with a non-2xx status.
    #[error("HTTP Error {status} for url ({url})")]
    UpstreamStatus { url: String, status: StatusCode },

    /// The upstream did not deliver a full response in time.
    #[error("request to {url} timed out after {secs}s")]
    UpstreamTimeout { url: String, secs: u64 },

    /// The upstream connection broke while the body was being read.
    #[error("reading response from {url} failed: {}", describe(.source))]
    UpstreamBody { url: String, source: hyper::Error },

    /// The rewritten target is not a parseable URI.
    #[error("invalid upstream URL '{url}': {source}")]
    InvalidUpstreamUrl {
        url: String,
        #[source]
        source: InvalidUri,
    },

    /// The outbound request could not be assembled.
    #[error("invalid upstream request for {url}: {source}")]
    Request {
        url: String,
        #[source]
        source: axum::http::Error,
    },

    /// The TLS client configuration could not be built.
    #[error("failed to configure TLS: {0}")]
    Tls(#[from] rustls::Error),

    /// A configured CORS value cannot be sent as a header.
    #[error("invalid CORS header value: {0}")]
    InvalidHeader(#[from] InvalidHeaderValue),
}

impl ProxyError {
    /// Status code returned to the caller for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ProxyError::RouteNotFound => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Render an error with its whole source chain. hyper's own messages
/// omit the cause ("client error (Connect)").
fn describe(err: &(dyn StdError + 'static)) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn route_not_found_is_404() {
        assert_eq!(ProxyError::RouteNotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(ProxyError::RouteNotFound.to_string(), "Not Found");
    }

    #[test]
    fn invalid_url_is_500_and_names_the_url() {
        let err = ProxyError::InvalidUpstreamUrl {
            url: "http://[::1/api".into(),
            source: "http://[::1/api".parse::<axum::http::Uri>().unwrap_err(),
        };
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(err.to_string().contains("http://[::1/api"));
    }

    #[test]
    fn status_error_names_status_and_url() {
        let err = ProxyError::UpstreamStatus {
            url: "http://127.0.0.1:1/api/OCDSReleases?".into(),
            status: StatusCode::SERVICE_UNAVAILABLE,
        };
        assert_eq!(
            err.to_string(),
            "HTTP Error 503 Service Unavailable for url (http://127.0.0.1:1/api/OCDSReleases?)"
        );
    }
}
