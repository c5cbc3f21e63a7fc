//! HTTP client for the upstream OCDS API.
//!
//! The target is handed to hyper as an `http::Uri`, which keeps the path
//! and query byte-for-byte; nothing is re-encoded or dot-segment resolved.

use std::time::Duration;

use axum::body::Bytes;
use axum::http::{Request, Uri};
use http_body_util::{BodyExt, Empty};
use hyper_rustls::{HttpsConnector, HttpsConnectorBuilder};
use hyper_util::{
    client::legacy::{connect::HttpConnector, Client},
    rt::TokioExecutor,
};

use crate::config::{TimeoutConfig, UpstreamConfig};
use crate::error::ProxyError;
use crate::routing::Route;

/// Fetches release data from the configured upstream.
#[derive(Debug, Clone)]
pub struct UpstreamClient {
    client: Client<HttpsConnector<HttpConnector>, Empty<Bytes>>,
    base_url: String,
    timeout: Duration,
}

impl UpstreamClient {
    /// Build the client with connect and total-request deadlines.
    pub fn new(upstream: &UpstreamConfig, timeouts: &TimeoutConfig) -> Result<Self, ProxyError> {
        let mut http = HttpConnector::new();
        http.enforce_http(false);
        http.set_connect_timeout(Some(Duration::from_secs(timeouts.connect_secs)));

        let https = HttpsConnectorBuilder::new()
            .with_provider_and_webpki_roots(rustls::crypto::ring::default_provider())?
            .https_or_http()
            .enable_http1()
            .wrap_connector(http);

        Ok(Self {
            client: Client::builder(TokioExecutor::new()).build(https),
            base_url: upstream.base_url.clone(),
            timeout: Duration::from_secs(timeouts.upstream_secs),
        })
    }

    /// Upstream base URL this client targets.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get the configured total timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Fetch the upstream document for `route` and return its body bytes.
    ///
    /// Nothing is returned until the body has been read completely.
    pub async fn fetch(&self, route: &Route) -> Result<Bytes, ProxyError> {
        let target = route
            .target_url(&self.base_url)
            .ok_or(ProxyError::RouteNotFound)?;
        let uri = target
            .parse::<Uri>()
            .map_err(|source| ProxyError::InvalidUpstreamUrl {
                url: target.clone(),
                source,
            })?;

        tracing::debug!(route = route.name(), target = %uri, "Forwarding to upstream");

        match tokio::time::timeout(self.timeout, self.get(uri, &target)).await {
            Ok(result) => result,
            Err(_) => Err(ProxyError::UpstreamTimeout {
                url: target,
                secs: self.timeout.as_secs(),
            }),
        }
    }

    async fn get(&self, uri: Uri, target: &str) -> Result<Bytes, ProxyError> {
        let req = Request::get(uri)
            .body(Empty::new())
            .map_err(|e| ProxyError::Request {
                url: target.to_string(),
                source: e,
            })?;

        let response = self
            .client
            .request(req)
            .await
            .map_err(|source| ProxyError::Upstream {
                url: target.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProxyError::UpstreamStatus {
                url: target.to_string(),
                status,
            });
        }

        let body = response
            .into_body()
            .collect()
            .await
            .map_err(|source| ProxyError::UpstreamBody {
                url: target.to_string(),
                source,
            })?;
        Ok(body.to_bytes())
    }
}
