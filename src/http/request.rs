//! Inbound request bookkeeping.
//!
//! # Responsibilities
//! - Generate a unique request ID (UUID v4) unless the client sent one
//! - Emit one access-log line per request: client, request line, status
//!
//! # Design Decisions
//! - Request ID added as early as possible so the access log can carry it
//! - Client address comes from `ConnectInfo`; absent in in-process tests

use std::net::SocketAddr;
use std::time::Instant;

use axum::extract::{ConnectInfo, Request};
use axum::http::HeaderValue;
use axum::middleware::Next;
use axum::response::Response;
use tower_http::request_id::{MakeRequestId, RequestId};
use uuid::Uuid;

/// Header carrying the request ID in both directions.
pub const X_REQUEST_ID: &str = "x-request-id";

/// Generates random UUID v4 request IDs.
#[derive(Debug, Clone, Copy, Default)]
pub struct MakeRequestUuid;

impl MakeRequestId for MakeRequestUuid {
    fn make_request_id<B>(&mut self, _request: &axum::http::Request<B>) -> Option<RequestId> {
        HeaderValue::from_str(&Uuid::new_v4().to_string())
            .ok()
            .map(RequestId::new)
    }
}

/// Render `METHOD /path?query HTTP/1.1` for the access log.
pub fn request_line(request: &Request) -> String {
    let target = request
        .uri()
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or("/");
    format!("{} {} {:?}", request.method(), target, request.version())
}

/// Access-log middleware.
pub async fn access_log(request: Request, next: Next) -> Response {
    let start_time = Instant::now();
    let client = request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.to_string())
        .unwrap_or_else(|| "-".to_string());
    let request_id = request
        .headers()
        .get(X_REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("-")
        .to_string();
    let line = request_line(&request);

    let response = next.run(request).await;

    tracing::info!(
        client = %client,
        request_id = %request_id,
        status = response.status().as_u16(),
        latency_ms = start_time.elapsed().as_millis() as u64,
        "{}",
        line
    );

    response
}
