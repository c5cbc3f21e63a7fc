//! Response construction.
//!
//! # Responsibilities
//! - Attach the cross-origin headers browsers need
//! - Relay upstream bodies byte-for-byte as JSON
//! - Map [`ProxyError`] to a status and a short plain-text body
//!
//! # Design Decisions
//! - Header values are parsed once at startup, cloned per response
//! - 404 carries no CORS headers; every other response does

use axum::body::{Body, Bytes};
use axum::http::header::{
    ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN,
    CONTENT_TYPE,
};
use axum::http::{HeaderMap, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};

use crate::config::CorsConfig;
use crate::error::ProxyError;

/// Pre-validated CORS header values.
#[derive(Debug, Clone)]
pub struct CorsHeaders {
    allow_origin: HeaderValue,
    allow_methods: HeaderValue,
    allow_headers: HeaderValue,
}

impl CorsHeaders {
    pub fn from_config(config: &CorsConfig) -> Result<Self, ProxyError> {
        Ok(Self {
            allow_origin: HeaderValue::from_str(&config.allow_origin)?,
            allow_methods: HeaderValue::from_str(&config.allow_methods)?,
            allow_headers: HeaderValue::from_str(&config.allow_headers)?,
        })
    }

    /// Insert the three `Access-Control-Allow-*` headers.
    pub fn apply(&self, headers: &mut HeaderMap) {
        headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, self.allow_origin.clone());
        headers.insert(ACCESS_CONTROL_ALLOW_METHODS, self.allow_methods.clone());
        headers.insert(ACCESS_CONTROL_ALLOW_HEADERS, self.allow_headers.clone());
    }
}

impl Default for CorsHeaders {
    fn default() -> Self {
        Self {
            allow_origin: HeaderValue::from_static("*"),
            allow_methods: HeaderValue::from_static("GET, POST, OPTIONS"),
            allow_headers: HeaderValue::from_static("Content-Type"),
        }
    }
}

/// 200 with the upstream body untouched.
pub fn json_response(cors: &CorsHeaders, body: Bytes) -> Response {
    let mut response = Response::new(Body::from(body));
    response.headers_mut().insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    cors.apply(response.headers_mut());
    response
}

/// Answer to an `OPTIONS` preflight: 200, CORS headers, empty body.
pub fn preflight_response(cors: &CorsHeaders) -> Response {
    let mut response = StatusCode::OK.into_response();
    cors.apply(response.headers_mut());
    response
}

/// Map a request failure to what the caller sees.
pub fn error_response(cors: &CorsHeaders, err: &ProxyError) -> Response {
    match err {
        ProxyError::RouteNotFound => plain_text(StatusCode::NOT_FOUND, "Not Found".to_string()),
        _ => {
            let mut response = plain_text(err.status_code(), format!("Proxy Error: {err}"));
            cors.apply(response.headers_mut());
            response
        }
    }
}

/// 501 for verbs the proxy has no handler for.
pub fn unsupported_method(method: &str) -> Response {
    plain_text(
        StatusCode::NOT_IMPLEMENTED,
        format!("Unsupported method ('{method}')"),
    )
}

/// `String` bodies get `text/plain; charset=utf-8` from axum.
fn plain_text(status: StatusCode, body: String) -> Response {
    (status, body).into_response()
}
