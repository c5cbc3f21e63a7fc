//! HTTP server setup and the proxy handler.
//!
//! # Responsibilities
//! - Create the Axum router with a single dispatching handler
//! - Wire up middleware (request ID, access log, tracing, timeout)
//! - Own the listening socket for the lifetime of a [`RunningServer`]
//! - Classify requests, forward matches upstream, relay responses

use std::io;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::{
    body::Body,
    extract::State,
    http::{Method, Request},
    middleware,
    response::Response,
    Router,
};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tower::ServiceBuilder;
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::ProxyConfig;
use crate::error::ProxyError;
use crate::http::request::{access_log, MakeRequestUuid};
use crate::http::response::{
    error_response, json_response, preflight_response, unsupported_method, CorsHeaders,
};
use crate::lifecycle::Shutdown;
use crate::observability::metrics;
use crate::routing::{classify, Route};
use crate::upstream::UpstreamClient;

/// Application state injected into the handler.
#[derive(Clone)]
pub struct AppState {
    pub upstream: Arc<UpstreamClient>,
    pub cors: Arc<CorsHeaders>,
}

/// HTTP server for the CORS proxy.
pub struct HttpServer {
    router: Router,
    config: ProxyConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: ProxyConfig) -> Result<Self, ProxyError> {
        let state = AppState {
            upstream: Arc::new(UpstreamClient::new(&config.upstream, &config.timeouts)?),
            cors: Arc::new(CorsHeaders::from_config(&config.cors)?),
        };

        let router = Self::build_router(&config, state);
        Ok(Self { router, config })
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &ProxyConfig, state: AppState) -> Router {
        Router::new().fallback(proxy_handler).with_state(state).layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                .layer(PropagateRequestIdLayer::x_request_id())
                .layer(middleware::from_fn(access_log))
                .layer(TraceLayer::new_for_http())
                .layer(TimeoutLayer::new(Duration::from_secs(
                    config.timeouts.request_secs,
                ))),
        )
    }

    /// The fully layered router, for in-process use.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &ProxyConfig {
        &self.config
    }

    /// Bind the configured address and start serving in a background task.
    pub async fn start(self) -> io::Result<RunningServer> {
        let listener = TcpListener::bind(self.config.listener.bind_address()).await?;
        self.start_on(listener)
    }

    /// Start serving on an already bound listener.
    pub fn start_on(self, listener: TcpListener) -> io::Result<RunningServer> {
        let local_addr = listener.local_addr()?;
        let shutdown = Shutdown::new();
        let signal = shutdown.signal();

        let task = tokio::spawn(self.run(listener, signal));

        Ok(RunningServer {
            local_addr,
            shutdown,
            task: Some(task),
        })
    }

    /// Serve on `listener` until `shutdown` resolves, then drain in-flight requests.
    pub async fn run<F>(self, listener: TcpListener, shutdown: F) -> io::Result<()>
    where
        F: std::future::Future<Output = ()> + Send + 'static,
    {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            upstream = %self.config.upstream.base_url,
            "HTTP server starting"
        );

        let app = self
            .router
            .into_make_service_with_connect_info::<SocketAddr>();

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown)
            .await?;

        tracing::info!(address = %addr, "HTTP server stopped");
        Ok(())
    }
}

/// Handle to a server started with [`HttpServer::start`].
///
/// Owns the listening socket: dropping the handle shuts the server down.
#[derive(Debug)]
pub struct RunningServer {
    local_addr: SocketAddr,
    shutdown: Shutdown,
    task: Option<JoinHandle<io::Result<()>>>,
}

impl RunningServer {
    /// Address the listener is actually bound to.
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Stop accepting, wait for in-flight requests, close the socket.
    pub async fn stop(mut self) -> io::Result<()> {
        self.shutdown.trigger();
        match self.task.take() {
            Some(task) => task.await.map_err(io::Error::other)?,
            None => Ok(()),
        }
    }
}

impl Drop for RunningServer {
    fn drop(&mut self) {
        if self.task.is_some() {
            self.shutdown.trigger();
        }
    }
}

/// Main proxy handler.
/// Answers preflights, classifies GETs and forwards matches upstream.
async fn proxy_handler(State(state): State<AppState>, request: Request<Body>) -> Response {
    let start_time = Instant::now();
    let method = request.method().clone();

    if method == Method::OPTIONS {
        metrics::record_request("preflight", 200, start_time);
        return preflight_response(&state.cors);
    }

    if method != Method::GET {
        tracing::warn!(method = %method, "Unsupported method");
        metrics::record_request("unsupported", 501, start_time);
        return unsupported_method(method.as_str());
    }

    let route = classify(request.uri().path(), request.uri().query());
    if route == Route::Unmatched {
        tracing::warn!(path = %request.uri().path(), "No route matched");
        let response = error_response(&state.cors, &ProxyError::RouteNotFound);
        metrics::record_request(route.name(), response.status().as_u16(), start_time);
        return response;
    }

    let response = match state.upstream.fetch(&route).await {
        Ok(body) => json_response(&state.cors, body),
        Err(e) => {
            tracing::error!(route = route.name(), error = %e, "Error proxying request");
            metrics::record_upstream_error(route.name());
            error_response(&state.cors, &e)
        }
    };

    metrics::record_request(route.name(), response.status().as_u16(), start_time);
    response
}
