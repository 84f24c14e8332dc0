//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with a single catch-all dispatch handler
//! - Wire up middleware (request ID, timeout, tracing)
//! - Resolve every request through the current routing::Router
//! - Swap in rebuilt routers when the route file changes
//! - Record resolution metrics

use std::sync::Arc;
use std::time::{Duration, Instant};

use arc_swap::ArcSwap;
use axum::{
    body::Body,
    extract::State,
    http::{Request, StatusCode},
    response::Response,
    routing::any,
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::{broadcast, mpsc};
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::{build_router, AppConfig, ConfigError, ServerConfig};
use crate::http::request::{request_id, MakeRequestUuid};
use crate::http::response::{outcome_response, route_error_response};
use crate::lifecycle::shutdown;
use crate::observability::metrics;
use crate::routing::{Router as ResourceRouter, StaticRegistry};

/// The live router, replaced wholesale on reload.
pub type SharedRouter = Arc<ArcSwap<ResourceRouter<StaticRegistry>>>;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub router: SharedRouter,
}

/// HTTP dispatch server.
pub struct HttpServer {
    app: Router,
    router: SharedRouter,
    config: ServerConfig,
}

impl HttpServer {
    pub fn new(router: ResourceRouter<StaticRegistry>, config: ServerConfig) -> Self {
        let router: SharedRouter = Arc::new(ArcSwap::from_pointee(router));
        let state = AppState {
            router: router.clone(),
        };
        let app = Self::build_app(&config, state);
        Self { app, router, config }
    }

    /// Build the Axum app with all middleware layers.
    fn build_app(config: &ServerConfig, state: AppState) -> Router {
        Router::new()
            .route("/", any(dispatch))
            .route("/{*path}", any(dispatch))
            .with_state(state)
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(timeout_layer(Duration::from_secs(config.request_timeout_secs)))
            .layer(TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
                tracing::info_span!(
                    "request",
                    method = %request.method(),
                    uri = %request.uri(),
                    request_id = %request_id(request),
                )
            }))
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
    }

    /// The Axum app, for driving in-process.
    pub fn app(&self) -> Router {
        self.app.clone()
    }

    /// Handle to the live router.
    pub fn router(&self) -> SharedRouter {
        self.router.clone()
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Serve until `shutdown` fires, applying route file updates as they arrive.
    pub async fn run(
        self,
        listener: TcpListener,
        mut config_updates: mpsc::UnboundedReceiver<AppConfig>,
        shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        let router = self.router.clone();
        tokio::spawn(async move {
            while let Some(config) = config_updates.recv().await {
                match apply_update(&router, &config) {
                    Ok(()) => tracing::info!(handlers = config.handlers.len(), "Router reloaded"),
                    Err(e) => tracing::error!("Failed to rebuild router: {}. Keeping current router.", e),
                }
            }
        });

        axum::serve(listener, self.app)
            .with_graceful_shutdown(shutdown::wait(shutdown))
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Answers 408 once a request has run for `timeout`.
fn timeout_layer(timeout: Duration) -> TimeoutLayer {
    TimeoutLayer::with_status_code(StatusCode::REQUEST_TIMEOUT, timeout)
}

/// Rebuild the router from `config` and swap it in.
pub fn apply_update(router: &ArcSwap<ResourceRouter<StaticRegistry>>, config: &AppConfig) -> Result<(), ConfigError> {
    let rebuilt = build_router(config)?;
    router.store(Arc::new(rebuilt));
    Ok(())
}

/// Resolve the request and describe the outcome.
async fn dispatch(State(state): State<AppState>, request: Request<Body>) -> Response {
    let start = Instant::now();
    let method = request.method().as_str();
    let path = request.uri().path();

    let router = state.router.load();
    match router.route(method, path) {
        Ok(outcome) => {
            metrics::record_resolution(method, outcome.status, start);
            tracing::debug!(
                request_id = %request_id(&request),
                status = outcome.status,
                handler = ?outcome.route().map(|r| r.target()),
                "Dispatched request"
            );
            outcome_response(&outcome)
        }
        Err(e) => {
            metrics::record_resolution(method, 500, start);
            tracing::warn!(
                request_id = %request_id(&request),
                method = %method,
                path = %path,
                error = %e,
                "Handler hierarchy is misconfigured"
            );
            route_error_response(&e)
        }
    }
}
