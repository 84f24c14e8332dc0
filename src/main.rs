//! Resource router dispatch server.
//!
//! Resolves every incoming request to a handler by naming convention and
//! answers with a JSON description of the outcome.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request
//!     ──────────────▶ http::server ──▶ routing::Router ──▶ registry lookups
//!                          │                 │
//!                          │                 ▼
//!     Client Response      │            Outcome (200 / 404 / 405)
//!     ◀────────────── http::response ◀───────┘
//!
//!     routes.toml ──▶ config::loader ──▶ config::validation ──▶ Router
//!          │
//!          └── config::watcher (hot reload, atomic swap)
//! ```
//!
//! Usage: `resource-router [ROUTE_FILE]` (defaults to `routes.toml`).

use std::path::PathBuf;

use tokio::net::TcpListener;

use resource_router::config::{build_router, load_config, ConfigWatcher};
use resource_router::http::HttpServer;
use resource_router::lifecycle::{signals, Shutdown};
use resource_router::observability::{logging, metrics};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let path = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("routes.toml"));

    let config = load_config(&path)?;
    logging::init(&config.observability.log_level);

    tracing::info!("resource-router v0.1.0 starting");
    tracing::info!(
        path = %path.display(),
        namespace = %config.router.namespace,
        handlers = config.handlers.len(),
        bind_address = %config.server.bind_address,
        request_timeout_secs = config.server.request_timeout_secs,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => metrics::init_metrics(addr),
            Err(_) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }

    let router = build_router(&config)?;

    let (watcher, config_updates) = ConfigWatcher::new(&path, config.clone());
    // dropping the watcher stops reload events
    let _watcher = match watcher.run() {
        Ok(w) => Some(w),
        Err(e) => {
            tracing::warn!(error = %e, "Hot reload disabled");
            None
        }
    };

    let listener = TcpListener::bind(&config.server.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    signals::spawn_signal_listener(shutdown);

    let server = HttpServer::new(router, config.server.clone());
    server.run(listener, config_updates, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
