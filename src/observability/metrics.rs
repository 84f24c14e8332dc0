//! Metrics collection and exposition.
//!
//! # Responsibilities
//! - Define resolution metrics (outcomes, latency)
//! - Expose Prometheus-compatible metrics endpoint
//!
//! # Metrics
//! - `router_resolutions_total` (counter): resolutions by method, status
//!   (methods outside the probed set are labelled `other`)
//! - `router_resolution_duration_seconds` (histogram): resolution latency
//!
//! # Design Decisions
//! - Recording is a no-op until a recorder is installed
//! - Status 500 is recorded for hierarchy errors

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::PrometheusBuilder;

use crate::routing::router::SUPPORTED_METHODS;

pub const RESOLUTIONS_TOTAL: &str = "router_resolutions_total";
pub const RESOLUTION_DURATION_SECONDS: &str = "router_resolution_duration_seconds";

/// Install the Prometheus recorder and serve it on `addr`.
///
/// Must be called from within a Tokio runtime.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics endpoint started"),
        Err(e) => tracing::error!(address = %addr, error = %e, "Failed to start metrics endpoint"),
    }
}

/// Record one resolution.
pub fn record_resolution(method: &str, status: u16, start: Instant) {
    let method = method_label(method);
    let status = status.to_string();
    metrics::counter!(RESOLUTIONS_TOTAL, "method" => method, "status" => status.clone()).increment(1);
    metrics::histogram!(RESOLUTION_DURATION_SECONDS, "method" => method, "status" => status)
        .record(start.elapsed().as_secs_f64());
}

/// Bounded label for a client-supplied method.
pub fn method_label(method: &str) -> &'static str {
    SUPPORTED_METHODS
        .iter()
        .copied()
        .find(|m| m.eq_ignore_ascii_case(method))
        .unwrap_or("other")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_label_is_bounded() {
        assert_eq!(method_label("GET"), "get");
        assert_eq!(method_label("patch"), "patch");
        assert_eq!(method_label("PURGE"), "other");
        assert_eq!(method_label("x-made-up-1"), "other");
        assert_eq!(method_label(""), "other");
    }
}
