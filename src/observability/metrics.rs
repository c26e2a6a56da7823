//! Metrics collection and exposition.
//!
//! # Metrics
//! - `site_route_resolutions_total` (counter): resolutions by `kind` (exact, prefix, none)
//! - `site_page_requests_total` (counter): page shell responses by `outcome`
//! - `site_request_duration_seconds` (histogram): handler latency by `endpoint`

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::PrometheusBuilder;

use crate::routing::MatchKind;

/// Install the Prometheus exporter listening on `addr`.
/// Must be called from within a Tokio runtime.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics exporter listening"),
        Err(e) => tracing::error!(address = %addr, error = %e, "Failed to install metrics exporter"),
    }
}

/// Record the outcome of one route resolution.
pub fn record_resolution(kind: Option<MatchKind>) {
    let kind = kind.map(|k| k.as_str()).unwrap_or("none");
    metrics::counter!("site_route_resolutions_total", "kind" => kind).increment(1);
}

/// Record a served page shell.
pub fn record_page(fallback: bool) {
    let outcome = if fallback { "fallback" } else { "content" };
    metrics::counter!("site_page_requests_total", "outcome" => outcome).increment(1);
}

/// Record handler latency.
pub fn record_latency(endpoint: &'static str, start: Instant) {
    metrics::histogram!("site_request_duration_seconds", "endpoint" => endpoint)
        .record(start.elapsed().as_secs_f64());
}
