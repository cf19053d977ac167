//! Metrics collection and exposition.
//!
//! # Metrics
//! - `user_service_requests_total` (counter): requests by endpoint, status
//! - `user_service_request_duration_seconds` (histogram): latency
//!   distribution by endpoint
//!
//! # Design Decisions
//! - Labels carry the endpoint name from the route table, not the raw
//!   path, to keep cardinality bounded
//! - The exporter is optional; recording is a no-op until installed

use metrics::{counter, histogram};
use metrics_exporter_prometheus::PrometheusBuilder;
use std::net::SocketAddr;
use std::time::Instant;

/// Install the Prometheus exporter on the given address.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics exporter listening"),
        Err(e) => tracing::error!(error = %e, "Failed to install metrics exporter"),
    }
}

/// Record one handled request.
pub fn record_request(endpoint: &'static str, status: u16, start: Instant) {
    counter!(
        "user_service_requests_total",
        "endpoint" => endpoint,
        "status" => status.to_string()
    )
    .increment(1);

    histogram!(
        "user_service_request_duration_seconds",
        "endpoint" => endpoint
    )
    .record(start.elapsed().as_secs_f64());
}
