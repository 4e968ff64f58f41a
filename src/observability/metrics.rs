//! Metrics collection and exposition.
//!
//! # Metrics
//! - `connector_requests_total` (counter): invocations by operation, status
//! - `connector_request_duration_seconds` (histogram): latency by operation
//!
//! # Design Decisions
//! - Recording goes through the `metrics` facade; without an installed
//!   recorder the calls are no-ops
//! - Prometheus exporter serves its own HTTP listener

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

/// Install the Prometheus recorder and its scrape endpoint.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics endpoint listening");
    Ok(())
}

/// Record one completed script invocation.
pub fn record_request(operation: &'static str, status: u16, start_time: Instant) {
    let status = status.to_string();
    ::metrics::counter!(
        "connector_requests_total",
        "operation" => operation,
        "status" => status
    )
    .increment(1);
    ::metrics::histogram!(
        "connector_request_duration_seconds",
        "operation" => operation
    )
    .record(start_time.elapsed().as_secs_f64());
}
