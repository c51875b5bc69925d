//! Metrics collection and exposition.
//!
//! # Metrics
//! - `bootstrap_requests_total` (counter): requests by method and status
//! - `bootstrap_request_duration_seconds` (histogram): latency distribution
//! - `bootstrap_reloads_total` (counter): serve-loop restarts
//!
//! Recording is a no-op until the exporter is installed, so disabled metrics
//! cost nothing beyond the macro call.

use std::net::SocketAddr;
use std::time::Instant;

use metrics::{counter, describe_counter, describe_histogram, histogram};
use metrics_exporter_prometheus::PrometheusBuilder;

/// Install the Prometheus exporter on its own address.
pub fn init_metrics(addr: SocketAddr) {
    let builder = PrometheusBuilder::new().with_http_listener(addr);

    match builder.install() {
        Ok(()) => {
            describe_counter!(
                "bootstrap_requests_total",
                "Requests served, by method and status code"
            );
            describe_histogram!(
                "bootstrap_request_duration_seconds",
                "Request latency in seconds"
            );
            describe_counter!("bootstrap_reloads_total", "Serve-loop restarts");

            tracing::info!(address = %addr, "Metrics exporter listening");
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to install metrics exporter");
        }
    }
}

/// Record one served request.
pub fn record_request(method: &str, status: u16, start: Instant) {
    counter!(
        "bootstrap_requests_total",
        "method" => method.to_string(),
        "status" => status.to_string()
    )
    .increment(1);
    histogram!("bootstrap_request_duration_seconds").record(start.elapsed().as_secs_f64());
}

/// Record one serve-loop restart.
pub fn record_reload() {
    counter!("bootstrap_reloads_total").increment(1);
}
