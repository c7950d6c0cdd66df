//! Metrics collection and exposition.
//!
//! # Metrics
//! - `docs_router_topology_reloads_total` (counter): refreshes by `outcome`
//! - `docs_router_topology_generation` (gauge): generation of the current snapshot
//! - `docs_router_cascade_fallbacks_total` (counter): alpha fallbacks by `group`
//! - `docs_router_resolution_failures_total` (counter): failed lookups by `kind`
//!
//! Recording without an installed recorder is a no-op, so library callers
//! and tests don't need to set anything up.

use std::net::SocketAddr;

use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

pub fn record_topology_reload(outcome: &'static str) {
    metrics::counter!("docs_router_topology_reloads_total", "outcome" => outcome).increment(1);
}

pub fn record_topology_generation(generation: u64) {
    metrics::gauge!("docs_router_topology_generation").set(generation as f64);
}

pub fn record_cascade_fallback(group: &str) {
    metrics::counter!("docs_router_cascade_fallbacks_total", "group" => group.to_string())
        .increment(1);
}

pub fn record_resolution_failure(kind: &'static str) {
    metrics::counter!("docs_router_resolution_failures_total", "kind" => kind).increment(1);
}

/// Install the Prometheus recorder and serve `/metrics` on `addr`.
///
/// Must be called from within a Tokio runtime.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics exporter listening");
    Ok(())
}
