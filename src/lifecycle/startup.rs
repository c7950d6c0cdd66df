//! Watch mode orchestration.
//!
//! # Responsibilities
//! - Publish the initial topology before anything else
//! - Start the metrics exporter when enabled
//! - Keep the store in sync with the channels file until shutdown
//!
//! # Design Decisions
//! - Fail fast: an unreadable channels file at startup is fatal
//! - Later refresh failures are logged and the last good snapshot stays
//! - Explicit reload requests (SIGHUP) bypass the file watcher

use std::net::{AddrParseError, SocketAddr};
use std::path::Path;
use std::sync::Arc;

use metrics_exporter_prometheus::BuildError;
use thiserror::Error;
use tokio::sync::mpsc;

use crate::config::{RouterConfig, TopologyWatcher};
use crate::lifecycle::shutdown::ShutdownListener;
use crate::observability::init_metrics;
use crate::topology::{LoadError, TopologyStore};

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("initial topology load failed: {0}")]
    Topology(#[from] LoadError),

    #[error("invalid metrics address: {0}")]
    MetricsAddress(#[from] AddrParseError),

    #[error("metrics exporter failed to start: {0}")]
    Metrics(#[from] BuildError),

    #[error("file watcher failed to start: {0}")]
    Watch(#[from] notify::Error),
}

/// Run watch mode until `shutdown` fires.
///
/// Every `()` received on `reload_rx` forces a re-read of the channels file.
pub async fn run_watch(
    config: &RouterConfig,
    store: Arc<TopologyStore>,
    mut shutdown: ShutdownListener,
    mut reload_rx: mpsc::UnboundedReceiver<()>,
) -> Result<(), StartupError> {
    let path = Path::new(&config.channels_file);
    let generation = store.refresh_from_path(path)?;
    tracing::info!(path = ?path, generation, "Initial topology loaded");

    if config.observability.metrics_enabled {
        let addr: SocketAddr = config.observability.metrics_address.parse()?;
        init_metrics(addr)?;
    }

    let (watcher, mut update_rx) = TopologyWatcher::new(path, store.clone());
    // Dropping the handle stops the watcher.
    let _watcher = watcher.run()?;

    loop {
        tokio::select! {
            _ = shutdown.wait() => break,
            Some(generation) = update_rx.recv() => {
                tracing::debug!(generation, "Watcher published topology");
            }
            Some(()) = reload_rx.recv() => {
                if let Ok(generation) = store.refresh_from_path(path) {
                    tracing::info!(generation, "Topology reloaded on request");
                }
            }
        }
    }

    tracing::info!(generation = store.generation(), "Watch mode stopped");
    Ok(())
}
