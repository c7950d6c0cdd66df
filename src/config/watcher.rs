//! Channels file watcher for hot reload.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use notify::{Config, Event, RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::mpsc;

use crate::topology::TopologyStore;

/// A watcher that republishes the topology when the channels file changes.
pub struct TopologyWatcher {
    path: PathBuf,
    store: Arc<TopologyStore>,
    update_tx: mpsc::UnboundedSender<u64>,
}

impl TopologyWatcher {
    /// Create a new TopologyWatcher.
    ///
    /// Returns the watcher and a receiver of published generation numbers.
    pub fn new(path: &Path, store: Arc<TopologyStore>) -> (Self, mpsc::UnboundedReceiver<u64>) {
        let (update_tx, update_rx) = mpsc::unbounded_channel();

        (
            Self {
                path: path.to_path_buf(),
                store,
                update_tx,
            },
            update_rx,
        )
    }

    /// Start watching the file in a background thread.
    ///
    /// Watching stops when the returned watcher is dropped.
    pub fn run(self) -> Result<RecommendedWatcher, notify::Error> {
        let tx = self.update_tx.clone();
        let path = self.path.clone();
        let store = self.store.clone();

        let mut watcher = RecommendedWatcher::new(
            move |res: notify::Result<Event>| match res {
                Ok(event) => {
                    if event.kind.is_modify() || event.kind.is_create() {
                        tracing::info!(path = ?path, "Channels file change detected, reloading...");
                        // Failures are logged by the store; the last good snapshot stays.
                        if let Ok(generation) = store.refresh_from_path(&path) {
                            let _ = tx.send(generation);
                        }
                    }
                }
                Err(e) => tracing::error!("Watch error: {:?}", e),
            },
            Config::default().with_poll_interval(Duration::from_secs(2)),
        )?;

        watcher.watch(&self.path, RecursiveMode::NonRecursive)?;

        tracing::info!(path = ?self.path, "Channels watcher started");
        Ok(watcher)
    }
}
