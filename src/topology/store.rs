//! Atomic publication of topology snapshots.

use std::path::Path;
use std::sync::Arc;

use arc_swap::ArcSwapOption;

use crate::observability::metrics;
use crate::resolve::ResolveError;
use crate::topology::loader::{load_topology, parse_topology, LoadError, TopologyFormat};
use crate::topology::model::ReleaseTopology;

/// A published topology together with its publication number.
#[derive(Debug)]
pub struct TopologySnapshot {
    /// Starts at 1 and increases by one per publication.
    pub generation: u64,
    pub topology: Arc<ReleaseTopology>,
}

/// Process-wide holder of the current topology.
///
/// Readers take one [`TopologySnapshot`] per request and keep using it even
/// if a refresh lands in the meantime. A failed refresh leaves the previous
/// snapshot in place.
#[derive(Debug, Default)]
pub struct TopologyStore {
    current: ArcSwapOption<TopologySnapshot>,
}

impl TopologyStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store with an initial topology already published.
    pub fn with_topology(topology: ReleaseTopology) -> Self {
        let store = Self::new();
        store.publish(topology);
        store
    }

    /// Publish a fully built topology. Returns its generation.
    pub fn publish(&self, topology: ReleaseTopology) -> u64 {
        let topology = Arc::new(topology);
        let previous = self.current.rcu(|current| {
            let generation = current.as_ref().map_or(0, |s| s.generation) + 1;
            Some(Arc::new(TopologySnapshot {
                generation,
                topology: topology.clone(),
            }))
        });
        let generation = previous.as_ref().map_or(0, |s| s.generation) + 1;
        metrics::record_topology_generation(generation);
        generation
    }

    /// Parse raw bytes and publish the result.
    pub fn refresh(&self, data: &[u8], format: TopologyFormat) -> Result<u64, LoadError> {
        self.finish_refresh(parse_topology(data, format))
    }

    /// Load a topology file and publish the result.
    pub fn refresh_from_path(&self, path: &Path) -> Result<u64, LoadError> {
        self.finish_refresh(load_topology(path))
    }

    fn finish_refresh(&self, loaded: Result<ReleaseTopology, LoadError>) -> Result<u64, LoadError> {
        match loaded {
            Ok(topology) => {
                let generation = self.publish(topology);
                metrics::record_topology_reload("success");
                tracing::info!(generation, "Topology published");
                Ok(generation)
            }
            Err(e) => {
                metrics::record_topology_reload("failure");
                tracing::error!(error = %e, "Topology refresh failed, keeping previous snapshot");
                Err(e)
            }
        }
    }

    /// The current snapshot, or an error if nothing was ever published.
    pub fn snapshot(&self) -> Result<Arc<TopologySnapshot>, ResolveError> {
        self.current.load_full().ok_or(ResolveError::TopologyUnavailable)
    }

    pub fn generation(&self) -> u64 {
        self.current.load().as_ref().map_or(0, |s| s.generation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::topology::Channel;

    const V1: &str = r#"{"groups":[{"name":"v1","channels":[{"name":"stable","version":"v1.0"}]}]}"#;
    const V2: &str = r#"{"groups":[{"name":"v1","channels":[{"name":"stable","version":"v1.1"}]}]}"#;

    #[test]
    fn test_empty_store_is_unavailable() {
        let store = TopologyStore::new();
        assert!(matches!(store.snapshot(), Err(ResolveError::TopologyUnavailable)));
        assert_eq!(store.generation(), 0);
    }

    #[test]
    fn test_refresh_increments_generation() {
        let store = TopologyStore::new();
        assert_eq!(store.refresh(V1.as_bytes(), TopologyFormat::Json).unwrap(), 1);
        assert_eq!(store.refresh(V2.as_bytes(), TopologyFormat::Json).unwrap(), 2);

        let snapshot = store.snapshot().unwrap();
        assert_eq!(snapshot.generation, 2);
        assert_eq!(snapshot.topology.lookup("v1", Channel::Stable), Some("v1.1"));
    }

    #[test]
    fn test_failed_refresh_keeps_previous() {
        let store = TopologyStore::new();
        store.refresh(V1.as_bytes(), TopologyFormat::Json).unwrap();
        assert!(store.refresh(b"{not json", TopologyFormat::Json).is_err());

        let snapshot = store.snapshot().unwrap();
        assert_eq!(snapshot.generation, 1);
        assert_eq!(snapshot.topology.lookup("v1", Channel::Stable), Some("v1.0"));
    }

    #[test]
    fn test_empty_refresh_keeps_previous() {
        let store = TopologyStore::new();
        store.refresh(V1.as_bytes(), TopologyFormat::Json).unwrap();

        assert!(store.refresh(b"", TopologyFormat::Yaml).is_err());
        assert!(store.refresh(b"{}", TopologyFormat::Json).is_err());

        let snapshot = store.snapshot().unwrap();
        assert_eq!(snapshot.generation, 1);
        assert_eq!(store.generation(), 1);
        assert_eq!(snapshot.topology.lookup("v1", Channel::Stable), Some("v1.0"));
    }

    #[test]
    fn test_held_snapshot_survives_refresh() {
        let store = TopologyStore::new();
        store.refresh(V1.as_bytes(), TopologyFormat::Json).unwrap();
        let held = store.snapshot().unwrap();

        store.refresh(V2.as_bytes(), TopologyFormat::Json).unwrap();
        assert_eq!(held.topology.lookup("v1", Channel::Stable), Some("v1.0"));
        assert_eq!(store.snapshot().unwrap().generation, 2);
    }
}
