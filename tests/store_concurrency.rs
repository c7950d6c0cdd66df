//! Concurrent refresh and read of the topology store.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;

use docs_version_router::resolve::resolve_group_version;
use docs_version_router::topology::{
    Channel, ChannelEntry, ChannelThreshold, Group, ReleaseTopology, TopologyStore,
};

const WRITES: u64 = 200;
const READERS: usize = 4;

/// Every channel of every group carries the same revision number, so a
/// reader can tell a torn snapshot from a consistent one.
fn topology(revision: u64) -> ReleaseTopology {
    let entry = |name| ChannelEntry {
        name,
        version: format!("v1.0.{revision}"),
    };
    ReleaseTopology::new(vec![
        Group::new("v1", vec![entry(Channel::Stable), entry(Channel::Beta)]),
        Group::new("v2", vec![entry(Channel::Alpha)]),
    ])
    .unwrap()
}

#[test]
fn test_readers_never_see_torn_snapshots() {
    let store = Arc::new(TopologyStore::with_topology(topology(0)));
    let done = Arc::new(AtomicBool::new(false));

    let readers: Vec<_> = (0..READERS)
        .map(|_| {
            let store = store.clone();
            let done = done.clone();
            thread::spawn(move || {
                let mut last_generation = 0;
                let mut reads = 0u64;
                while !done.load(Ordering::Acquire) || reads == 0 {
                    let snapshot = store.snapshot().unwrap();
                    assert!(snapshot.generation >= last_generation);
                    last_generation = snapshot.generation;

                    let topology = &snapshot.topology;
                    let stable = topology.lookup("v1", Channel::Stable).unwrap();
                    assert_eq!(topology.lookup("v1", Channel::Beta), Some(stable));
                    assert_eq!(topology.lookup("v2", Channel::Alpha), Some(stable));
                    assert_eq!(
                        resolve_group_version(topology, "v1", ChannelThreshold::Stable).unwrap(),
                        stable
                    );
                    reads += 1;
                }
                reads
            })
        })
        .collect();

    for revision in 1..=WRITES {
        store.publish(topology(revision));
    }
    done.store(true, Ordering::Release);

    for reader in readers {
        assert!(reader.join().unwrap() > 0);
    }

    let snapshot = store.snapshot().unwrap();
    assert_eq!(snapshot.generation, WRITES + 1);
    assert_eq!(
        snapshot.topology.lookup("v1", Channel::Stable),
        Some(format!("v1.0.{WRITES}").as_str())
    );
}

#[test]
fn test_concurrent_publishers_get_distinct_generations() {
    let store = Arc::new(TopologyStore::new());

    let writers: Vec<_> = (0..4u64)
        .map(|w| {
            let store = store.clone();
            thread::spawn(move || {
                (0..50u64)
                    .map(|i| store.publish(topology(w * 100 + i)))
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    let mut generations: Vec<u64> = writers
        .into_iter()
        .flat_map(|w| w.join().unwrap())
        .collect();
    generations.sort_unstable();
    generations.dedup();

    assert_eq!(generations, (1..=200).collect::<Vec<u64>>());
    assert_eq!(store.generation(), 200);
}
