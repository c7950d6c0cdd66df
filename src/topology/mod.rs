//! Release topology subsystem.
//!
//! # Data Flow
//! ```text
//! channels file (JSON/YAML)
//!     → loader.rs (parse & deserialize)
//!     → model.rs (structural checks: unique groups, one entry per channel)
//!     → ReleaseTopology (immutable)
//!     → store.rs (atomic swap of Arc<TopologySnapshot>)
//!     → resolvers read one snapshot per request
//! ```
//!
//! # Design Decisions
//! - Topology is never mutated in place; a refresh publishes a new value
//! - Readers may see a stale snapshot, never a partially replaced one
//! - Channels are a closed enum whose declaration order is the stability rank
//! - Version strings stay opaque; only the URL codec transforms them

pub mod channel;
pub mod codec;
pub mod loader;
pub mod model;
pub mod store;

pub use channel::{Channel, ChannelThreshold, UnknownChannel};
pub use codec::{decode_version, encode_version};
pub use loader::{load_topology, parse_topology, LoadError, TopologyFormat};
pub use model::{ChannelEntry, Group, ReleaseTopology, TopologyError};
pub use store::{TopologySnapshot, TopologyStore};
