//! Resolution error definitions.

use thiserror::Error;

use crate::topology::Channel;

/// Errors returned by the resolvers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// The cascade found nothing usable for the group.
    #[error("can't get version for group {group}")]
    NoVersionForGroup { group: String },

    /// Exact channel/group lookup missed.
    #[error("no matching version for group {group}, channel {channel}")]
    NoMatchingVersion { group: String, channel: Channel },

    /// No topology has been published yet.
    #[error("release topology has not been loaded")]
    TopologyUnavailable,
}

impl ResolveError {
    /// Short label for metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            ResolveError::NoVersionForGroup { .. } => "no_version_for_group",
            ResolveError::NoMatchingVersion { .. } => "no_matching_version",
            ResolveError::TopologyUnavailable => "topology_unavailable",
        }
    }
}

/// Result type for resolution operations.
pub type ResolveResult<T> = Result<T, ResolveError>;
