//! Reverse lookup: which group and channel a version belongs to.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::observability::metrics;
use crate::resolve::error::{ResolveError, ResolveResult};
use crate::topology::{Channel, ReleaseTopology};

static BARE_GROUP_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^v[0-9]+$").expect("valid regex"));

/// Whether `token` is a bare major group such as `v2`.
pub fn is_bare_group(token: &str) -> bool {
    BARE_GROUP_RE.is_match(token)
}

/// Where a version token comes from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VersionOrigin {
    /// `None` when the token is a bare group rather than a channel version.
    pub channel: Option<Channel>,
    pub group: String,
}

/// Find the (channel, group) that publishes `version`.
///
/// A bare group token (`v2`) resolves to itself with no channel. Otherwise
/// groups are scanned highest first and, within a group, channels most
/// stable first; the first exact match wins.
pub fn channel_and_group_from_version(
    topology: &ReleaseTopology,
    version: &str,
) -> Option<VersionOrigin> {
    if is_bare_group(version) {
        return Some(VersionOrigin {
            channel: None,
            group: version.to_string(),
        });
    }

    for group in topology.groups_descending() {
        for channel in Channel::ALL {
            if topology.lookup(group, channel) == Some(version) {
                tracing::trace!(version = %version, group = %group, channel = %channel, "Reverse lookup matched");
                return Some(VersionOrigin {
                    channel: Some(channel),
                    group: group.to_string(),
                });
            }
        }
    }

    tracing::debug!(version = %version, "Version not found in topology");
    None
}

/// Exact (channel, group) → version lookup.
pub fn version_from_channel_and_group(
    topology: &ReleaseTopology,
    channel: Channel,
    group: &str,
) -> ResolveResult<String> {
    topology
        .lookup(group, channel)
        .map(str::to_string)
        .ok_or_else(|| {
            let err = ResolveError::NoMatchingVersion {
                group: group.to_string(),
                channel,
            };
            metrics::record_resolution_failure(err.kind());
            err
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::topology::{ChannelEntry, Group};

    fn entry(name: Channel, version: &str) -> ChannelEntry {
        ChannelEntry {
            name,
            version: version.to_string(),
        }
    }

    fn sample() -> ReleaseTopology {
        ReleaseTopology::new(vec![
            Group::new(
                "v1",
                vec![
                    entry(Channel::Stable, "v1.2.0"),
                    entry(Channel::Beta, "v1.3.0-beta2"),
                    entry(Channel::Alpha, "v1.3.0-beta2"),
                ],
            ),
            Group::new(
                "v2",
                vec![entry(Channel::RockSolid, "v2.0.1"), entry(Channel::Stable, "v2.0.1")],
            ),
        ])
        .unwrap()
    }

    #[test]
    fn test_bare_group() {
        let origin = channel_and_group_from_version(&sample(), "v2").unwrap();
        assert_eq!(origin.channel, None);
        assert_eq!(origin.group, "v2");
        assert!(!is_bare_group("v2.1"));
        assert!(!is_bare_group("2"));
    }

    #[test]
    fn test_exact_version() {
        let origin = channel_and_group_from_version(&sample(), "v1.3.0-beta2").unwrap();
        assert_eq!(origin.channel, Some(Channel::Beta));
        assert_eq!(origin.group, "v1");
    }

    #[test]
    fn test_most_stable_channel_wins() {
        let origin = channel_and_group_from_version(&sample(), "v2.0.1").unwrap();
        assert_eq!(origin.channel, Some(Channel::RockSolid));
    }

    #[test]
    fn test_unknown_version() {
        assert_eq!(channel_and_group_from_version(&sample(), "v9.9.9"), None);
    }

    #[test]
    fn test_version_from_channel_and_group() {
        let t = sample();
        assert_eq!(version_from_channel_and_group(&t, Channel::Stable, "v1").unwrap(), "v1.2.0");
        assert_eq!(
            version_from_channel_and_group(&t, Channel::Ea, "v1"),
            Err(ResolveError::NoMatchingVersion {
                group: "v1".into(),
                channel: Channel::Ea
            })
        );
    }
}
