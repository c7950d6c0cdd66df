//! Stability cascade: pick the version to serve for a group.

use crate::observability::metrics;
use crate::resolve::error::{ResolveError, ResolveResult};
use crate::topology::{Channel, ChannelThreshold, ReleaseTopology};

/// Sentinel version served when the threshold is `latest`.
pub const LATEST: &str = "latest";

/// Resolve the version to serve for `group` under `threshold`.
///
/// Candidates are tried stable, ea, beta, alpha; `stable` always qualifies,
/// the others only when the threshold permits them. If nothing qualifies
/// but the group has an alpha entry, that entry is served anyway.
pub fn resolve_group_version(
    topology: &ReleaseTopology,
    group: &str,
    threshold: ChannelThreshold,
) -> ResolveResult<String> {
    if threshold == ChannelThreshold::Latest {
        return Ok(LATEST.to_string());
    }

    let channels = topology.channels_of(group);
    if channels.is_empty() {
        return Err(no_version(group));
    }

    let selected = Channel::CASCADE
        .into_iter()
        .filter(|channel| threshold.permits(*channel))
        .find_map(|channel| channels.get(&channel).map(|version| (channel, *version)));

    if let Some((channel, version)) = selected {
        tracing::debug!(group = %group, channel = %channel, version = %version, "Cascade resolved");
        return Ok(version.to_string());
    }

    match channels.get(&Channel::Alpha) {
        Some(version) => {
            tracing::error!(
                group = %group,
                threshold = %threshold,
                version = %version,
                "No channel within threshold, falling back to alpha"
            );
            metrics::record_cascade_fallback(group);
            Ok(version.to_string())
        }
        None => Err(no_version(group)),
    }
}

/// The most stable of stable, ea, beta and alpha for `group`, ignoring any
/// threshold. Used for the status report.
pub fn root_version<'a>(topology: &'a ReleaseTopology, group: &str) -> Option<&'a str> {
    Channel::CASCADE
        .into_iter()
        .find_map(|channel| topology.lookup(group, channel))
}

fn no_version(group: &str) -> ResolveError {
    let err = ResolveError::NoVersionForGroup {
        group: group.to_string(),
    };
    metrics::record_resolution_failure(err.kind());
    err
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::topology::{ChannelEntry, Group};

    fn topology(channels: &[(Channel, &str)]) -> ReleaseTopology {
        let entries = channels
            .iter()
            .map(|(name, version)| ChannelEntry {
                name: *name,
                version: version.to_string(),
            })
            .collect();
        ReleaseTopology::new(vec![Group::new("v1", entries)]).unwrap()
    }

    #[test]
    fn test_latest_bypasses_topology() {
        let empty = ReleaseTopology::default();
        assert_eq!(
            resolve_group_version(&empty, "v1", ChannelThreshold::Latest).unwrap(),
            "latest"
        );
    }

    #[test]
    fn test_stable_always_wins() {
        let t = topology(&[(Channel::Stable, "v1.5"), (Channel::Alpha, "v1.6-alpha")]);
        assert_eq!(resolve_group_version(&t, "v1", ChannelThreshold::Alpha).unwrap(), "v1.5");
    }

    #[test]
    fn test_ea_under_stable_threshold() {
        let t = topology(&[(Channel::Ea, "v1.9"), (Channel::Alpha, "v1.10-alpha1")]);
        assert_eq!(resolve_group_version(&t, "v1", ChannelThreshold::Stable).unwrap(), "v1.9");
    }

    #[test]
    fn test_alpha_last_resort() {
        let t = topology(&[(Channel::Alpha, "v1.10-alpha1")]);
        assert_eq!(
            resolve_group_version(&t, "v1", ChannelThreshold::Ea).unwrap(),
            "v1.10-alpha1"
        );
    }

    #[test]
    fn test_threshold_skips_ea() {
        let t = topology(&[(Channel::Ea, "v1.9"), (Channel::Beta, "v1.10-beta1")]);
        assert_eq!(
            resolve_group_version(&t, "v1", ChannelThreshold::Beta).unwrap(),
            "v1.10-beta1"
        );
    }

    #[test]
    fn test_nothing_within_threshold_without_alpha() {
        let t = topology(&[(Channel::Ea, "v1.9")]);
        assert_eq!(
            resolve_group_version(&t, "v1", ChannelThreshold::Beta),
            Err(ResolveError::NoVersionForGroup { group: "v1".into() })
        );
    }

    #[test]
    fn test_rock_solid_only_is_not_served() {
        let t = topology(&[(Channel::RockSolid, "v1.0")]);
        assert!(resolve_group_version(&t, "v1", ChannelThreshold::Stable).is_err());
    }

    #[test]
    fn test_missing_group() {
        let t = topology(&[(Channel::Stable, "v1.5")]);
        assert!(matches!(
            resolve_group_version(&t, "v7", ChannelThreshold::Stable),
            Err(ResolveError::NoVersionForGroup { .. })
        ));
    }

    #[test]
    fn test_root_version() {
        let t = topology(&[(Channel::Beta, "v1.3-beta"), (Channel::Ea, "v1.2")]);
        assert_eq!(root_version(&t, "v1"), Some("v1.2"));
        assert_eq!(root_version(&t, "v2"), None);
    }
}
