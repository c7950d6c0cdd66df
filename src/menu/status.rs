//! Status report for health endpoints and the `status` command.

use serde::Serialize;

use crate::resolve::root_version;
use crate::topology::{encode_version, Group, TopologyStore};

const UNKNOWN_VERSION: &str = "unknown";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusReport {
    /// `ok` or `error`.
    pub status: String,
    /// Refresh error messages joined by a space; empty when healthy.
    pub msg: String,
    pub root_version: String,
    #[serde(rename = "rootVersionURL")]
    pub root_version_url: String,
    #[serde(rename = "releasechannels")]
    pub release_channels: Vec<Group>,
}

impl StatusReport {
    /// Build a report from the current snapshot.
    ///
    /// `errors` are the messages of failed refreshes since the last check.
    /// A store that never published counts as an error as well.
    pub fn build(store: &TopologyStore, errors: &[String], default_group: &str) -> Self {
        let mut msg: Vec<String> = errors.to_vec();

        let (root_version, release_channels) = match store.snapshot() {
            Ok(snapshot) => (
                root_version(&snapshot.topology, default_group)
                    .unwrap_or(UNKNOWN_VERSION)
                    .to_string(),
                snapshot.topology.groups().to_vec(),
            ),
            Err(e) => {
                msg.push(e.to_string());
                (UNKNOWN_VERSION.to_string(), Vec::new())
            }
        };

        Self {
            status: if msg.is_empty() { "ok" } else { "error" }.to_string(),
            msg: msg.join(" "),
            root_version_url: encode_version(&root_version),
            root_version,
            release_channels,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::topology::{Channel, ChannelEntry, ReleaseTopology};

    fn store() -> TopologyStore {
        TopologyStore::with_topology(
            ReleaseTopology::new(vec![Group::new(
                "v1",
                vec![
                    ChannelEntry {
                        name: Channel::Alpha,
                        version: "v1.3.0".into(),
                    },
                    ChannelEntry {
                        name: Channel::Ea,
                        version: "v1.2.3+fix6".into(),
                    },
                ],
            )])
            .unwrap(),
        )
    }

    #[test]
    fn test_status_ok() {
        let report = StatusReport::build(&store(), &[], "v1");
        assert_eq!(report.status, "ok");
        assert_eq!(report.msg, "");
        assert_eq!(report.root_version, "v1.2.3+fix6");
        assert_eq!(report.root_version_url, "v1.2.3-plus-fix6");
        assert_eq!(report.release_channels.len(), 1);
    }

    #[test]
    fn test_status_unknown_root_version() {
        let report = StatusReport::build(&store(), &[], "v9");
        assert_eq!(report.status, "ok");
        assert_eq!(report.root_version, "unknown");
    }

    #[test]
    fn test_status_with_errors() {
        let report = StatusReport::build(&store(), &["bad file".to_string()], "v1");
        assert_eq!(report.status, "error");
        assert_eq!(report.msg, "bad file");
        assert_eq!(report.root_version, "v1.2.3+fix6");

        let report = StatusReport::build(&TopologyStore::new(), &[], "v1");
        assert_eq!(report.status, "error");
        assert!(!report.msg.is_empty());
        assert!(report.release_channels.is_empty());
    }

    #[test]
    fn test_status_json_field_names() {
        let json = serde_json::to_value(StatusReport::build(&store(), &[], "v1")).unwrap();
        assert_eq!(json["rootVersionURL"], "v1.2.3-plus-fix6");
        assert_eq!(json["releasechannels"][0]["name"], "v1");
        assert_eq!(json["releasechannels"][0]["channels"][0]["name"], "alpha");
    }
}
