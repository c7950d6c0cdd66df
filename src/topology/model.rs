//! Release topology: groups, their channels, and the versions they point at.

use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::topology::channel::Channel;

/// One channel of a group pointing at a concrete version.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ChannelEntry {
    #[serde(alias = "Name")]
    pub name: Channel,
    #[serde(alias = "Version")]
    pub version: String,
}

/// A release line (`v1`, `v1.2`) and its channels.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Group {
    #[serde(alias = "Name")]
    pub name: String,
    #[serde(default, alias = "Channels")]
    pub channels: Vec<ChannelEntry>,
}

impl Group {
    pub fn new(name: impl Into<String>, channels: Vec<ChannelEntry>) -> Self {
        Self {
            name: name.into(),
            channels,
        }
    }

    /// Numeric value used for ordering groups: `v1.2` is 1.2, anything
    /// unparseable is 0.
    pub fn numeric_value(&self) -> f64 {
        group_numeric_value(&self.name)
    }
}

pub(crate) fn group_numeric_value(name: &str) -> f64 {
    name.strip_prefix('v')
        .unwrap_or(name)
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

/// Structural violations rejected when building a topology.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TopologyError {
    #[error("group name must not be empty")]
    EmptyGroupName,

    #[error("duplicate group {group}")]
    DuplicateGroup { group: String },

    #[error("group {group} lists channel {channel} more than once")]
    DuplicateChannel { group: String, channel: Channel },
}

/// The full group/channel/version catalog.
///
/// Immutable once built. A refresh builds a new value and publishes it
/// through [`crate::topology::TopologyStore`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReleaseTopology {
    groups: Vec<Group>,
}

impl ReleaseTopology {
    /// Build a topology, enforcing unique group names and at most one
    /// entry per channel within a group.
    pub fn new(groups: Vec<Group>) -> Result<Self, TopologyError> {
        let mut names = HashSet::new();
        for group in &groups {
            if group.name.is_empty() {
                return Err(TopologyError::EmptyGroupName);
            }
            if !names.insert(group.name.as_str()) {
                return Err(TopologyError::DuplicateGroup {
                    group: group.name.clone(),
                });
            }
            let mut seen = HashSet::new();
            for entry in &group.channels {
                if !seen.insert(entry.name) {
                    return Err(TopologyError::DuplicateChannel {
                        group: group.name.clone(),
                        channel: entry.name,
                    });
                }
            }
        }
        Ok(Self { groups })
    }

    /// Groups in source order.
    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    pub fn group(&self, name: &str) -> Option<&Group> {
        self.groups.iter().find(|g| g.name == name)
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Group names, highest numeric value first. Ties keep source order.
    pub fn groups_descending(&self) -> Vec<&str> {
        let mut groups: Vec<&Group> = self.groups.iter().collect();
        groups.sort_by(|a, b| b.numeric_value().total_cmp(&a.numeric_value()));
        groups.into_iter().map(|g| g.name.as_str()).collect()
    }

    /// Channel → version mapping for a group; empty when the group is absent.
    pub fn channels_of(&self, group: &str) -> BTreeMap<Channel, &str> {
        self.group(group)
            .map(|g| {
                g.channels
                    .iter()
                    .map(|entry| (entry.name, entry.version.as_str()))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Exact (group, channel) lookup.
    pub fn lookup(&self, group: &str, channel: Channel) -> Option<&str> {
        self.group(group)?
            .channels
            .iter()
            .find(|entry| entry.name == channel)
            .map(|entry| entry.version.as_str())
    }
}
