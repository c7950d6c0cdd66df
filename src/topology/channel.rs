//! Release channels and the fixed stability order.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A stability tier within a group.
///
/// Variants are declared most-stable first, so the derived `Ord` is the
/// stability rank: `RockSolid < Stable < Ea < Beta < Alpha`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Channel {
    RockSolid,
    Stable,
    Ea,
    Beta,
    Alpha,
}

impl Channel {
    /// Every channel, most stable first.
    pub const ALL: [Channel; 5] = [
        Channel::RockSolid,
        Channel::Stable,
        Channel::Ea,
        Channel::Beta,
        Channel::Alpha,
    ];

    /// Candidates considered by the stability cascade, in evaluation order.
    pub const CASCADE: [Channel; 4] = [Channel::Stable, Channel::Ea, Channel::Beta, Channel::Alpha];

    /// Stability rank, 0 being the most stable.
    pub fn rank(self) -> u8 {
        self as u8
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Channel::RockSolid => "rock-solid",
            Channel::Stable => "stable",
            Channel::Ea => "ea",
            Channel::Beta => "beta",
            Channel::Alpha => "alpha",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string names no known channel or threshold.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown channel: {0}")]
pub struct UnknownChannel(pub String);

impl FromStr for Channel {
    type Err = UnknownChannel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Channel::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| UnknownChannel(s.to_string()))
    }
}

/// The configured default channel, used as the cascade threshold.
///
/// `latest` bypasses the topology entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChannelThreshold {
    #[default]
    Stable,
    Ea,
    Beta,
    Alpha,
    Latest,
}

impl ChannelThreshold {
    /// Whether a cascade candidate is within this threshold.
    ///
    /// `stable` is always permitted. `latest` never reaches the cascade.
    pub fn permits(self, channel: Channel) -> bool {
        let limit = match self {
            ChannelThreshold::Stable => Channel::Stable,
            ChannelThreshold::Ea => Channel::Ea,
            ChannelThreshold::Beta => Channel::Beta,
            ChannelThreshold::Alpha => Channel::Alpha,
            ChannelThreshold::Latest => return false,
        };
        // Looser thresholds admit only channels at least as volatile as
        // themselves; `stable` admits every cascade candidate.
        channel == Channel::Stable || limit <= channel
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ChannelThreshold::Stable => "stable",
            ChannelThreshold::Ea => "ea",
            ChannelThreshold::Beta => "beta",
            ChannelThreshold::Alpha => "alpha",
            ChannelThreshold::Latest => "latest",
        }
    }
}

impl fmt::Display for ChannelThreshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChannelThreshold {
    type Err = UnknownChannel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "stable" => Ok(ChannelThreshold::Stable),
            "ea" => Ok(ChannelThreshold::Ea),
            "beta" => Ok(ChannelThreshold::Beta),
            "alpha" => Ok(ChannelThreshold::Alpha),
            "latest" => Ok(ChannelThreshold::Latest),
            other => Err(UnknownChannel(other.to_string())),
        }
    }
}
