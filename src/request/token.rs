//! Classification of the version token carried in a request path.

use std::sync::LazyLock;

use regex::Regex;

use crate::resolve::cascade::LATEST;
use crate::resolve::reverse::is_bare_group;
use crate::topology::{decode_version, Channel};

// `v<major>.<minor>-<channel>`, e.g. `v1.2-beta`.
static GROUP_CHANNEL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(v[0-9]+\.[0-9]+)-(rock-solid|stable|ea|beta|alpha)$").expect("valid regex")
});

/// What a (decoded) version URL segment refers to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VersionToken {
    /// No version in the request.
    Empty,
    /// The `latest` pseudo-version.
    Latest,
    /// A bare major group such as `v1`.
    Group(String),
    /// A group plus channel such as `v1.2-beta`.
    GroupChannel { group: String, channel: Channel },
    /// Any other concrete version.
    Version(String),
}

impl VersionToken {
    /// Classify a raw URL segment. The segment is decoded first.
    pub fn parse(segment: &str) -> Self {
        if let Some(caps) = GROUP_CHANNEL_RE.captures(segment) {
            if let Ok(channel) = caps[2].parse() {
                return VersionToken::GroupChannel {
                    group: caps[1].to_string(),
                    channel,
                };
            }
        }

        let version = decode_version(segment);
        if version.is_empty() {
            VersionToken::Empty
        } else if version == LATEST {
            VersionToken::Latest
        } else if is_bare_group(&version) {
            VersionToken::Group(version)
        } else {
            VersionToken::Version(version)
        }
    }
}
