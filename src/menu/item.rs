//! Menu data types.

use std::str::FromStr;

use serde::Serialize;

use crate::request::Language;
use crate::resolve::LATEST;
use crate::topology::Channel;

/// One row of the version navigation menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub group: String,
    pub channel: Option<Channel>,
    pub version: String,
    /// Encoded version without a leading `/`, e.g. `v1.2.3-plus-fix6`.
    #[serde(rename = "versionURL")]
    pub version_url: String,
    pub is_current: bool,
}

impl MenuItem {
    /// The synthetic trailing `latest` entry.
    pub fn latest() -> Self {
        Self {
            group: String::new(),
            channel: None,
            version: LATEST.to_string(),
            version_url: LATEST.to_string(),
            is_current: false,
        }
    }
}

/// Which menu a page asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MenuKind {
    /// Every group and channel, plus documentation link and absolute version.
    #[default]
    Version,
    /// Groups only.
    Group,
    /// Group-channel landing page (`v1.2-beta`).
    Channel,
}

impl FromStr for MenuKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "version" => Ok(MenuKind::Version),
            "group" => Ok(MenuKind::Group),
            "channel" => Ok(MenuKind::Channel),
            other => Err(format!("unknown menu kind: {other}")),
        }
    }
}

/// Everything a page template needs to render the version menu.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuData {
    pub version_items: Vec<MenuItem>,
    pub current_group: String,
    pub current_channel: Option<Channel>,
    pub current_version: String,
    pub current_lang: Language,
    /// Concrete version behind the current selection (used for source links).
    pub absolute_version: String,
    #[serde(rename = "currentVersionURL")]
    pub current_version_url: String,
    /// Page path without `<lang>/<versions root>/<version>`.
    #[serde(rename = "currentPageURLRelative")]
    pub current_page_url_relative: String,
    #[serde(rename = "currentPageURL")]
    pub current_page_url: String,
    pub menu_documentation_link: String,
}

impl MenuData {
    /// The item marked current.
    pub fn current(&self) -> Option<&MenuItem> {
        self.version_items.iter().find(|item| item.is_current)
    }
}
