//! Menu assembly.
//!
//! # Responsibilities
//! - Work out the current group, channel and version of a request
//! - List every selectable group/channel after the current item
//! - Append the `latest` pseudo-item when enabled
//!
//! # Design Decisions
//! - Item 0 is always the only current item
//! - Channels are listed most stable first, groups highest first
//! - Resolution misses leave fields empty; the menu is still produced

use std::sync::LazyLock;

use regex::Regex;

use crate::config::RouterConfig;
use crate::menu::item::{MenuData, MenuItem, MenuKind};
use crate::request::{RequestContext, VersionToken};
use crate::resolve::{
    channel_and_group_from_version, resolve_group_version, version_from_channel_and_group, LATEST,
};
use crate::topology::{decode_version, encode_version, Channel, ReleaseTopology};

// `v1` or `v1.<anything>`; the second capture marks a non-group version.
static GROUP_OR_PATCH_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(v[0-9]+)(\..+)?$").expect("valid regex"));

/// Builds menus against one topology snapshot and configuration.
#[derive(Debug, Clone, Copy)]
pub struct MenuAssembler<'a> {
    topology: &'a ReleaseTopology,
    config: &'a RouterConfig,
}

impl<'a> MenuAssembler<'a> {
    pub fn new(topology: &'a ReleaseTopology, config: &'a RouterConfig) -> Self {
        Self { topology, config }
    }

    /// Assemble the menu of the given kind for a decomposed request.
    pub fn build(&self, ctx: &RequestContext, kind: MenuKind) -> MenuData {
        let mut menu = MenuData {
            current_lang: ctx.language,
            current_page_url_relative: ctx.relative_page_path.clone(),
            current_page_url: ctx.page_url.clone(),
            current_version_url: ctx.raw_version_url_segment.clone(),
            ..MenuData::default()
        };

        match kind {
            MenuKind::Version => self.version_menu(ctx, &mut menu),
            MenuKind::Group => self.group_menu(&mut menu),
            MenuKind::Channel => self.channel_menu(ctx, &mut menu),
        }

        if self.config.show_latest_channel {
            menu.version_items.push(MenuItem::latest());
        }

        tracing::debug!(
            kind = ?kind,
            version = %menu.current_version,
            items = menu.version_items.len(),
            "Menu assembled"
        );
        menu
    }

    fn version_menu(&self, ctx: &RequestContext, menu: &mut MenuData) {
        menu.current_version = decode_version(&menu.current_version_url);

        if menu.current_version.is_empty() && ctx.documentation_page {
            self.use_default_group(menu);
        }

        let root = &self.config.location_versions;
        if let Some(caps) = GROUP_OR_PATCH_RE.captures(&menu.current_version) {
            if caps.get(2).is_some() {
                menu.menu_documentation_link = format!("{root}/{}/", encode_version(&caps[0]));
                menu.absolute_version = menu.current_version.clone();
            } else {
                menu.menu_documentation_link = format!("{root}/{}/", encode_version(&caps[1]));
                match resolve_group_version(self.topology, &caps[1], self.config.default_channel) {
                    Ok(version) => menu.absolute_version = version,
                    Err(e) => tracing::debug!(
                        version = %menu.current_version,
                        error = %e,
                        "Can't determine absolute version"
                    ),
                }
            }
        } else if self.config.show_latest_channel && menu.current_version == LATEST {
            menu.menu_documentation_link = format!("{root}/{LATEST}/");
            menu.absolute_version = LATEST.to_string();
        }

        self.fill_origin(menu);
        self.push_current(menu);
        self.push_group_channels(menu);
    }

    fn group_menu(&self, menu: &mut MenuData) {
        menu.current_version = decode_version(&menu.current_version_url);
        if menu.current_version.is_empty() {
            self.use_default_group(menu);
        }

        // A patch version is listed as is, without a group.
        if let VersionToken::Group(group) = VersionToken::parse(&menu.current_version_url) {
            menu.current_group = group;
        }
        self.push_current(menu);

        for group in self.topology.groups_descending() {
            menu.version_items.push(MenuItem {
                group: group.to_string(),
                channel: None,
                version: String::new(),
                version_url: String::new(),
                is_current: false,
            });
        }
    }

    fn channel_menu(&self, ctx: &RequestContext, menu: &mut MenuData) {
        match &ctx.version_token {
            VersionToken::GroupChannel { group, channel } => {
                menu.current_group = group.clone();
                menu.current_channel = Some(*channel);
                menu.current_version =
                    version_from_channel_and_group(self.topology, *channel, group).unwrap_or_default();
                menu.current_version_url = encode_version(&menu.current_version);
            }
            _ => menu.current_version = decode_version(&menu.current_version_url),
        }

        if menu.current_version.is_empty() {
            self.use_default_group(menu);
        }

        self.fill_origin(menu);
        self.push_current(menu);
        self.push_group_channels(menu);
    }

    fn use_default_group(&self, menu: &mut MenuData) {
        menu.current_version = self.config.default_group.clone();
        menu.current_version_url = encode_version(&menu.current_version);
    }

    // Fill in group and channel from the version when the URL didn't name them.
    fn fill_origin(&self, menu: &mut MenuData) {
        if !menu.current_group.is_empty() && menu.current_channel.is_some() {
            return;
        }
        if let Some(origin) = channel_and_group_from_version(self.topology, &menu.current_version) {
            menu.current_group = origin.group;
            menu.current_channel = origin.channel;
        }
    }

    fn push_current(&self, menu: &mut MenuData) {
        menu.version_items.push(MenuItem {
            group: menu.current_group.clone(),
            channel: menu.current_channel,
            version: menu.current_version.clone(),
            version_url: menu.current_version_url.clone(),
            is_current: true,
        });
    }

    fn push_group_channels(&self, menu: &mut MenuData) {
        for group in self.topology.groups_descending() {
            let channels = self.topology.channels_of(group);
            for channel in Channel::ALL {
                if let Some(version) = channels.get(&channel) {
                    menu.version_items.push(MenuItem {
                        group: group.to_string(),
                        channel: Some(channel),
                        version: version.to_string(),
                        version_url: encode_version(version),
                        is_current: false,
                    });
                }
            }
        }
    }
}
