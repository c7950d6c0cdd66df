//! Redirect targets for group, group-channel and root documentation URLs.
//!
//! # Responsibilities
//! - `/<root>/v1/...` → internal redirect to the cascade version of `v1`
//! - `/<root>/v1.2-beta/...` → temporary redirect to the beta version of `v1.2`
//! - `/<root>/<anything else>` → permanent redirect below the default group
//! - `/`, `/<lang>/` and `/<root>/` → permanent redirect to the default group
//!
//! # Design Decisions
//! - Pure: produces a location string, the HTTP layer issues the response
//! - Concrete versions and `latest` produce no redirect; they are served as is
//! - Reachability of the target is not checked here

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::config::{I18nMode, RouterConfig};
use crate::request::{Language, PathDecomposer, VersionToken};
use crate::resolve::cascade::resolve_group_version;
use crate::resolve::error::ResolveResult;
use crate::resolve::reverse::version_from_channel_and_group;
use crate::topology::{encode_version, ReleaseTopology};

// Segments that address a concrete release: `v1.2.3`, `v1.2.3-beta2`, ...
static CONCRETE_VERSION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^v[0-9]+\.[0-9]+\.[0-9]+").expect("valid regex"));

/// How the HTTP layer should deliver a redirect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RedirectKind {
    /// Served internally by the front proxy (`X-Accel-Redirect`).
    Internal,
    /// 302.
    Temporary,
    /// 301.
    Permanent,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Redirect {
    pub kind: RedirectKind,
    pub location: String,
}

/// Builds redirect locations for one router configuration.
#[derive(Debug, Clone)]
pub struct RedirectPlanner<'a> {
    config: &'a RouterConfig,
    decomposer: &'a PathDecomposer,
}

impl<'a> RedirectPlanner<'a> {
    pub fn new(config: &'a RouterConfig, decomposer: &'a PathDecomposer) -> Self {
        Self { config, decomposer }
    }

    /// Decide the redirect for a request path, if any.
    pub fn plan(&self, topology: &ReleaseTopology, path: &str) -> ResolveResult<Option<Redirect>> {
        let Some(location) = self.decomposer.split_versioned(path) else {
            let language = self.decomposer.split_language(path);
            if !self.is_landing(language, path) {
                return Ok(None);
            }
            return Ok(Some(self.root_redirect(language, "")));
        };

        match VersionToken::parse(&location.segment) {
            VersionToken::Group(group) => self
                .group_redirect(topology, location.language, &group, &location.page)
                .map(Some),
            VersionToken::GroupChannel { group, channel } => {
                let version = version_from_channel_and_group(topology, channel, &group)?;
                Ok(Some(Redirect {
                    kind: RedirectKind::Temporary,
                    location: self.versioned(location.language, &version, &location.page),
                }))
            }
            VersionToken::Latest => Ok(None),
            VersionToken::Version(_) if CONCRETE_VERSION_RE.is_match(&location.segment) => Ok(None),
            VersionToken::Version(_) | VersionToken::Empty => {
                let rest = if location.page.is_empty() {
                    location.segment
                } else {
                    format!("{}/{}", location.segment, location.page)
                };
                Ok(Some(self.root_redirect(location.language, &rest)))
            }
        }
    }

    /// Internal redirect from a bare group to its cascade version.
    pub fn group_redirect(
        &self,
        topology: &ReleaseTopology,
        language: Option<Language>,
        group: &str,
        page: &str,
    ) -> ResolveResult<Redirect> {
        let version = resolve_group_version(topology, group, self.config.default_channel)?;
        tracing::debug!(group = %group, version = %version, "Group redirect");
        Ok(Redirect {
            kind: RedirectKind::Internal,
            location: self.versioned(language, &version, page),
        })
    }

    /// Permanent redirect below the default group.
    pub fn root_redirect(&self, language: Option<Language>, rest: &str) -> Redirect {
        Redirect {
            kind: RedirectKind::Permanent,
            location: format!(
                "{}{}/{}/{}",
                self.language_prefix(language),
                self.config.location_versions,
                self.config.default_group,
                rest
            ),
        }
    }

    // `/`, `/<lang>` or the versions root itself, with or without a trailing slash.
    fn is_landing(&self, language: Option<Language>, path: &str) -> bool {
        let rest = match language {
            Some(lang) => path
                .strip_prefix('/')
                .and_then(|p| p.strip_prefix(lang.code()))
                .unwrap_or(path),
            None => path,
        };
        let rest = rest.strip_suffix('/').unwrap_or(rest);
        rest.is_empty() || rest == self.decomposer.versions_root()
    }

    fn versioned(&self, language: Option<Language>, version: &str, page: &str) -> String {
        format!(
            "{}{}/{}/{}",
            self.language_prefix(language),
            self.config.location_versions,
            encode_version(version),
            page
        )
    }

    fn language_prefix(&self, language: Option<Language>) -> String {
        match (self.config.i18n_type, language) {
            (I18nMode::Location, Some(lang)) => format!("/{lang}"),
            _ => String::new(),
        }
    }
}
