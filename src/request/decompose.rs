//! Request path decomposition.
//!
//! Every operation is best-effort: a path that does not have the expected
//! shape yields the documented default (empty string or English), never an
//! error. Callers treat an empty version segment as "no explicit version".

use regex::Regex;
use serde::Serialize;

use crate::request::language::Language;
use crate::request::token::VersionToken;

/// Path the web server rewrites unknown locations to. The original location
/// is then carried in the `uri` query parameter.
pub const NOT_FOUND_PAGE: &str = "/404.html";

/// Per-request view of a decomposed path. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RequestContext {
    pub language: Language,
    /// Classified, decoded version token.
    #[serde(skip)]
    pub version_token: VersionToken,
    /// Page path below the version (or below the language when no version).
    pub relative_page_path: String,
    /// Version segment exactly as it appeared in the URL.
    pub raw_version_url_segment: String,
    /// Full page path; empty for the not-found page.
    pub page_url: String,
    /// Whether the path is a page below `/<lang><versions root>/`.
    pub documentation_page: bool,
}

/// Splits request paths of the form `/<lang><versions root>/<version>/<page>`.
#[derive(Debug, Clone)]
pub struct PathDecomposer {
    versions_root: String,
    language_re: Regex,
    version_re: Regex,
    relative_re: Regex,
    versioned_re: Regex,
    language_prefix_re: Regex,
    documentation_re: Regex,
}

/// A versioned location split into its parts. The language prefix is
/// optional so both localization methods can use it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionedLocation {
    pub language: Option<Language>,
    pub segment: String,
    pub page: String,
}

impl PathDecomposer {
    /// Compile the matchers for a versions root such as `/documentation`.
    pub fn new(versions_root: &str, languages: &[Language]) -> Result<Self, regex::Error> {
        let langs = languages
            .iter()
            .map(|l| regex::escape(l.code()))
            .collect::<Vec<_>>()
            .join("|");
        let root = regex::escape(versions_root);

        Ok(Self {
            versions_root: versions_root.to_string(),
            language_re: Regex::new(&format!("^/({langs}){root}/.+$"))?,
            version_re: Regex::new(&format!("^/({langs}){root}/([^/]+)/?.*$"))?,
            relative_re: Regex::new(&format!("^/({langs})({root}/[^/]+)?/(.*)$"))?,
            versioned_re: Regex::new(&format!("^(?:/({langs}))?{root}/([^/]+)/?(.*)$"))?,
            language_prefix_re: Regex::new(&format!("^/({langs})(?:/|$)"))?,
            documentation_re: Regex::new(&format!("^/[^/]+{root}/.+$"))?,
        })
    }

    pub fn versions_root(&self) -> &str {
        &self.versions_root
    }

    /// Language of a documentation page path; English when it doesn't match.
    pub fn current_language(&self, path: &str) -> Language {
        self.language_re
            .captures(path)
            .and_then(|caps| caps[1].parse().ok())
            .unwrap_or_default()
    }

    /// Raw version segment of the path, or empty.
    ///
    /// For the not-found page the original location is taken from the
    /// `uri` parameter of `raw_query`.
    pub fn version_url_segment(&self, path: &str, raw_query: Option<&str>) -> String {
        let target = if path == NOT_FOUND_PAGE {
            match raw_query.and_then(original_uri_from_query) {
                Some(uri) => uri,
                None => return String::new(),
            }
        } else {
            path.to_string()
        };

        self.version_re
            .captures(&target)
            .map(|caps| caps[2].trim_start_matches('/').to_string())
            .unwrap_or_default()
    }

    /// Page path relative to the version, or to the language prefix when
    /// the path carries no version. Empty for the not-found page.
    pub fn relative_page_path(&self, path: &str) -> String {
        if path == NOT_FOUND_PAGE {
            return String::new();
        }
        match self.relative_re.captures(path) {
            Some(caps) if caps.get(2).is_some() => caps[3].to_string(),
            Some(caps) => format!("/{}", &caps[3]),
            None => String::new(),
        }
    }

    /// Language prefix of any path, if it has one.
    pub fn split_language(&self, path: &str) -> Option<Language> {
        self.language_prefix_re
            .captures(path)
            .and_then(|caps| caps[1].parse().ok())
    }

    /// Split `[/<lang>]<versions root>/<segment>[/<page>]`, or `None` when the
    /// path is outside the versions root.
    pub fn split_versioned(&self, path: &str) -> Option<VersionedLocation> {
        let caps = self.versioned_re.captures(path)?;
        Some(VersionedLocation {
            language: caps.get(1).and_then(|m| m.as_str().parse().ok()),
            segment: caps[2].to_string(),
            page: caps[3].to_string(),
        })
    }

    /// Decompose a path and optional raw query into a [`RequestContext`].
    pub fn decompose(&self, path: &str, raw_query: Option<&str>) -> RequestContext {
        let raw_version_url_segment = self.version_url_segment(path, raw_query);
        let context = RequestContext {
            language: self.current_language(path),
            version_token: VersionToken::parse(&raw_version_url_segment),
            relative_page_path: self.relative_page_path(path),
            page_url: if path == NOT_FOUND_PAGE {
                String::new()
            } else {
                path.to_string()
            },
            documentation_page: self.documentation_re.is_match(path),
            raw_version_url_segment,
        };
        tracing::trace!(
            path = %path,
            language = %context.language,
            segment = %context.raw_version_url_segment,
            relative = %context.relative_page_path,
            "Request decomposed"
        );
        context
    }

    /// Decompose a request URI that may carry a query string.
    pub fn decompose_uri(&self, uri: &str) -> RequestContext {
        match uri.split_once('?') {
            Some((path, query)) => self.decompose(path, Some(query)),
            None => self.decompose(uri, None),
        }
    }
}

fn original_uri_from_query(raw_query: &str) -> Option<String> {
    url::form_urlencoded::parse(raw_query.as_bytes())
        .find(|(key, _)| key == "uri")
        .map(|(_, value)| value.into_owned())
}
