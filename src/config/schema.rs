//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the router.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

use crate::request::Language;
use crate::topology::ChannelThreshold;

/// Root configuration for the documentation version router.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RouterConfig {
    /// Group served when a request names no version (e.g. "v1").
    pub default_group: String,

    /// Cascade threshold used to pick a group's version.
    pub default_channel: ChannelThreshold,

    /// Append the `latest` pseudo-item to menus.
    pub show_latest_channel: bool,

    /// Versions root path segment (e.g. "/documentation").
    pub location_versions: String,

    /// How the language of a request is carried.
    pub i18n_type: I18nMode,

    /// Supported language codes.
    pub languages: Vec<Language>,

    /// Path of the channels (topology) file, JSON or YAML.
    pub channels_file: String,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            default_group: "v1".to_string(),
            default_channel: ChannelThreshold::Stable,
            show_latest_channel: false,
            location_versions: "/documentation".to_string(),
            i18n_type: I18nMode::Domain,
            languages: Language::ALL.to_vec(),
            channels_file: "channels.yaml".to_string(),
            observability: ObservabilityConfig::default(),
        }
    }
}

/// Localization method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum I18nMode {
    /// Language is chosen by domain (`ru.example.com`); paths carry no prefix.
    #[default]
    Domain,
    /// Language is the first path segment (`/ru/...`).
    Location,
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Log output format.
    pub log_format: LogFormat,

    /// Enable the Prometheus metrics endpoint (watch mode only).
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            log_format: LogFormat::Text,
            metrics_enabled: false,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RouterConfig::default();
        assert_eq!(config.default_group, "v1");
        assert_eq!(config.default_channel, ChannelThreshold::Stable);
        assert_eq!(config.location_versions, "/documentation");
        assert_eq!(config.languages, vec![Language::Ru, Language::En]);
        assert!(!config.show_latest_channel);
    }

    #[test]
    fn test_partial_toml() {
        let config: RouterConfig = toml::from_str(
            r#"
            default_channel = "ea"
            i18n_type = "location"

            [observability]
            log_format = "json"
            "#,
        )
        .unwrap();
        assert_eq!(config.default_channel, ChannelThreshold::Ea);
        assert_eq!(config.i18n_type, I18nMode::Location);
        assert_eq!(config.observability.log_format, LogFormat::Json);
        assert_eq!(config.observability.log_level, "warn");
        assert_eq!(config.default_group, "v1");
    }
}
