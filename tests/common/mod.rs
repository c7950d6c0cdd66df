//! Shared fixtures for integration tests.

#![allow(dead_code)]

use std::io::Write;
use std::path::Path;

use docs_version_router::config::{I18nMode, RouterConfig};
use tempfile::NamedTempFile;

/// Channels file in the layout the release tooling publishes.
pub const CHANNELS_YAML: &str = r#"
groups:
  - name: "v1"
    channels:
      - name: alpha
        version: v1.3.0-alpha.2
      - name: beta
        version: v1.2.4
      - name: stable
        version: v1.2.3+fix6
      - name: rock-solid
        version: v1.1.9
  - name: "v1.2"
    channels:
      - name: beta
        version: v1.2.5_rc1
  - name: "v2"
    channels:
      - name: alpha
        version: v2.0.0-alpha.1
"#;

/// Same groups, with `v1` stable moved on.
pub const CHANNELS_YAML_NEXT: &str = r#"
groups:
  - name: "v1"
    channels:
      - name: stable
        version: v1.2.4
  - name: "v2"
    channels:
      - name: ea
        version: v2.0.1
"#;

pub fn write_channels(content: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".yaml")
        .tempfile()
        .unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

pub fn rewrite(path: &Path, content: &str) {
    std::fs::write(path, content).unwrap();
}

/// Router configuration with language prefixes in paths.
pub fn location_config(channels: &Path) -> RouterConfig {
    RouterConfig {
        i18n_type: I18nMode::Location,
        channels_file: channels.display().to_string(),
        ..RouterConfig::default()
    }
}
