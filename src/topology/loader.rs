//! Parsing topology sources.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::topology::model::{Group, ReleaseTopology, TopologyError};

/// Supported topology source formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TopologyFormat {
    Json,
    Yaml,
}

impl TopologyFormat {
    /// Pick the format from a file extension (`.json`, `.yaml`, `.yml`).
    pub fn from_path(path: &Path) -> Result<Self, LoadError> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(TopologyFormat::Json),
            Some("yaml") | Some("yml") => Ok(TopologyFormat::Yaml),
            _ => Err(LoadError::UnsupportedFormat {
                path: path.to_path_buf(),
            }),
        }
    }
}

/// Error type for topology loading.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("can't read {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("unsupported channels file format: {path:?}")]
    UnsupportedFormat { path: PathBuf },

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid topology: {0}")]
    Invalid(#[from] TopologyError),

    #[error("channels source lists no groups")]
    Empty,
}

#[derive(Debug, Deserialize)]
struct RawTopology {
    #[serde(alias = "Groups")]
    groups: Vec<Group>,
}

/// Parse a topology from raw bytes.
///
/// Empty input and an empty group list are errors: a file caught mid-rewrite
/// must not replace a good catalog.
pub fn parse_topology(data: &[u8], format: TopologyFormat) -> Result<ReleaseTopology, LoadError> {
    if data.iter().all(u8::is_ascii_whitespace) {
        return Err(LoadError::Empty);
    }
    let raw: RawTopology = match format {
        TopologyFormat::Json => serde_json::from_slice(data)?,
        TopologyFormat::Yaml => serde_yaml::from_slice(data)?,
    };
    if raw.groups.is_empty() {
        return Err(LoadError::Empty);
    }
    Ok(ReleaseTopology::new(raw.groups)?)
}

/// Read and parse a topology file, choosing the format from its extension.
pub fn load_topology(path: &Path) -> Result<ReleaseTopology, LoadError> {
    let format = TopologyFormat::from_path(path)?;
    let data = fs::read(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_topology(&data, format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::topology::Channel;
    use std::io::Write;

    const YAML: &str = r#"
groups:
  - name: v1
    channels:
      - name: stable
        version: v1.2.3+fix6
      - name: rock-solid
        version: v1.1.0
  - name: v2
    channels:
      - name: alpha
        version: v2.0.0-alpha1
"#;

    #[test]
    fn test_parse_yaml() {
        let topology = parse_topology(YAML.as_bytes(), TopologyFormat::Yaml).unwrap();
        assert_eq!(topology.groups().len(), 2);
        assert_eq!(topology.lookup("v1", Channel::Stable), Some("v1.2.3+fix6"));
        assert_eq!(topology.lookup("v1", Channel::RockSolid), Some("v1.1.0"));
    }

    #[test]
    fn test_parse_json_capitalized_keys() {
        let json = r#"{"Groups":[{"Name":"v1","Channels":[{"name":"ea","version":"v1.9"}]}]}"#;
        let topology = parse_topology(json.as_bytes(), TopologyFormat::Json).unwrap();
        assert_eq!(topology.lookup("v1", Channel::Ea), Some("v1.9"));
    }

    #[test]
    fn test_unknown_channel_is_error() {
        let json = r#"{"groups":[{"name":"v1","channels":[{"name":"nightly","version":"x"}]}]}"#;
        let err = parse_topology(json.as_bytes(), TopologyFormat::Json).unwrap_err();
        assert!(matches!(err, LoadError::Json(_)));
    }

    #[test]
    fn test_duplicate_group_is_invalid() {
        let json = r#"{"groups":[{"name":"v1"},{"name":"v1"}]}"#;
        let err = parse_topology(json.as_bytes(), TopologyFormat::Json).unwrap_err();
        assert!(matches!(err, LoadError::Invalid(TopologyError::DuplicateGroup { .. })));
    }

    #[test]
    fn test_empty_sources_are_errors() {
        for (data, format) in [
            ("", TopologyFormat::Yaml),
            ("\n  \n", TopologyFormat::Yaml),
            ("groups: []", TopologyFormat::Yaml),
            ("{}", TopologyFormat::Json),
            (r#"{"groups":[]}"#, TopologyFormat::Json),
        ] {
            assert!(
                parse_topology(data.as_bytes(), format).is_err(),
                "{data:?} should not parse"
            );
        }
        assert!(matches!(
            parse_topology(b"", TopologyFormat::Yaml),
            Err(LoadError::Empty)
        ));
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(TopologyFormat::from_path(Path::new("channels.yml")).unwrap(), TopologyFormat::Yaml);
        assert_eq!(TopologyFormat::from_path(Path::new("c.json")).unwrap(), TopologyFormat::Json);
        assert!(matches!(
            TopologyFormat::from_path(Path::new("channels.toml")),
            Err(LoadError::UnsupportedFormat { .. })
        ));
    }

    #[test]
    fn test_load_topology_from_file() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        file.write_all(YAML.as_bytes()).unwrap();

        let topology = load_topology(file.path()).unwrap();
        assert_eq!(topology.groups_descending(), vec!["v2", "v1"]);
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_topology(Path::new("/nonexistent/channels.yaml")).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }
}
