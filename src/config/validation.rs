//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check path shapes the request matchers depend on
//! - Validate value ranges (non-empty lists, parseable addresses)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: RouterConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::collections::HashSet;
use std::net::SocketAddr;

use thiserror::Error;

use crate::config::schema::RouterConfig;

/// A single semantic problem in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("location_versions must start with '/' and must not end with '/': {0:?}")]
    VersionsRoot(String),

    #[error("default_group must not be empty")]
    EmptyDefaultGroup,

    #[error("at least one language must be configured")]
    NoLanguages,

    #[error("language {0} is listed more than once")]
    DuplicateLanguage(String),

    #[error("channels_file must not be empty")]
    EmptyChannelsFile,

    #[error("invalid metrics address: {0}")]
    MetricsAddress(String),
}

/// Validate a parsed configuration.
pub fn validate_config(config: &RouterConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    let root = &config.location_versions;
    if !root.starts_with('/') || root.ends_with('/') {
        errors.push(ValidationError::VersionsRoot(root.clone()));
    }

    if config.default_group.is_empty() {
        errors.push(ValidationError::EmptyDefaultGroup);
    }

    if config.languages.is_empty() {
        errors.push(ValidationError::NoLanguages);
    }
    let mut seen = HashSet::new();
    for lang in &config.languages {
        if !seen.insert(*lang) {
            errors.push(ValidationError::DuplicateLanguage(lang.to_string()));
        }
    }

    if config.channels_file.is_empty() {
        errors.push(ValidationError::EmptyChannelsFile);
    }

    if config.observability.metrics_enabled
        && config.observability.metrics_address.parse::<SocketAddr>().is_err()
    {
        errors.push(ValidationError::MetricsAddress(
            config.observability.metrics_address.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
