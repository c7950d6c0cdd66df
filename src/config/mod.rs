//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! router config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → RouterConfig (validated, immutable)
//!     → passed by reference to decomposer, resolvers and menu assembly
//!
//! Channels file change:
//!     watcher.rs detects change
//!     → topology loader parses the new file
//!     → atomic swap in TopologyStore
//!     → next request reads the new snapshot
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; changes require full reload
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;
pub mod watcher;

pub use loader::{load_config, ConfigError};
pub use schema::{I18nMode, LogFormat, ObservabilityConfig, RouterConfig};
pub use validation::{validate_config, ValidationError};
pub use watcher::TopologyWatcher;
