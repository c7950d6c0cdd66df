//! Documentation version router library.
//!
//! Maps documentation request paths onto concrete release versions using a
//! hot-reloadable channels file, and builds the version menus shown on
//! every page.

// Core subsystems
pub mod config;
pub mod menu;
pub mod request;
pub mod resolve;
pub mod topology;

// Cross-cutting concerns
pub mod lifecycle;
pub mod observability;

pub use config::schema::RouterConfig;
pub use menu::{MenuAssembler, MenuData, MenuKind, StatusReport};
pub use request::{PathDecomposer, RequestContext};
pub use resolve::{RedirectPlanner, ResolveError};
pub use topology::{ReleaseTopology, TopologyStore};
