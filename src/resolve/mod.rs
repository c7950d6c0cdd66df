//! Version resolution subsystem.
//!
//! # Data Flow
//! ```text
//! version token from the request
//!     → reverse.rs (version → channel + group, or bare group)
//!     → cascade.rs (group → most stable permitted version)
//!     → redirect.rs (group / group-channel / root redirect targets)
//!     → Return: version, origin, or typed ResolveError
//! ```
//!
//! # Design Decisions
//! - Every resolver is a pure function of one topology snapshot and its inputs
//! - One stability order for scans: rock-solid, stable, ea, beta, alpha
//! - Errors are returned, never defaulted, except the documented alpha fallback

pub mod cascade;
pub mod error;
pub mod redirect;
pub mod reverse;

pub use cascade::{resolve_group_version, root_version, LATEST};
pub use error::{ResolveError, ResolveResult};
pub use redirect::{Redirect, RedirectKind, RedirectPlanner};
pub use reverse::{channel_and_group_from_version, version_from_channel_and_group, VersionOrigin};
