//! Request path decomposition subsystem.
//!
//! # Data Flow
//! ```text
//! original request path (+ raw query for the not-found page)
//!     → decompose.rs (language, version segment, relative page path)
//!     → token.rs (classify the segment: empty, latest, group, group-channel, version)
//!     → RequestContext (per request, read-only)
//! ```
//!
//! # Design Decisions
//! - Regex matchers compiled once per versions root, not per request
//! - Each matcher sits behind a named method with a default on no match
//! - No HTTP types: callers pass plain strings

pub mod decompose;
pub mod language;
pub mod token;

pub use decompose::{PathDecomposer, RequestContext, VersionedLocation, NOT_FOUND_PAGE};
pub use language::{Language, UnknownLanguage};
pub use token::VersionToken;
