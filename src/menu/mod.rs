//! Version menu subsystem.
//!
//! # Data Flow
//! ```text
//! RequestContext + topology snapshot + RouterConfig
//!     → assembler.rs (current item, group/channel list, latest)
//!     → item.rs (MenuData handed to page templates)
//! ```
//!
//! `status.rs` summarizes the current snapshot for health checks.

pub mod assembler;
pub mod item;
pub mod status;

pub use assembler::MenuAssembler;
pub use item::{MenuData, MenuItem, MenuKind};
pub use status::StatusReport;
