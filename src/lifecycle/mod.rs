//! Lifecycle management for the long-running `watch` command.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Load channels file → Publish → Metrics exporter → File watcher
//!
//! Signals (signals.rs):
//!     SIGTERM/SIGINT → Trigger shutdown
//!     SIGHUP → Re-read channels file
//!
//! Shutdown (shutdown.rs):
//!     Trigger → Watch loop exits → Watcher dropped
//! ```

pub mod shutdown;
pub mod signals;
pub mod startup;

pub use shutdown::{Shutdown, ShutdownListener};
pub use signals::{forward_signals, Signal, Signals};
pub use startup::{run_watch, StartupError};
