//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! topology store, resolvers, watcher
//!     → logging.rs (tracing events to stderr, text or JSON)
//!     → metrics.rs (reload, generation, fallback, failure counters)
//!
//! Consumers:
//!     → Log aggregation
//!     → Metrics endpoint (Prometheus scrape, `watch` mode only)
//! ```

pub mod logging;
pub mod metrics;

pub use logging::init_logging;
pub use metrics::init_metrics;
