//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Every request:
//!     → access_log.rs (one line per response: method, path, status, ms)
//!     → metrics.rs (request counter, latency histogram)
//!
//! Process start:
//!     → logging.rs (tracing subscriber, env filter, text or JSON)
//!     → metrics.rs (optional Prometheus exporter)
//! ```
//!
//! # Design Decisions
//! - Structured logging through `tracing` fields, not formatted strings
//! - Request ID flows into the access log line
//! - Metrics are cheap (atomic increments); exporter is off by default

pub mod access_log;
pub mod logging;
pub mod metrics;

pub use access_log::access_log;
pub use logging::init_logging;
