//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → logging.rs (structured log events via `tracing`)
//!     → metrics.rs (counters, histograms)
//!
//! Consumers:
//!     → stdout (pretty in development, JSON when configured)
//!     → Metrics endpoint (Prometheus scrape, optional)
//! ```
//!
//! # Design Decisions
//! - Request ID flows through every per-request log line
//! - Production mode keeps logs to warnings and errors
//! - Metrics are cheap (atomic increments) and off by default

pub mod logging;
pub mod metrics;
