//! Resilience subsystem.
//!
//! # Data Flow
//! ```text
//! Request to the analysis service:
//!     → timeouts.rs (enforce per-call deadline)
//!     → On expiry: 504 with a service-shaped error body
//! ```
//!
//! # Design Decisions
//! - Timeouts are non-negotiable; every external call has a deadline
//! - No retries: failed calls are relayed to the caller as-is

pub mod timeouts;
