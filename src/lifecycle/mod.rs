//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs, http::server):
//!     Load config → Create analysis client → Bind listener → Serve
//!
//! States (state.rs):
//!     Uninitialized → Ready → Listening → Stopped
//!     (client or bind failure) → Failed
//!
//! Shutdown (shutdown.rs):
//!     Signal received → Stop accepting → Drain connections → Exit
//!
//! Signals (signals.rs):
//!     SIGTERM/SIGINT → Trigger graceful shutdown
//! ```
//!
//! # Design Decisions
//! - Ordered startup: config first, then the analysis client, then listener
//! - Fail fast: any startup error is fatal and reaches the launcher
//! - Shutdown drains; in-flight requests are never cut off

pub mod shutdown;
pub mod signals;
pub mod startup;
pub mod state;

pub use shutdown::Shutdown;
pub use startup::StartupError;
pub use state::LifecycleState;
