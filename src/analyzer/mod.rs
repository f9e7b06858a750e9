//! Comment-analysis subsystem.
//!
//! # Data Flow
//! ```text
//! Startup:
//!     provider.rs → fetch discovery document (discovery.rs)
//!     → validate analyze + suggestscore exist
//!     → cache AnalyzerHandle (client.rs)
//!
//! Per request:
//!     inbound JSON (types.rs)
//!     → translate.rs (pure reshaping)
//!     → AnalyzerHandle::analyze / suggest_score
//!     → opaque JSON or RemoteCallError (error.rs)
//! ```

pub mod client;
pub mod discovery;
pub mod error;
pub mod provider;
pub mod translate;
pub mod types;

pub use client::{AnalyzerClient, CommentAnalyzer};
pub use error::{ClientError, RemoteCallError};
pub use provider::{AnalyzerHandle, ClientProvider};
