//! Comment Gateway Library
//!
//! Translates comment-moderation requests from websites and browser
//! plugins into comment-analysis API calls and relays the answers.

pub mod analyzer;
pub mod config;
pub mod http;
pub mod lifecycle;
pub mod net;
pub mod observability;
pub mod resilience;

pub use config::schema::GatewayConfig;
pub use http::{GatewayServer, RunningGateway};
pub use lifecycle::{LifecycleState, StartupError};
