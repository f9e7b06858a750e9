//! Network layer.
//!
//! # Responsibilities
//! - Bind the listening TCP socket from config
//! - Report bind failures as `TransportError`

pub mod listener;
