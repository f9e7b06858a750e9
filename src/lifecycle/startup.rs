//! Startup errors.
//!
//! Nothing here is caught locally: a failed startup is returned to whoever
//! called `GatewayServer::start`, and `main` turns it into a non-zero exit.

use thiserror::Error;

use crate::analyzer::ClientError;
use crate::net::listener::TransportError;

#[derive(Debug, Error)]
pub enum StartupError {
    /// The analysis client could not be created or validated.
    #[error("analysis client unavailable: {0}")]
    Client(#[from] ClientError),

    /// The listening socket could not be bound.
    #[error(transparent)]
    Transport(#[from] TransportError),
}
