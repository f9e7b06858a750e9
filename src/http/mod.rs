//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware)
//!     → request.rs (assign request ID)
//!     → handlers.rs (validate body, translate, forward)
//!     → error.rs (failures → status + JSON body)
//!     → Send to client
//! ```

pub mod error;
pub mod handlers;
pub mod request;
pub mod server;

pub use error::GatewayError;
pub use handlers::AppState;
pub use request::X_REQUEST_ID;
pub use server::{build_router, GatewayServer, RunningGateway};
