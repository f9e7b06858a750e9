//! TCP listener binding.

use std::net::SocketAddr;

use thiserror::Error;
use tokio::net::TcpListener;

use crate::config::ListenerConfig;

/// The listening socket could not be set up.
#[derive(Debug, Error)]
#[error("failed to bind {address}: {source}")]
pub struct TransportError {
    pub address: String,
    #[source]
    pub source: std::io::Error,
}

/// Bind to the configured address.
pub async fn bind(config: &ListenerConfig) -> Result<TcpListener, TransportError> {
    let address = config.bind_address.clone();
    let addr: SocketAddr = address.parse().map_err(|e| TransportError {
        address: address.clone(),
        source: std::io::Error::new(std::io::ErrorKind::InvalidInput, e),
    })?;

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| TransportError { address, source })?;

    tracing::info!(address = %addr, "Listener bound");
    Ok(listener)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_bind_ephemeral_port() {
        let config = ListenerConfig {
            bind_address: "127.0.0.1:0".into(),
        };
        let listener = bind(&config).await.unwrap();
        assert_ne!(listener.local_addr().unwrap().port(), 0);
    }

    #[tokio::test]
    async fn test_port_in_use_is_transport_error() {
        let held = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let config = ListenerConfig {
            bind_address: held.local_addr().unwrap().to_string(),
        };

        let err = bind(&config).await.unwrap_err();
        assert_eq!(err.source.kind(), std::io::ErrorKind::AddrInUse);
    }

    #[tokio::test]
    async fn test_unparsable_address() {
        let config = ListenerConfig {
            bind_address: "localhost".into(),
        };
        let err = bind(&config).await.unwrap_err();
        assert_eq!(err.source.kind(), std::io::ErrorKind::InvalidInput);
    }
}
