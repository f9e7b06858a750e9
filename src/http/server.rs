//! HTTP server setup and lifecycle.
//!
//! # Responsibilities
//! - Create the Axum Router with all handlers
//! - Wire up middleware (tracing, limits, request ID, CORS, compression)
//! - Build the analysis client before accepting traffic
//! - Bind the listener and serve until stopped
//!
//! # Design Decisions
//! - The analysis client is created first; nothing listens without it
//! - Any startup failure moves the lifecycle to `Failed` and is returned
//! - Stopping closes the listener and drains, it never aborts requests

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::DefaultBodyLimit,
    http::Method,
    middleware::map_response,
    routing::{get, post},
    Router,
};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    services::ServeDir,
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::analyzer::ClientProvider;
use crate::config::GatewayConfig;
use crate::http::error::timeout_as_json;
use crate::http::handlers::{self, AppState};
use crate::http::request::{propagate_request_id_layer, set_request_id_layer};
use crate::lifecycle::{LifecycleState, Shutdown, StartupError};
use crate::net::listener;

/// Build the Axum router with all middleware layers.
#[allow(deprecated)]
pub fn build_router(config: &GatewayConfig, state: AppState) -> Router {
    let plugin_cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::POST, Method::OPTIONS])
        .allow_headers(Any);

    let mut router = Router::new()
        .route("/_ah/health", get(handlers::health))
        .route("/check", post(handlers::check_comment))
        .route(
            "/plugin/check",
            post(handlers::plugin_check_comment)
                .options(handlers::preflight)
                .layer(plugin_cors),
        )
        .route("/suggest_score", post(handlers::suggest_score))
        .with_state(state);

    if config.static_files.enabled {
        router = router.fallback_service(ServeDir::new(&config.static_files.path));
    }

    router
        .layer(CompressionLayer::new())
        .layer(DefaultBodyLimit::max(config.security.max_body_size))
        .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)))
        .layer(map_response(timeout_as_json))
        .layer(propagate_request_id_layer())
        .layer(TraceLayer::new_for_http())
        .layer(set_request_id_layer())
}

/// Gateway that has not started serving yet.
pub struct GatewayServer {
    config: Arc<GatewayConfig>,
    provider: Arc<ClientProvider>,
    state: watch::Sender<LifecycleState>,
}

impl GatewayServer {
    /// Create a server that discovers the analysis service from `config`.
    pub fn new(config: GatewayConfig) -> Result<Self, StartupError> {
        let provider = ClientProvider::from_config(&config.analyzer)?;
        Ok(Self::with_provider(config, provider))
    }

    /// Create a server around an existing client provider.
    pub fn with_provider(config: GatewayConfig, provider: ClientProvider) -> Self {
        let (state, _) = watch::channel(LifecycleState::Uninitialized);
        Self {
            config: Arc::new(config),
            provider: Arc::new(provider),
            state,
        }
    }

    /// Observe lifecycle transitions.
    pub fn lifecycle(&self) -> watch::Receiver<LifecycleState> {
        self.state.subscribe()
    }

    /// Build the analysis client, bind the listener and start serving.
    ///
    /// On error nothing is listening and the lifecycle is `Failed`.
    pub async fn start(self) -> Result<RunningGateway, StartupError> {
        tracing::debug!(cached = self.provider.is_ready(), "Resolving analysis client");
        let analyzer = match self.provider.create_client().await {
            Ok(handle) => handle,
            Err(e) => {
                tracing::error!(error = %e, "Failed to create analysis client");
                self.state.send_replace(LifecycleState::Failed);
                return Err(e.into());
            }
        };
        self.state.send_replace(LifecycleState::Ready);

        let tcp = match listener::bind(&self.config.listener).await {
            Ok(tcp) => tcp,
            Err(e) => {
                tracing::error!(error = %e, "Failed to bind listener");
                self.state.send_replace(LifecycleState::Failed);
                return Err(e.into());
            }
        };
        let local_addr = tcp.local_addr().map_err(|source| {
            self.state.send_replace(LifecycleState::Failed);
            StartupError::Transport(listener::TransportError {
                address: self.config.listener.bind_address.clone(),
                source,
            })
        })?;

        let app_state = AppState::new(analyzer, &self.config.analyzer);
        let router = build_router(&self.config, app_state);

        let shutdown = Shutdown::new();
        let mut stop_rx = shutdown.subscribe();

        let task = tokio::spawn(async move {
            axum::serve(tcp, router)
                .with_graceful_shutdown(async move {
                    let _ = stop_rx.recv().await;
                })
                .await
        });

        self.state.send_replace(LifecycleState::Listening);
        tracing::info!(address = %local_addr, "HTTP server listening");

        Ok(RunningGateway {
            local_addr,
            shutdown,
            task,
            state: self.state,
        })
    }
}

/// Gateway that is accepting connections.
pub struct RunningGateway {
    local_addr: SocketAddr,
    shutdown: Shutdown,
    task: JoinHandle<std::io::Result<()>>,
    state: watch::Sender<LifecycleState>,
}

impl RunningGateway {
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    pub fn lifecycle(&self) -> watch::Receiver<LifecycleState> {
        self.state.subscribe()
    }

    /// Stop accepting, wait for open connections to finish, then return.
    pub async fn stop(self) -> std::io::Result<()> {
        tracing::info!("Stopping HTTP server");
        self.shutdown.trigger();

        let result = match self.task.await {
            Ok(result) => result,
            Err(e) => Err(std::io::Error::other(e)),
        };

        match &result {
            Ok(()) => {
                self.state.send_replace(LifecycleState::Stopped);
                tracing::info!("HTTP server stopped");
            }
            Err(e) => {
                self.state.send_replace(LifecycleState::Failed);
                tracing::error!(error = %e, "HTTP server exited with error");
            }
        }
        result
    }
}
