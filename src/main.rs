//! Comment Gateway
//!
//! A small HTTP gateway in front of a remote comment-analysis API.
//!
//! # Architecture Overview
//!
//! ```text
//!                          ┌──────────────────────────────────────────────┐
//!                          │               COMMENT GATEWAY                │
//!   POST /check            │  ┌────────┐   ┌───────────┐   ┌──────────┐   │
//!   POST /plugin/check  ───┼─▶│  http  │──▶│ translate │──▶│ analyzer │───┼──▶ Analysis
//!   POST /suggest_score    │  │handlers│   │  (pure)   │   │  client  │   │     API
//!                          │  └────────┘   └───────────┘   └──────────┘   │
//!   JSON response      ◀───┼──── relayed body / error with upstream status │
//!                          │                                              │
//!                          │  config · lifecycle · observability · limits │
//!                          └──────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use comment_gateway::config::load_config;
use comment_gateway::http::GatewayServer;
use comment_gateway::lifecycle::signals::shutdown_signal;
use comment_gateway::observability::{logging, metrics};

#[derive(Parser)]
#[command(name = "comment-gateway")]
#[command(about = "HTTP gateway for the comment-analysis API", long_about = None)]
struct Args {
    /// Path to a TOML configuration file.
    #[arg(short, long, env = "COMMENT_GATEWAY_CONFIG")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    let config = match load_config(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("comment-gateway: {}", e);
            return ExitCode::FAILURE;
        }
    };

    logging::init(&config.observability);
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "comment-gateway starting");
    tracing::debug!(config = ?config.redacted(), "Configuration loaded");

    if config.observability.metrics_enabled {
        if let Ok(addr) = config.observability.metrics_address.parse() {
            metrics::init_metrics(addr);
        }
    }

    let server = match GatewayServer::new(config) {
        Ok(server) => server,
        Err(e) => {
            tracing::error!(error = %e, "Failed to start");
            return ExitCode::FAILURE;
        }
    };

    let running = match server.start().await {
        Ok(running) => running,
        Err(e) => {
            tracing::error!(error = %e, "Failed to start");
            return ExitCode::FAILURE;
        }
    };

    shutdown_signal().await;

    if let Err(e) = running.stop().await {
        tracing::error!(error = %e, "Shutdown failed");
        return ExitCode::FAILURE;
    }

    tracing::info!("Shutdown complete");
    ExitCode::SUCCESS
}
