//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeouts > 0, addresses parse)
//! - The request deadline must outlast the analysis call deadline
//! - Reject configs the gateway cannot start with (missing API key)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: GatewayConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;

use thiserror::Error;

use crate::config::schema::GatewayConfig;

/// A single semantic problem in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("invalid {field}: {value:?} is not a socket address")]
    InvalidAddress { field: &'static str, value: String },

    #[error("analyzer.api_key must be set")]
    MissingApiKey,

    #[error("analyzer.default_attribute must not be empty")]
    EmptyAttribute,

    #[error("analyzer.discovery_url {0:?} is not a valid URL")]
    InvalidDiscoveryUrl(String),

    #[error("{0} must be greater than zero")]
    ZeroValue(&'static str),

    #[error("static_files.path must be set when static serving is enabled")]
    EmptyStaticPath,

    #[error(
        "timeouts.request_secs ({request_ms}ms) must exceed analyzer.call_timeout_ms ({call_ms}ms)"
    )]
    TimeoutOrdering { request_ms: u64, call_ms: u64 },

    #[error("observability.log_level {0:?} is not one of trace, debug, info, warn, error")]
    InvalidLogLevel(String),
}

/// Check a parsed configuration for semantic errors.
pub fn validate_config(config: &GatewayConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidAddress {
            field: "listener.bind_address",
            value: config.listener.bind_address.clone(),
        });
    }

    let analyzer = &config.analyzer;
    if analyzer.api_key.trim().is_empty() {
        errors.push(ValidationError::MissingApiKey);
    }
    if analyzer.default_attribute.trim().is_empty() {
        errors.push(ValidationError::EmptyAttribute);
    }
    if url::Url::parse(&analyzer.discovery_url).is_err() {
        errors.push(ValidationError::InvalidDiscoveryUrl(
            analyzer.discovery_url.clone(),
        ));
    }
    if analyzer.call_timeout_ms == 0 {
        errors.push(ValidationError::ZeroValue("analyzer.call_timeout_ms"));
    }

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroValue("timeouts.request_secs"));
    }
    let request_ms = config.timeouts.request_secs.saturating_mul(1000);
    if config.timeouts.request_secs != 0 && request_ms <= analyzer.call_timeout_ms {
        errors.push(ValidationError::TimeoutOrdering {
            request_ms,
            call_ms: analyzer.call_timeout_ms,
        });
    }
    if config.security.max_body_size == 0 {
        errors.push(ValidationError::ZeroValue("security.max_body_size"));
    }
    if config.static_files.enabled && config.static_files.path.trim().is_empty() {
        errors.push(ValidationError::EmptyStaticPath);
    }

    let observability = &config.observability;
    if observability.log_level.parse::<tracing::Level>().is_err() {
        errors.push(ValidationError::InvalidLogLevel(
            observability.log_level.clone(),
        ));
    }
    if observability.metrics_enabled
        && observability.metrics_address.parse::<SocketAddr>().is_err()
    {
        errors.push(ValidationError::InvalidAddress {
            field: "observability.metrics_address",
            value: observability.metrics_address.clone(),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
