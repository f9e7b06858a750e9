//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the global `tracing` subscriber
//! - Pick the default filter from the observability config
//! - Honour `RUST_LOG` when it is set
//!
//! # Design Decisions
//! - JSON format on request, human-readable format otherwise
//! - Production deployments are quiet: warnings and errors only

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::ObservabilityConfig;

/// Filter directive used when `RUST_LOG` is not set.
pub fn default_directive(config: &ObservabilityConfig) -> String {
    let level = if config.production {
        "warn"
    } else {
        config.log_level.as_str()
    };
    format!("comment_gateway={level},tower_http={level}")
}

/// Install the global subscriber. Call once, early in `main`.
///
/// `config.log_level` has already been checked by `validate_config`.
pub fn init(config: &ObservabilityConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(config)));

    let registry = tracing_subscriber::registry().with(filter);
    if config.json_logs {
        registry.with(fmt::layer().json()).init();
    } else {
        registry.with(fmt::layer()).init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_development_uses_configured_level() {
        let config = ObservabilityConfig {
            log_level: "debug".into(),
            ..Default::default()
        };
        assert_eq!(
            default_directive(&config),
            "comment_gateway=debug,tower_http=debug"
        );
    }

    #[test]
    fn test_production_is_quiet() {
        let config = ObservabilityConfig {
            log_level: "trace".into(),
            production: true,
            ..Default::default()
        };
        assert_eq!(default_directive(&config), "comment_gateway=warn,tower_http=warn");
    }
}
