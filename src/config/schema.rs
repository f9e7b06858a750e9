//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the gateway.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Discovery document of the public comment-analysis API.
pub const DEFAULT_DISCOVERY_URL: &str =
    "https://commentanalyzer.googleapis.com/$discovery/rest?version=v1alpha1";

/// Root configuration for the comment gateway.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct GatewayConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Remote analysis service settings.
    pub analyzer: AnalyzerConfig,

    /// Static asset serving.
    pub static_files: StaticFilesConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Request limits.
    pub security: SecurityConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

impl GatewayConfig {
    /// Copy of this config that is safe to write to logs.
    pub fn redacted(&self) -> Self {
        let mut config = self.clone();
        if !config.analyzer.api_key.is_empty() {
            config.analyzer.api_key = "<redacted>".to_string();
        }
        config
    }
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
        }
    }
}

/// Remote comment-analysis service configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// API key sent with every analyze/suggest call.
    pub api_key: String,

    /// URL of the service discovery document.
    pub discovery_url: String,

    /// Attribute requested when the caller does not name a model.
    pub default_attribute: String,

    /// Upper bound on a single remote call, in milliseconds.
    pub call_timeout_ms: u64,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            discovery_url: DEFAULT_DISCOVERY_URL.to_string(),
            default_attribute: "TOXICITY".to_string(),
            call_timeout_ms: 10_000,
        }
    }
}

/// Static asset configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct StaticFilesConfig {
    /// Serve files for unmatched GET requests.
    pub enabled: bool,

    /// Directory to serve, relative to the working directory.
    pub path: String,
}

impl Default for StaticFilesConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            path: "static".to_string(),
        }
    }
}

/// Timeout configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Request timeout (total time for request/response) in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 30 }
    }
}

/// Request limits.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SecurityConfig {
    /// Maximum body size in bytes.
    pub max_body_size: usize,
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            max_body_size: 1024 * 1024, // 1MB
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Production deployments log only warnings and errors.
    pub production: bool,

    /// Emit JSON log lines instead of the human-readable format.
    pub json_logs: bool,

    /// Enable metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            production: false,
            json_logs: false,
            metrics_enabled: false,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_config_uses_defaults() {
        let config: GatewayConfig = toml::from_str(
            r#"
            [analyzer]
            api_key = "k"
            "#,
        )
        .unwrap();

        assert_eq!(config.analyzer.api_key, "k");
        assert_eq!(config.analyzer.default_attribute, "TOXICITY");
        assert_eq!(config.analyzer.discovery_url, DEFAULT_DISCOVERY_URL);
        assert_eq!(config.listener.bind_address, "0.0.0.0:8080");
        assert!(!config.observability.production);
    }

    #[test]
    fn test_redacted_hides_api_key() {
        let mut config = GatewayConfig::default();
        config.analyzer.api_key = "secret".into();
        let redacted = config.redacted();
        assert_eq!(redacted.analyzer.api_key, "<redacted>");
        assert_eq!(config.analyzer.api_key, "secret");
    }
}
