//! Errors raised while building or calling the analysis client.

use std::time::Duration;

use axum::http::StatusCode;
use serde_json::{json, Value};
use thiserror::Error;

/// Failure to produce a usable client handle. Fatal to startup.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Discovery document could not be fetched or decoded.
    #[error("failed to load discovery document: {0}")]
    Discovery(#[from] reqwest::Error),

    /// Discovery endpoint answered with a non-success status.
    #[error("discovery endpoint returned {0}")]
    DiscoveryStatus(StatusCode),

    /// Construction succeeded but a required capability is missing.
    #[error("analysis client is malformed: {0}")]
    Malformed(String),

    /// A URL in the config or discovery document does not parse.
    #[error("invalid URL {url:?}: {reason}")]
    InvalidUrl { url: String, reason: String },

    /// Provider has neither a cached handle nor a way to build one.
    #[error("no analysis client configured")]
    Unconfigured,
}

/// Failure of a single analyze or suggest-score call.
///
/// Carries the upstream status (when there was one) and the error object
/// that is relayed to the caller as-is.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("remote call failed ({}): {}", self.status_or_default(), self.message())]
pub struct RemoteCallError {
    pub status: Option<StatusCode>,
    pub body: Value,
}

impl RemoteCallError {
    /// Error response from the service. Non-JSON bodies are wrapped in the
    /// service's own error envelope so callers always get JSON.
    pub fn upstream(status: StatusCode, body: &[u8]) -> Self {
        let body = serde_json::from_slice(body).unwrap_or_else(|_| {
            json!({
                "error": {
                    "code": status.as_u16(),
                    "message": String::from_utf8_lossy(body),
                }
            })
        });
        Self {
            status: Some(status),
            body,
        }
    }

    /// The call never produced a response.
    pub fn transport(err: &reqwest::Error) -> Self {
        if err.is_timeout() {
            return Self::timeout(None);
        }
        Self {
            status: None,
            body: json!({ "error": { "message": err.to_string() } }),
        }
    }

    /// The call did not complete in time.
    pub fn timeout(after: Option<Duration>) -> Self {
        let message = match after {
            Some(after) => format!("analysis service did not respond within {}ms", after.as_millis()),
            None => "analysis service did not respond in time".to_string(),
        };
        Self {
            status: Some(StatusCode::GATEWAY_TIMEOUT),
            body: json!({
                "error": {
                    "code": StatusCode::GATEWAY_TIMEOUT.as_u16(),
                    "message": message,
                    "status": "DEADLINE_EXCEEDED",
                }
            }),
        }
    }

    /// Status relayed to the caller.
    pub fn status_or_default(&self) -> StatusCode {
        self.status.unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    fn message(&self) -> &str {
        self.body
            .pointer("/error/message")
            .and_then(Value::as_str)
            .unwrap_or("no detail")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upstream_json_kept_verbatim() {
        let raw = br#"{"error":{"code":429,"message":"Quota exceeded","status":"RESOURCE_EXHAUSTED"}}"#;
        let err = RemoteCallError::upstream(StatusCode::TOO_MANY_REQUESTS, raw);

        assert_eq!(err.status, Some(StatusCode::TOO_MANY_REQUESTS));
        assert_eq!(err.body["error"]["status"], "RESOURCE_EXHAUSTED");
        assert_eq!(err.to_string(), "remote call failed (429 Too Many Requests): Quota exceeded");
    }

    #[test]
    fn test_upstream_text_wrapped() {
        let err = RemoteCallError::upstream(StatusCode::BAD_GATEWAY, b"upstream exploded");
        assert_eq!(err.body["error"]["code"], 502);
        assert_eq!(err.body["error"]["message"], "upstream exploded");
    }

    #[test]
    fn test_missing_status_defaults_to_500() {
        let err = RemoteCallError {
            status: None,
            body: json!({}),
        };
        assert_eq!(err.status_or_default(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(err.to_string().contains("no detail"));
    }

    #[test]
    fn test_timeout_is_504() {
        let err = RemoteCallError::timeout(Some(Duration::from_millis(250)));
        assert_eq!(err.status_or_default(), StatusCode::GATEWAY_TIMEOUT);
        assert_eq!(
            err.body["error"]["message"],
            "analysis service did not respond within 250ms"
        );
    }
}
