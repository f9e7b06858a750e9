//! Public endpoint handlers.
//!
//! `/check`, `/plugin/check` and `/suggest_score` share one shape:
//! require a body, translate it, call the analysis service with the
//! configured key, relay the answer (or the error) unchanged.

use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::analyzer::translate;
use crate::analyzer::types::{InboundCheckRequest, InboundScoreFeedback};
use crate::analyzer::AnalyzerHandle;
use crate::config::AnalyzerConfig;
use crate::http::error::GatewayError;
use crate::http::request::request_id;
use crate::observability::metrics;
use crate::resilience::timeouts;

/// Application state injected into handlers. Read-only after startup.
#[derive(Clone)]
pub struct AppState {
    pub analyzer: AnalyzerHandle,
    pub api_key: Arc<str>,
    pub default_attribute: Arc<str>,
    pub call_timeout: Duration,
}

impl AppState {
    pub fn new(analyzer: AnalyzerHandle, config: &AnalyzerConfig) -> Self {
        Self {
            analyzer,
            api_key: Arc::from(config.api_key.as_str()),
            default_attribute: Arc::from(config.default_attribute.as_str()),
            call_timeout: Duration::from_millis(config.call_timeout_ms),
        }
    }
}

/// Liveness probe. Independent of the analysis service.
pub async fn health() -> &'static str {
    "ok"
}

/// Answer to a bare OPTIONS on the plugin route; CORS preflights are
/// answered by the CORS layer before reaching this.
pub async fn preflight() -> StatusCode {
    StatusCode::NO_CONTENT
}

pub async fn check_comment(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Result<Bytes, BytesRejection>,
) -> Response {
    let start = Instant::now();
    let result = match body {
        Ok(body) => check(&state, &headers, &body).await,
        Err(rejection) => Err(rejection.into()),
    };
    finish("check", start, result)
}

pub async fn plugin_check_comment(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Result<Bytes, BytesRejection>,
) -> Response {
    let start = Instant::now();
    let result = match body {
        Ok(body) => check(&state, &headers, &body).await,
        Err(rejection) => Err(rejection.into()),
    };
    finish("plugin_check", start, result)
}

pub async fn suggest_score(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Result<Bytes, BytesRejection>,
) -> Response {
    let start = Instant::now();
    let result = match body {
        Ok(body) => suggest(&state, &headers, &body).await,
        Err(rejection) => Err(rejection.into()),
    };
    finish("suggest_score", start, result)
}

async fn check(state: &AppState, headers: &HeaderMap, body: &[u8]) -> Result<Value, GatewayError> {
    let inbound: InboundCheckRequest = parse_body(headers, body)?;
    let request = translate::to_analyze_request(&inbound, &state.default_attribute);

    let response = timeouts::bounded(
        state.call_timeout,
        state.analyzer.analyze(&state.api_key, &request),
    )
    .await?;
    Ok(response)
}

async fn suggest(state: &AppState, headers: &HeaderMap, body: &[u8]) -> Result<Value, GatewayError> {
    let inbound: InboundScoreFeedback = parse_body(headers, body)?;
    let request = translate::to_suggest_score_request(&inbound, &state.default_attribute);

    let response = timeouts::bounded(
        state.call_timeout,
        state.analyzer.suggest_score(&state.api_key, &request),
    )
    .await?;
    Ok(response)
}

/// Reject empty bodies before anything else, then decode.
fn parse_body<T: DeserializeOwned>(headers: &HeaderMap, body: &[u8]) -> Result<T, GatewayError> {
    let request_id = request_id(headers);

    if body.iter().all(u8::is_ascii_whitespace) {
        tracing::debug!(request_id = %request_id, "Rejected request without body");
        return Err(GatewayError::BadRequest("no request body".to_string()));
    }

    tracing::debug!(
        request_id = %request_id,
        body = %String::from_utf8_lossy(body),
        "Request"
    );

    serde_json::from_slice(body).map_err(|e| {
        tracing::debug!(request_id = %request_id, error = %e, "Rejected malformed body");
        GatewayError::BadRequest(format!("invalid request body: {}", e))
    })
}

fn finish(endpoint: &'static str, start: Instant, result: Result<Value, GatewayError>) -> Response {
    let response = match result {
        Ok(body) => (StatusCode::OK, Json(body)).into_response(),
        Err(err) => {
            if let GatewayError::Remote(remote) = &err {
                metrics::record_upstream_error(endpoint);
                tracing::warn!(endpoint, error = %remote, "Forwarding failed");
            }
            err.into_response()
        }
    };

    metrics::record_request(endpoint, response.status().as_u16(), start);
    response
}
