//! Mapping of gateway failures onto HTTP responses.

use axum::{
    extract::rejection::BytesRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::analyzer::RemoteCallError;

/// Per-request failure. Never fatal to the process.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// Body missing or not the expected JSON; no remote call is made.
    #[error("bad request: {0}")]
    BadRequest(String),

    /// The body could not be read, usually because it exceeds the limit.
    #[error("unreadable request body: {0}")]
    Body(#[from] BytesRejection),

    /// The request outlived `timeouts.request_secs`.
    #[error("request timed out")]
    RequestTimeout,

    /// The analysis service call failed; relayed with its status.
    #[error(transparent)]
    Remote(#[from] RemoteCallError),
}

/// `{"error": {"code", "message"}}`, the shape the analysis service uses.
fn envelope(status: StatusCode, message: String) -> Response {
    (
        status,
        Json(json!({
            "error": {
                "code": status.as_u16(),
                "message": message,
            }
        })),
    )
        .into_response()
}

/// Re-wrap the empty 408 produced by the request timeout layer.
pub async fn timeout_as_json(response: Response) -> Response {
    if response.status() == StatusCode::REQUEST_TIMEOUT {
        return GatewayError::RequestTimeout.into_response();
    }
    response
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        match self {
            GatewayError::BadRequest(message) => envelope(StatusCode::BAD_REQUEST, message),
            GatewayError::Body(rejection) => envelope(rejection.status(), rejection.body_text()),
            GatewayError::RequestTimeout => envelope(
                StatusCode::REQUEST_TIMEOUT,
                "request did not complete in time".to_string(),
            ),
            GatewayError::Remote(err) => (err.status_or_default(), Json(err.body)).into_response(),
        }
    }
}
