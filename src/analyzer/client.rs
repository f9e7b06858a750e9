//! HTTP client for the comment-analysis service.

use async_trait::async_trait;
use axum::http::StatusCode;
use serde::Serialize;
use serde_json::Value;
use url::Url;

use crate::analyzer::discovery::CommentEndpoints;
use crate::analyzer::error::RemoteCallError;
use crate::analyzer::types::{
    AnalyzeCommentRequest, AnalyzeCommentResponse, SuggestCommentScoreRequest,
    SuggestCommentScoreResponse,
};

/// The two operations the gateway forwards to.
///
/// Each call yields exactly one of a response body or an error.
#[async_trait]
pub trait CommentAnalyzer: Send + Sync {
    async fn analyze(
        &self,
        api_key: &str,
        request: &AnalyzeCommentRequest,
    ) -> Result<AnalyzeCommentResponse, RemoteCallError>;

    async fn suggest_score(
        &self,
        api_key: &str,
        request: &SuggestCommentScoreRequest,
    ) -> Result<SuggestCommentScoreResponse, RemoteCallError>;
}

/// `CommentAnalyzer` backed by the REST endpoints from the discovery document.
#[derive(Debug, Clone)]
pub struct AnalyzerClient {
    http: reqwest::Client,
    endpoints: CommentEndpoints,
}

impl AnalyzerClient {
    pub fn new(http: reqwest::Client, endpoints: CommentEndpoints) -> Self {
        Self { http, endpoints }
    }

    async fn post<T: Serialize + Sync>(
        &self,
        url: &Url,
        api_key: &str,
        payload: &T,
    ) -> Result<Value, RemoteCallError> {
        let response = self
            .http
            .post(url.clone())
            .query(&[("key", api_key)])
            .json(payload)
            .send()
            .await
            .map_err(|e| RemoteCallError::transport(&e))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| RemoteCallError::transport(&e))?;

        if !status.is_success() {
            tracing::warn!(
                url = %url.path(),
                status = %status,
                "Analysis service returned an error"
            );
            return Err(RemoteCallError::upstream(status, &body));
        }

        if body.is_empty() {
            return Ok(Value::Object(Default::default()));
        }
        serde_json::from_slice(&body)
            .map_err(|_| RemoteCallError::upstream(StatusCode::BAD_GATEWAY, &body))
    }
}

#[async_trait]
impl CommentAnalyzer for AnalyzerClient {
    async fn analyze(
        &self,
        api_key: &str,
        request: &AnalyzeCommentRequest,
    ) -> Result<AnalyzeCommentResponse, RemoteCallError> {
        self.post(&self.endpoints.analyze, api_key, request).await
    }

    async fn suggest_score(
        &self,
        api_key: &str,
        request: &SuggestCommentScoreRequest,
    ) -> Result<SuggestCommentScoreResponse, RemoteCallError> {
        self.post(&self.endpoints.suggest_score, api_key, request).await
    }
}
