//! Lazy, validated construction of the shared analysis client.
//!
//! # Responsibilities
//! - Fetch the discovery document and locate both comment operations
//! - Refuse a client missing either operation
//! - Build the client at most once and hand out the cached handle afterwards
//!
//! # Design Decisions
//! - The handle is immutable once built; requests only read it
//! - Concurrent first callers share one construction (`OnceCell`)
//! - A provider can be seeded with a ready handle, bypassing discovery

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::OnceCell;
use url::Url;

use crate::analyzer::client::{AnalyzerClient, CommentAnalyzer};
use crate::analyzer::discovery::DiscoveryDocument;
use crate::analyzer::error::ClientError;
use crate::config::AnalyzerConfig;

/// Shared handle to a validated analysis client.
pub type AnalyzerHandle = Arc<dyn CommentAnalyzer>;

/// Where a fresh client comes from when none is cached yet.
#[derive(Debug, Clone)]
struct DiscoverySource {
    http: reqwest::Client,
    url: Url,
}

/// Owner of the process-wide analysis client.
pub struct ClientProvider {
    source: Option<DiscoverySource>,
    handle: OnceCell<AnalyzerHandle>,
}

impl ClientProvider {
    /// Provider that discovers the service described by `config`.
    pub fn from_config(config: &AnalyzerConfig) -> Result<Self, ClientError> {
        let url = Url::parse(&config.discovery_url).map_err(|e| ClientError::InvalidUrl {
            url: config.discovery_url.clone(),
            reason: e.to_string(),
        })?;

        let http = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.call_timeout_ms))
            .build()?;

        Ok(Self {
            source: Some(DiscoverySource { http, url }),
            handle: OnceCell::new(),
        })
    }

    /// Provider that already holds a ready handle and never contacts the network.
    pub fn with_handle(handle: AnalyzerHandle) -> Self {
        Self {
            source: None,
            handle: OnceCell::new_with(Some(handle)),
        }
    }

    /// Return the cached handle, building it first if needed.
    pub async fn create_client(&self) -> Result<AnalyzerHandle, ClientError> {
        let handle = self.handle.get_or_try_init(|| self.discover()).await?;
        Ok(Arc::clone(handle))
    }

    pub fn is_ready(&self) -> bool {
        self.handle.initialized()
    }

    async fn discover(&self) -> Result<AnalyzerHandle, ClientError> {
        let source = self.source.as_ref().ok_or(ClientError::Unconfigured)?;

        tracing::info!(url = %source.url, "Fetching analysis service discovery document");

        let response = source.http.get(source.url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            tracing::error!(status = %status, "Discovery request failed");
            return Err(ClientError::DiscoveryStatus(status));
        }

        let document: DiscoveryDocument = response.json().await?;
        let endpoints = document.comment_endpoints().map_err(|e| {
            tracing::error!(error = %e, "Discovery document lacks required methods");
            e
        })?;

        tracing::info!(
            analyze = %endpoints.analyze,
            suggest_score = %endpoints.suggest_score,
            "Analysis client created"
        );

        Ok(Arc::new(AnalyzerClient::new(source.http.clone(), endpoints)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::error::RemoteCallError;
    use crate::analyzer::types::{
        AnalyzeCommentRequest, AnalyzeCommentResponse, SuggestCommentScoreRequest,
        SuggestCommentScoreResponse,
    };
    use async_trait::async_trait;
    use serde_json::json;

    struct NullAnalyzer;

    #[async_trait]
    impl CommentAnalyzer for NullAnalyzer {
        async fn analyze(
            &self,
            _api_key: &str,
            _request: &AnalyzeCommentRequest,
        ) -> Result<AnalyzeCommentResponse, RemoteCallError> {
            Ok(json!({}))
        }

        async fn suggest_score(
            &self,
            _api_key: &str,
            _request: &SuggestCommentScoreRequest,
        ) -> Result<SuggestCommentScoreResponse, RemoteCallError> {
            Ok(json!({}))
        }
    }

    #[tokio::test]
    async fn test_seeded_provider_returns_same_handle() {
        let handle: AnalyzerHandle = Arc::new(NullAnalyzer);
        let provider = ClientProvider::with_handle(handle.clone());

        assert!(provider.is_ready());
        let first = provider.create_client().await.unwrap();
        let second = provider.create_client().await.unwrap();
        assert!(Arc::ptr_eq(&first, &handle));
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_invalid_discovery_url_rejected() {
        let config = AnalyzerConfig {
            discovery_url: "not a url".into(),
            ..Default::default()
        };
        assert!(matches!(
            ClientProvider::from_config(&config),
            Err(ClientError::InvalidUrl { .. })
        ));
    }

    #[test]
    fn test_unbuilt_provider_is_not_ready() {
        let provider = ClientProvider::from_config(&AnalyzerConfig::default()).unwrap();
        assert!(!provider.is_ready());
    }
}
