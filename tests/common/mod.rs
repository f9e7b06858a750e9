//! Shared utilities for integration testing.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::{json, Value};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use comment_gateway::analyzer::types::{
    AnalyzeCommentRequest, AnalyzeCommentResponse, SuggestCommentScoreRequest,
    SuggestCommentScoreResponse,
};
use comment_gateway::analyzer::{CommentAnalyzer, RemoteCallError};
use comment_gateway::GatewayConfig;

pub const TEST_API_KEY: &str = "test-key";
pub const DISCOVERY_PATH: &str = "/$discovery/rest";
pub const ANALYZE_PATH: &str = "/v1alpha1/comments:analyze";
pub const SUGGEST_PATH: &str = "/v1alpha1/comments:suggestscore";

/// Config suitable for tests: ephemeral port, no static files.
pub fn test_config() -> GatewayConfig {
    let mut config = GatewayConfig::default();
    config.listener.bind_address = "127.0.0.1:0".into();
    config.analyzer.api_key = TEST_API_KEY.into();
    config.static_files.enabled = false;
    config
}

/// Config pointing discovery at a mock server.
pub fn config_for(server: &MockServer) -> GatewayConfig {
    let mut config = test_config();
    config.analyzer.discovery_url = format!("{}{}?version=v1alpha1", server.uri(), DISCOVERY_PATH);
    config
}

/// Discovery document exposing the given comment methods, rooted at `root_url`.
pub fn discovery_document(root_url: &str, methods: &[&str]) -> Value {
    let mut table = serde_json::Map::new();
    for name in methods {
        table.insert(
            name.to_string(),
            json!({
                "id": format!("commentanalyzer.comments.{}", name),
                "path": format!("v1alpha1/comments:{}", name),
                "flatPath": format!("v1alpha1/comments:{}", name),
                "httpMethod": "POST",
            }),
        );
    }

    json!({
        "kind": "discovery#restDescription",
        "name": "commentanalyzer",
        "version": "v1alpha1",
        "rootUrl": root_url,
        "servicePath": "",
        "resources": { "comments": { "methods": Value::Object(table) } }
    })
}

/// Serve a complete discovery document that points back at `server`.
pub async fn mount_discovery(server: &MockServer) {
    let root = format!("{}/", server.uri());
    Mock::given(method("GET"))
        .and(path(DISCOVERY_PATH))
        .and(query_param("version", "v1alpha1"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(discovery_document(&root, &["analyze", "suggestscore"])),
        )
        .mount(server)
        .await;
}

/// Typical analyze response.
pub fn toxicity_response(score: f64) -> Value {
    json!({
        "attributeScores": {
            "TOXICITY": {
                "summaryScore": { "value": score, "type": "PROBABILITY" }
            }
        },
        "languages": ["en"]
    })
}

/// In-process analyzer that records calls and answers with a fixed result.
pub struct RecordingAnalyzer {
    result: Result<Value, RemoteCallError>,
    pub analyze_calls: Mutex<Vec<(String, AnalyzeCommentRequest)>>,
    pub suggest_calls: Mutex<Vec<(String, SuggestCommentScoreRequest)>>,
}

impl RecordingAnalyzer {
    pub fn answering(body: Value) -> Arc<Self> {
        Arc::new(Self {
            result: Ok(body),
            analyze_calls: Mutex::new(Vec::new()),
            suggest_calls: Mutex::new(Vec::new()),
        })
    }

    pub fn failing(err: RemoteCallError) -> Arc<Self> {
        Arc::new(Self {
            result: Err(err),
            analyze_calls: Mutex::new(Vec::new()),
            suggest_calls: Mutex::new(Vec::new()),
        })
    }

    pub fn call_count(&self) -> usize {
        self.analyze_calls.lock().unwrap().len() + self.suggest_calls.lock().unwrap().len()
    }
}

#[async_trait]
impl CommentAnalyzer for RecordingAnalyzer {
    async fn analyze(
        &self,
        api_key: &str,
        request: &AnalyzeCommentRequest,
    ) -> Result<AnalyzeCommentResponse, RemoteCallError> {
        self.analyze_calls
            .lock()
            .unwrap()
            .push((api_key.to_string(), request.clone()));
        self.result.clone()
    }

    async fn suggest_score(
        &self,
        api_key: &str,
        request: &SuggestCommentScoreRequest,
    ) -> Result<SuggestCommentScoreResponse, RemoteCallError> {
        self.suggest_calls
            .lock()
            .unwrap()
            .push((api_key.to_string(), request.clone()));
        self.result.clone()
    }
}

/// Analyzer whose calls never complete.
pub struct StalledAnalyzer;

#[async_trait]
impl CommentAnalyzer for StalledAnalyzer {
    async fn analyze(
        &self,
        _api_key: &str,
        _request: &AnalyzeCommentRequest,
    ) -> Result<AnalyzeCommentResponse, RemoteCallError> {
        std::future::pending().await
    }

    async fn suggest_score(
        &self,
        _api_key: &str,
        _request: &SuggestCommentScoreRequest,
    ) -> Result<SuggestCommentScoreResponse, RemoteCallError> {
        std::future::pending().await
    }
}

/// Answers with `body` after `delay`, like a slow but healthy service.
pub struct DelayedAnalyzer {
    pub delay: std::time::Duration,
    pub body: Value,
}

impl DelayedAnalyzer {
    pub fn new(delay: std::time::Duration, body: Value) -> Arc<Self> {
        Arc::new(Self { delay, body })
    }
}

#[async_trait]
impl CommentAnalyzer for DelayedAnalyzer {
    async fn analyze(
        &self,
        _api_key: &str,
        _request: &AnalyzeCommentRequest,
    ) -> Result<AnalyzeCommentResponse, RemoteCallError> {
        tokio::time::sleep(self.delay).await;
        Ok(self.body.clone())
    }

    async fn suggest_score(
        &self,
        _api_key: &str,
        _request: &SuggestCommentScoreRequest,
    ) -> Result<SuggestCommentScoreResponse, RemoteCallError> {
        tokio::time::sleep(self.delay).await;
        Ok(self.body.clone())
    }
}
