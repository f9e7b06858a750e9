//! Inbound payloads and the analysis service's wire shapes.
//!
//! Inbound types mirror what the website and browser plugin send
//! (camelCase). Outbound types mirror the `commentanalyzer` v1alpha1 REST
//! schema (snake_case, except `summaryScore`, which the service spells in
//! camelCase).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Body of `POST /check` and `POST /plugin/check`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InboundCheckRequest {
    pub comment: String,
    #[serde(default)]
    pub article_text: Option<String>,
    #[serde(default)]
    pub parent_comment: Option<String>,
    #[serde(default)]
    pub languages: Option<Vec<String>>,
    #[serde(default)]
    pub do_not_store: Option<bool>,
    #[serde(default)]
    pub client_token: Option<String>,
    #[serde(default)]
    pub session_id: Option<String>,
    #[serde(default)]
    pub community_id: Option<String>,
    #[serde(default)]
    pub span_annotations: Option<bool>,
    /// Attribute to score instead of the configured default.
    #[serde(default)]
    pub model_name: Option<String>,
}

/// Body of `POST /suggest_score`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InboundScoreFeedback {
    pub comment: String,
    #[serde(default)]
    pub comment_marked_as_toxic: bool,
    #[serde(default)]
    pub session_id: Option<String>,
    #[serde(default)]
    pub model_name: Option<String>,
}

/// A piece of text as the service expects it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct TextEntry {
    pub text: String,
}

impl TextEntry {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Context {
    pub article_and_parent_comment: ArticleAndParentComment,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ArticleAndParentComment {
    pub article: TextEntry,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_comment: Option<TextEntry>,
}

/// How the service should express a requested score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ScoreType {
    Probability,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct AttributeParameters {
    pub score_type: ScoreType,
}

/// `comments:analyze` request body.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct AnalyzeCommentRequest {
    pub comment: TextEntry,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<Context>,
    pub requested_attributes: BTreeMap<String, AttributeParameters>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub languages: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub do_not_store: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub community_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub span_annotations: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct Score {
    /// 1 when the reader marked the comment as toxic, otherwise 0.
    pub value: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct AttributeScore {
    #[serde(rename = "summaryScore")]
    pub summary_score: Score,
}

/// `comments:suggestscore` request body.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SuggestCommentScoreRequest {
    pub comment: TextEntry,
    pub attribute_scores: BTreeMap<String, AttributeScore>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_token: Option<String>,
}

/// Responses are relayed without interpretation.
pub type AnalyzeCommentResponse = serde_json::Value;
pub type SuggestCommentScoreResponse = serde_json::Value;
