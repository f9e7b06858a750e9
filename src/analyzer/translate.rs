//! Mapping from inbound payloads to the analysis service's request shapes.
//!
//! Every function here is pure: no I/O, no suspension, no failure. Body
//! presence is checked by the HTTP layer before anything reaches this module.

use std::collections::BTreeMap;

use crate::analyzer::types::{
    AnalyzeCommentRequest, ArticleAndParentComment, AttributeParameters, AttributeScore,
    Context, InboundCheckRequest, InboundScoreFeedback, Score, ScoreType,
    SuggestCommentScoreRequest, TextEntry,
};

/// Pick the attribute to score: the caller's model if named, else the default.
pub fn resolve_attribute<'a>(model_name: Option<&'a str>, default_attribute: &'a str) -> &'a str {
    match model_name {
        Some(name) if !name.is_empty() => name,
        _ => default_attribute,
    }
}

/// Build the `comments:analyze` body for a check request.
///
/// `context` is only produced when `articleText` is present. A
/// `parentComment` sent without an article is dropped.
pub fn to_analyze_request(
    request: &InboundCheckRequest,
    default_attribute: &str,
) -> AnalyzeCommentRequest {
    let attribute = resolve_attribute(request.model_name.as_deref(), default_attribute);

    let mut requested_attributes = BTreeMap::new();
    requested_attributes.insert(
        attribute.to_string(),
        AttributeParameters {
            score_type: ScoreType::Probability,
        },
    );

    let context = request.article_text.as_ref().map(|article| Context {
        article_and_parent_comment: ArticleAndParentComment {
            article: TextEntry::new(article.clone()),
            parent_comment: request.parent_comment.clone().map(TextEntry::new),
        },
    });

    AnalyzeCommentRequest {
        comment: TextEntry::new(request.comment.clone()),
        context,
        requested_attributes,
        languages: request.languages.clone(),
        do_not_store: request.do_not_store,
        client_token: request.client_token.clone(),
        session_id: request.session_id.clone(),
        community_id: request.community_id.clone(),
        span_annotations: request.span_annotations,
    }
}

/// Build the `comments:suggestscore` body for reader feedback.
pub fn to_suggest_score_request(
    feedback: &InboundScoreFeedback,
    default_attribute: &str,
) -> SuggestCommentScoreRequest {
    let attribute = resolve_attribute(feedback.model_name.as_deref(), default_attribute);

    let mut attribute_scores = BTreeMap::new();
    attribute_scores.insert(
        attribute.to_string(),
        AttributeScore {
            summary_score: Score {
                value: u8::from(feedback.comment_marked_as_toxic),
            },
        },
    );

    SuggestCommentScoreRequest {
        comment: TextEntry::new(feedback.comment.clone()),
        attribute_scores,
        client_token: feedback.session_id.clone(),
    }
}
