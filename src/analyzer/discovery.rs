//! Service discovery document parsing.
//!
//! The analysis service publishes a discovery document describing its REST
//! surface. Only the parts needed to locate the `comments.analyze` and
//! `comments.suggestscore` methods are modelled.

use std::collections::HashMap;

use serde::Deserialize;
use url::Url;

use crate::analyzer::error::ClientError;

pub const COMMENTS_RESOURCE: &str = "comments";
pub const ANALYZE_METHOD: &str = "analyze";
pub const SUGGEST_SCORE_METHOD: &str = "suggestscore";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DiscoveryDocument {
    pub root_url: String,
    pub service_path: String,
    pub resources: HashMap<String, DiscoveryResource>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DiscoveryResource {
    pub methods: HashMap<String, DiscoveryMethod>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DiscoveryMethod {
    pub path: String,
    pub http_method: String,
}

/// Endpoints of the two operations the gateway forwards to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentEndpoints {
    pub analyze: Url,
    pub suggest_score: Url,
}

impl DiscoveryDocument {
    /// Resolve both comment endpoints, failing if either is absent.
    pub fn comment_endpoints(&self) -> Result<CommentEndpoints, ClientError> {
        Ok(CommentEndpoints {
            analyze: self.method_url(COMMENTS_RESOURCE, ANALYZE_METHOD)?,
            suggest_score: self.method_url(COMMENTS_RESOURCE, SUGGEST_SCORE_METHOD)?,
        })
    }

    fn method_url(&self, resource: &str, method: &str) -> Result<Url, ClientError> {
        let found = self
            .resources
            .get(resource)
            .and_then(|r| r.methods.get(method))
            .filter(|m| !m.path.is_empty())
            .ok_or_else(|| {
                ClientError::Malformed(format!("missing method {}.{}", resource, method))
            })?;

        if !found.http_method.is_empty() && !found.http_method.eq_ignore_ascii_case("POST") {
            return Err(ClientError::Malformed(format!(
                "{}.{} expects {}, not POST",
                resource, method, found.http_method
            )));
        }

        let raw = format!("{}{}{}", self.root_url, self.service_path, found.path);
        Url::parse(&raw).map_err(|e| ClientError::InvalidUrl {
            url: raw,
            reason: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn document(methods: serde_json::Value) -> DiscoveryDocument {
        serde_json::from_value(json!({
            "rootUrl": "https://commentanalyzer.googleapis.com/",
            "servicePath": "",
            "resources": { "comments": { "methods": methods } }
        }))
        .unwrap()
    }

    #[test]
    fn test_resolves_both_endpoints() {
        let doc = document(json!({
            "analyze": {"path": "v1alpha1/comments:analyze", "httpMethod": "POST"},
            "suggestscore": {"path": "v1alpha1/comments:suggestscore", "httpMethod": "POST"}
        }));

        let endpoints = doc.comment_endpoints().unwrap();
        assert_eq!(
            endpoints.analyze.as_str(),
            "https://commentanalyzer.googleapis.com/v1alpha1/comments:analyze"
        );
        assert_eq!(endpoints.suggest_score.path(), "/v1alpha1/comments:suggestscore");
    }

    #[test]
    fn test_missing_suggest_is_malformed() {
        let doc = document(json!({
            "analyze": {"path": "v1alpha1/comments:analyze", "httpMethod": "POST"}
        }));

        let err = doc.comment_endpoints().unwrap_err();
        assert!(matches!(err, ClientError::Malformed(ref m) if m.contains("suggestscore")));
    }

    #[test]
    fn test_empty_document_is_malformed() {
        let doc: DiscoveryDocument = serde_json::from_value(json!({})).unwrap();
        assert!(matches!(
            doc.comment_endpoints(),
            Err(ClientError::Malformed(_))
        ));
    }

    #[test]
    fn test_wrong_http_method_is_malformed() {
        let doc = document(json!({
            "analyze": {"path": "v1alpha1/comments:analyze", "httpMethod": "GET"},
            "suggestscore": {"path": "v1alpha1/comments:suggestscore", "httpMethod": "POST"}
        }));
        assert!(matches!(
            doc.comment_endpoints(),
            Err(ClientError::Malformed(_))
        ));
    }
}
