//! Development fallback for contest creation
//!
//! Outside production the contest backend is frequently a half-deployed
//! stub that answers with an HTML page. When enabled, this policy turns
//! such an unusable answer into a plausible created-contest payload so the
//! admin flow can continue.

use rand::Rng;
use serde_json::{Map, Value, json};

use crate::{constants::SYNTHETIC_ID_RANGE, utils::time::now_utc};

use super::NormalizedResult;

/// Whether synthetic success payloads may replace malformed upstream bodies
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DevelopmentFallbackPolicy {
    enabled: bool,
}

impl DevelopmentFallbackPolicy {
    pub fn enabled() -> Self {
        Self { enabled: true }
    }

    pub fn disabled() -> Self {
        Self { enabled: false }
    }

    /// Enabled for every environment except production
    pub fn for_production(is_production: bool) -> Self {
        Self {
            enabled: !is_production,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Replace a `MalformedBody` result with a synthesized success when enabled
    pub fn apply(&self, result: NormalizedResult, input: &Value) -> NormalizedResult {
        match result {
            NormalizedResult::MalformedBody { excerpt } if self.enabled => {
                tracing::warn!(
                    excerpt = %excerpt,
                    "Upstream body unusable; synthesizing development contest payload"
                );
                NormalizedResult::Success {
                    status: 200,
                    payload: synthesize_contest(input),
                }
            }
            other => other,
        }
    }
}

/// Echo the input fields with a random id and fresh timestamps
fn synthesize_contest(input: &Value) -> Value {
    let mut contest = match input {
        Value::Object(fields) => fields.clone(),
        _ => Map::new(),
    };

    let now = now_utc().to_rfc3339();
    let id = rand::rng().random_range(SYNTHETIC_ID_RANGE);

    contest.insert("id".to_string(), json!(id));
    contest.insert("created_at".to_string(), json!(now));
    contest.insert("updated_at".to_string(), json!(now));

    Value::Object(contest)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn malformed() -> NormalizedResult {
        NormalizedResult::MalformedBody {
            excerpt: "<html>".to_string(),
        }
    }

    #[test]
    fn test_disabled_by_default() {
        assert!(!DevelopmentFallbackPolicy::default().is_enabled());
        assert!(!DevelopmentFallbackPolicy::for_production(true).is_enabled());
        assert!(DevelopmentFallbackPolicy::for_production(false).is_enabled());
    }

    #[test]
    fn test_enabled_policy_synthesizes_from_input() {
        let input = json!({"title": "Summer", "slug": "summer"});
        let result = DevelopmentFallbackPolicy::enabled().apply(malformed(), &input);

        let NormalizedResult::Success { status, payload } = result else {
            panic!("expected synthesized success");
        };
        assert_eq!(status, 200);
        assert_eq!(payload["title"], "Summer");
        assert_eq!(payload["slug"], "summer");
        let id = payload["id"].as_u64().unwrap() as u32;
        assert!(SYNTHETIC_ID_RANGE.contains(&id));
        assert!(payload["created_at"].is_string());
        assert_eq!(payload["created_at"], payload["updated_at"]);
    }

    #[test]
    fn test_only_malformed_bodies_are_replaced() {
        let policy = DevelopmentFallbackPolicy::enabled();
        let input = json!({"title": "Summer"});

        let failure = NormalizedResult::UpstreamFailure {
            status: 409,
            message: "Slug taken".into(),
        };
        assert_eq!(policy.apply(failure.clone(), &input), failure);

        let transport = NormalizedResult::TransportError {
            message: "refused".into(),
        };
        assert_eq!(policy.apply(transport.clone(), &input), transport);

        assert_eq!(
            DevelopmentFallbackPolicy::disabled().apply(malformed(), &input),
            malformed()
        );
    }
}
