//! Response normalization
//!
//! The upstream API is inconsistent: it sometimes answers with an HTML
//! error page, sometimes with an empty body, and puts its failure text in
//! different places. `normalize` turns whatever came back into exactly one
//! `NormalizedResult`.

use serde_json::Value;

use crate::constants::{HTML_BODY_PREFIXES, MALFORMED_EXCERPT_CHARS};

use super::RawUpstreamResponse;

/// How an empty body should be interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyBody {
    /// Empty body is unusable (every endpoint except listings)
    Reject,
    /// Empty body means an empty collection (listing endpoints)
    Collection,
}

/// Classified upstream outcome
#[derive(Debug, Clone, PartialEq)]
pub enum NormalizedResult {
    Success { status: u16, payload: Value },
    UpstreamFailure { status: u16, message: String },
    MalformedBody { excerpt: String },
    TransportError { message: String },
}

/// Classify a raw upstream response
pub fn normalize(response: &RawUpstreamResponse, empty: EmptyBody) -> NormalizedResult {
    let status = response.status;
    let trimmed = response.body.trim();

    if looks_like_html(trimmed) {
        return NormalizedResult::MalformedBody {
            excerpt: excerpt(&response.body),
        };
    }

    if trimmed.is_empty() {
        return match (empty, is_success_status(status)) {
            (EmptyBody::Collection, true) => NormalizedResult::Success {
                status,
                payload: Value::Array(Vec::new()),
            },
            (EmptyBody::Collection, false) => NormalizedResult::UpstreamFailure {
                status,
                message: generic_failure(status),
            },
            (EmptyBody::Reject, _) => NormalizedResult::MalformedBody {
                excerpt: String::new(),
            },
        };
    }

    let payload: Value = match serde_json::from_str(trimmed) {
        Ok(payload) => payload,
        Err(_) => {
            return NormalizedResult::MalformedBody {
                excerpt: excerpt(&response.body),
            };
        }
    };

    if is_success_status(status) {
        NormalizedResult::Success { status, payload }
    } else {
        NormalizedResult::UpstreamFailure {
            status,
            message: failure_message(&payload).unwrap_or_else(|| generic_failure(status)),
        }
    }
}

fn looks_like_html(trimmed: &str) -> bool {
    let lowered = trimmed
        .chars()
        .take(16)
        .collect::<String>()
        .to_ascii_lowercase();
    HTML_BODY_PREFIXES
        .iter()
        .any(|prefix| lowered.starts_with(prefix))
}

fn is_success_status(status: u16) -> bool {
    (200..=299).contains(&status)
}

fn failure_message(payload: &Value) -> Option<String> {
    ["message", "error"].iter().find_map(|key| {
        payload
            .get(key)
            .and_then(Value::as_str)
            .filter(|s| !s.trim().is_empty())
            .map(str::to_string)
    })
}

fn generic_failure(status: u16) -> String {
    format!("Request failed with status {}", status)
}

/// Bounded, char-boundary-safe prefix of a raw body
fn excerpt(body: &str) -> String {
    body.chars().take(MALFORMED_EXCERPT_CHARS).collect()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn run(status: u16, body: &str) -> NormalizedResult {
        normalize(&RawUpstreamResponse::new(status, body), EmptyBody::Reject)
    }

    #[test]
    fn test_html_is_malformed_for_every_status() {
        let pages = [
            "<!DOCTYPE html><html><body>502 Bad Gateway</body></html>",
            "   \n<html><head></head></html>",
            "<!doctype HTML>",
            "<HTML>",
        ];
        for page in pages {
            for status in [200, 201, 302, 404, 500, 503] {
                assert!(
                    matches!(run(status, page), NormalizedResult::MalformedBody { .. }),
                    "status {} body {:?}",
                    status,
                    page
                );
            }
        }
    }

    #[test]
    fn test_json_success_keeps_exact_payload() {
        let payload = json!({
            "id": 17,
            "title": "Summer Likes",
            "tags": ["instagram", "likes"],
            "nested": {"score": 1.5, "active": true, "owner": null}
        });
        for status in [200, 201, 299] {
            let result = run(status, &payload.to_string());
            assert_eq!(
                result,
                NormalizedResult::Success {
                    status,
                    payload: payload.clone()
                }
            );
        }
    }

    #[test]
    fn test_failure_uses_upstream_message() {
        assert_eq!(
            run(404, r#"{"message":"Contest not found"}"#),
            NormalizedResult::UpstreamFailure {
                status: 404,
                message: "Contest not found".into()
            }
        );
        assert_eq!(
            run(403, r#"{"error":"Forbidden"}"#),
            NormalizedResult::UpstreamFailure {
                status: 403,
                message: "Forbidden".into()
            }
        );
        assert_eq!(
            run(500, r#"{"detail":"boom"}"#),
            NormalizedResult::UpstreamFailure {
                status: 500,
                message: "Request failed with status 500".into()
            }
        );
    }

    #[test]
    fn test_unparseable_body_is_bounded_excerpt() {
        let body = "x".repeat(1000);
        match run(200, &body) {
            NormalizedResult::MalformedBody { excerpt } => {
                assert_eq!(excerpt.len(), MALFORMED_EXCERPT_CHARS)
            }
            other => panic!("unexpected {:?}", other),
        }

        // Multi-byte characters never split
        let body = "é".repeat(500);
        match run(200, &body) {
            NormalizedResult::MalformedBody { excerpt } => {
                assert_eq!(excerpt.chars().count(), MALFORMED_EXCERPT_CHARS)
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_empty_body_depends_on_policy() {
        assert!(matches!(run(200, "  "), NormalizedResult::MalformedBody { .. }));

        let listing =
            |status| normalize(&RawUpstreamResponse::new(status, ""), EmptyBody::Collection);
        assert_eq!(
            listing(200),
            NormalizedResult::Success {
                status: 200,
                payload: json!([])
            }
        );
        assert!(matches!(
            listing(502),
            NormalizedResult::UpstreamFailure { status: 502, .. }
        ));
    }
}
