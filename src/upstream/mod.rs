//! Upstream API integration
//!
//! Everything needed to talk to the external contest backend: the HTTP
//! client seam, the response normalizer, the request forwarder and the
//! development fallback policy.

pub mod client;
pub mod fallback;
pub mod forwarder;
pub mod normalizer;

pub use client::{HttpUpstream, TransportFailure, UpstreamClient};
pub use fallback::DevelopmentFallbackPolicy;
pub use forwarder::RequestForwarder;
pub use normalizer::{EmptyBody, NormalizedResult, normalize};

use axum::http::Method;
use reqwest::Url;
use serde_json::Value;

use crate::{constants::CACHE_BUST_PARAM, utils::time::unix_millis};

/// A single outbound request to the upstream API
#[derive(Debug, Clone, PartialEq)]
pub struct OutboundCall {
    pub method: Method,
    pub url: Url,
    /// Inbound `Authorization` header value, passed through verbatim
    pub authorization: Option<String>,
    pub body: Option<Value>,
}

impl OutboundCall {
    pub fn new(method: Method, url: Url) -> Self {
        Self {
            method,
            url,
            authorization: None,
            body: None,
        }
    }

    pub fn with_authorization(mut self, authorization: Option<String>) -> Self {
        self.authorization = authorization;
        self
    }

    pub fn with_json(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Append a timestamp query parameter so caches never serve a stale copy
    pub fn with_cache_buster(mut self) -> Self {
        self.url
            .query_pairs_mut()
            .append_pair(CACHE_BUST_PARAM, &unix_millis().to_string());
        self
    }
}

/// Status and text body of an upstream response, read exactly once
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawUpstreamResponse {
    pub status: u16,
    pub body: String,
}

impl RawUpstreamResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}
