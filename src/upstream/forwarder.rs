//! Request forwarding
//!
//! A `RequestForwarder` is bound to one upstream base URL. It builds
//! outbound calls against that base, executes them through an
//! `UpstreamClient` (one attempt, no retry) and classifies the answer.

use std::sync::Arc;

use axum::http::{Method, StatusCode};
use reqwest::Url;
use serde_json::Value;

use crate::error::{AppError, AppResult};

use super::{
    DevelopmentFallbackPolicy, EmptyBody, NormalizedResult, OutboundCall, UpstreamClient,
    normalize,
};

/// Forwards calls to one upstream base URL
#[derive(Clone)]
pub struct RequestForwarder {
    client: Arc<dyn UpstreamClient>,
    base_url: Url,
    /// Name used in transport error messages ("authentication", "API")
    server: &'static str,
    fallback: DevelopmentFallbackPolicy,
}

impl RequestForwarder {
    pub fn new(client: Arc<dyn UpstreamClient>, base_url: Url, server: &'static str) -> Self {
        Self {
            client,
            base_url,
            server,
            fallback: DevelopmentFallbackPolicy::default(),
        }
    }

    pub fn with_fallback(mut self, fallback: DevelopmentFallbackPolicy) -> Self {
        self.fallback = fallback;
        self
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Start an outbound call; each segment is percent-encoded
    pub fn call(&self, method: Method, segments: &[&str]) -> OutboundCall {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        OutboundCall::new(method, url)
    }

    /// Execute the call and classify the response
    pub async fn forward(&self, call: OutboundCall, empty: EmptyBody) -> NormalizedResult {
        let method = call.method.clone();
        let path = call.url.path().to_string();
        tracing::debug!(
            server = self.server,
            method = %method,
            path = %path,
            authorized = call.authorization.is_some(),
            "Forwarding request upstream"
        );

        let result = match self.client.execute(call).await {
            Ok(response) => normalize(&response, empty),
            Err(failure) => {
                tracing::error!(
                    server = self.server,
                    path = %path,
                    error = %failure.detail,
                    "Upstream unreachable"
                );
                NormalizedResult::TransportError {
                    message: failure.message,
                }
            }
        };

        match &result {
            NormalizedResult::Success { status, .. } => {
                tracing::debug!(
                    server = self.server,
                    path = %path,
                    status,
                    "Upstream succeeded"
                );
            }
            NormalizedResult::UpstreamFailure { status, message } => {
                tracing::info!(
                    server = self.server,
                    path = %path,
                    status,
                    message = %message,
                    "Upstream rejected request"
                );
            }
            NormalizedResult::MalformedBody { excerpt } => {
                tracing::warn!(
                    server = self.server,
                    path = %path,
                    excerpt = %excerpt,
                    "Upstream returned a non-JSON body"
                );
            }
            NormalizedResult::TransportError { .. } => {}
        }

        result
    }

    /// Forward and convert the outcome into the handler-facing result
    pub async fn forward_json(
        &self,
        call: OutboundCall,
        empty: EmptyBody,
    ) -> AppResult<(StatusCode, Value)> {
        let result = self.forward(call, empty).await;
        self.resolve(result)
    }

    /// Forward, letting the development fallback stand in for a malformed body.
    ///
    /// The flag is `true` when the payload was synthesized rather than received.
    pub async fn forward_with_fallback(
        &self,
        call: OutboundCall,
        input: &Value,
    ) -> AppResult<(StatusCode, Value, bool)> {
        let result = self.forward(call, EmptyBody::Reject).await;
        let synthesized =
            self.fallback.is_enabled() && matches!(result, NormalizedResult::MalformedBody { .. });
        let (status, payload) = self.resolve(self.fallback.apply(result, input))?;
        Ok((status, payload, synthesized))
    }

    pub fn resolve(&self, result: NormalizedResult) -> AppResult<(StatusCode, Value)> {
        match result {
            NormalizedResult::Success { status, payload } => {
                Ok((StatusCode::from_u16(status).unwrap_or(StatusCode::OK), payload))
            }
            NormalizedResult::UpstreamFailure { status, message } => {
                Err(AppError::Upstream { status, message })
            }
            NormalizedResult::MalformedBody { excerpt } => {
                Err(AppError::MalformedUpstreamBody(excerpt))
            }
            NormalizedResult::TransportError { message } => Err(AppError::Transport {
                server: self.server,
                message,
            }),
        }
    }
}
