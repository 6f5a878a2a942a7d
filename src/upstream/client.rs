//! Upstream HTTP client

use std::time::Duration;

use async_trait::async_trait;
use axum::http::header::AUTHORIZATION;

use super::{OutboundCall, RawUpstreamResponse};

/// Network-level failure (DNS, connection refused, timeout, broken body)
///
/// `message` is short enough to show a caller; `detail` carries the full
/// error chain, including the upstream URL, and is only logged.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct TransportFailure {
    pub message: String,
    pub detail: String,
}

impl TransportFailure {
    pub fn new(message: impl Into<String>) -> Self {
        let message = message.into();
        Self {
            detail: message.clone(),
            message,
        }
    }
}

impl From<reqwest::Error> for TransportFailure {
    fn from(err: reqwest::Error) -> Self {
        let message = short_cause(&err).to_string();

        // reqwest's Display omits the underlying cause ("error sending request")
        let mut detail = err.to_string();
        let mut source = std::error::Error::source(&err);
        while let Some(cause) = source {
            detail.push_str(": ");
            detail.push_str(&cause.to_string());
            source = cause.source();
        }

        Self { message, detail }
    }
}

fn short_cause(err: &reqwest::Error) -> &'static str {
    if err.is_timeout() {
        return "request timed out";
    }
    if err.is_connect() {
        let mut source = std::error::Error::source(err);
        while let Some(cause) = source {
            if let Some(io) = cause.downcast_ref::<std::io::Error>() {
                if io.kind() == std::io::ErrorKind::ConnectionRefused {
                    return "connection refused";
                }
            }
            source = cause.source();
        }
        return "connection failed";
    }
    if err.is_body() || err.is_decode() {
        return "failed to read response body";
    }
    if err.is_redirect() {
        return "too many redirects";
    }
    "request failed"
}

/// Performs exactly one upstream call
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UpstreamClient: Send + Sync {
    async fn execute(&self, call: OutboundCall) -> Result<RawUpstreamResponse, TransportFailure>;
}

/// `reqwest`-backed upstream client
#[derive(Clone)]
pub struct HttpUpstream {
    client: reqwest::Client,
}

impl HttpUpstream {
    /// Create a client; `timeout` of `None` leaves outbound calls unbounded
    pub fn new(timeout: Option<Duration>) -> Result<Self, reqwest::Error> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
        })
    }

    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl UpstreamClient for HttpUpstream {
    async fn execute(&self, call: OutboundCall) -> Result<RawUpstreamResponse, TransportFailure> {
        let mut request = self.client.request(call.method, call.url);

        if let Some(authorization) = call.authorization {
            request = request.header(AUTHORIZATION, authorization);
        }
        if let Some(body) = call.body {
            request = request.json(&body);
        }

        let response = request.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;

        Ok(RawUpstreamResponse { status, body })
    }
}
