//! Bearer token extraction
//!
//! Tokens are issued and verified by the upstream authentication service;
//! this layer only checks that one was supplied and passes it through.

use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};
use tracing::debug;

use crate::error::{AppError, AppResult};

const BEARER_PREFIX: &str = "Bearer ";

/// `Authorization: Bearer <token>` header, if the request carried one
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BearerAuth(Option<String>);

impl BearerAuth {
    /// Parse a raw header value; anything but a non-empty bearer token is ignored
    pub fn from_header(value: Option<&str>) -> Self {
        let header = value
            .filter(|v| v.starts_with(BEARER_PREFIX))
            .filter(|v| !v[BEARER_PREFIX.len()..].trim().is_empty())
            .map(str::to_string);
        Self(header)
    }

    /// Header value for optional passthrough
    pub fn header(&self) -> Option<String> {
        self.0.clone()
    }

    /// Token without the `Bearer ` prefix
    pub fn token(&self) -> Option<&str> {
        self.0.as_deref().map(|v| &v[BEARER_PREFIX.len()..])
    }

    /// Header value for operations that require authentication
    pub fn require(self) -> AppResult<String> {
        self.0.ok_or(AppError::Unauthorized)
    }
}

impl<S> FromRequestParts<S> for BearerAuth
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let raw = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|h| h.to_str().ok());

        let auth = BearerAuth::from_header(raw);
        if raw.is_some() && auth.0.is_none() {
            debug!(
                path = %parts.uri.path(),
                "Ignoring Authorization header (expected 'Bearer <token>')"
            );
        }

        Ok(auth)
    }
}
