//! Application state management
//!
//! This module contains the shared application state that is passed
//! to all request handlers via Axum's State extractor.

use std::sync::Arc;

use crate::{
    config::Config,
    constants::{API_SERVER_LABEL, AUTH_SERVER_LABEL},
    upstream::{DevelopmentFallbackPolicy, RequestForwarder, UpstreamClient},
};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

/// Inner state (wrapped in Arc for cheap cloning)
struct AppStateInner {
    /// Forwarder for the authentication upstream
    auth: RequestForwarder,

    /// Forwarder for the contest and submission upstream
    api: RequestForwarder,

    /// Application configuration
    config: Config,
}

impl AppState {
    /// Create application state sharing one upstream client between both forwarders
    pub fn new(client: Arc<dyn UpstreamClient>, config: Config) -> Self {
        let fallback =
            DevelopmentFallbackPolicy::for_production(config.environment.is_production());

        let auth = RequestForwarder::new(
            client.clone(),
            config.upstream.auth_api_url.clone(),
            AUTH_SERVER_LABEL,
        );
        let api = RequestForwarder::new(
            client,
            config.upstream.contest_api_url.clone(),
            API_SERVER_LABEL,
        )
        .with_fallback(fallback);

        Self {
            inner: Arc::new(AppStateInner { auth, api, config }),
        }
    }

    /// Get the authentication upstream forwarder
    pub fn auth(&self) -> &RequestForwarder {
        &self.inner.auth
    }

    /// Get the contest upstream forwarder
    pub fn api(&self) -> &RequestForwarder {
        &self.inner.api
    }

    /// Get a reference to the configuration
    pub fn config(&self) -> &Config {
        &self.inner.config
    }
}
