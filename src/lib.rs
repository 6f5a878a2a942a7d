//! Contest Gateway - upstream proxy for the contest platform
//!
//! This library provides the route handlers that sit between the contest
//! admin frontend and the external contest backend.
//!
//! # Features
//!
//! - Login, logout, profile and upstream reachability probe
//! - Contest creation, deletion and lookup by slug
//! - Submission approval, update and per-contest listing
//! - Uniform `{success, message, data}` response envelopes
//!
//! # Architecture
//!
//! The application follows a layered architecture:
//! - **Handlers**: validate input and shape the outward envelope
//! - **Upstream**: forward one request and normalize the upstream answer
//! - **Middleware**: bearer extraction and request logging

pub mod config;
pub mod constants;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod state;
pub mod upstream;
pub mod utils;

#[cfg(test)]
mod test_utils;

use axum::Router;
use tower_http::limit::RequestBodyLimitLayer;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, AppResult};
pub use state::AppState;

/// Build the application router with all routes and request-level middleware
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/api", handlers::routes())
        .layer(axum::middleware::from_fn(middleware::logging_middleware))
        .layer(RequestBodyLimitLayer::new(constants::MAX_REQUEST_BODY_BYTES))
        .with_state(state)
}
