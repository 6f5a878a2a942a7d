//! Submission review handlers

mod handler;
pub mod response;

pub use handler::*;
pub use response::*;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Submission routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/{id}/approve", post(handler::approve_submission))
        .route("/{id}/update", post(handler::update_submission))
        .route("/contest/{id}", get(handler::list_contest_submissions))
}
