//! Contest management handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Contest routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/create", post(handler::create_contest))
        .route("/by-slug/{slug}", get(handler::get_contest_by_slug))
        .route("/{id}/delete", post(handler::delete_contest))
}
