//! HTTP middleware

pub mod auth;
pub mod logging;

pub use auth::BearerAuth;
pub use logging::logging_middleware;
