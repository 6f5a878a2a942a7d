//! Utility functions

pub mod performer;
pub mod time;
pub mod validation;

pub use performer::resolve_performer_id;
pub use time::{now_utc, unix_millis};
pub use validation::{parse_json_body, parse_json_object};
