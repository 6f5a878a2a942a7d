//! Time utilities

use chrono::{DateTime, Utc};

/// Get current UTC time
pub fn now_utc() -> DateTime<Utc> {
    Utc::now()
}

/// Milliseconds since the Unix epoch
pub fn unix_millis() -> i64 {
    now_utc().timestamp_millis()
}
