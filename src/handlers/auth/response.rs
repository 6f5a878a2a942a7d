//! Authentication response DTOs

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

/// Envelope for login, logout and profile
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub data: Value,
}

impl AuthResponse {
    pub fn new(message: Option<&str>, data: Value) -> Self {
        Self {
            success: true,
            message: message.map(str::to_string),
            data,
        }
    }
}

/// Upstream reachability probe result
#[derive(Debug, Serialize)]
pub struct ApiStatusResponse {
    pub success: bool,
    /// online, degraded or offline
    pub status: &'static str,
    pub message: String,
    pub api_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upstream_status: Option<u16>,
    pub checked_at: DateTime<Utc>,
}
