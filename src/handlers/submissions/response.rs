//! Submission response DTOs

use serde::Serialize;
use serde_json::Value;

/// Envelope for submission review actions and listings
#[derive(Debug, Serialize)]
pub struct SubmissionResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub data: Value,
}

impl SubmissionResponse {
    pub fn new(message: Option<&str>, data: Value) -> Self {
        Self {
            success: true,
            message: message.map(str::to_string),
            data,
        }
    }
}
