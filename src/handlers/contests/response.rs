//! Contest response DTOs

use serde::Serialize;
use serde_json::Value;

/// Contest creation envelope
#[derive(Debug, Serialize)]
pub struct ContestCreatedResponse {
    pub success: bool,
    pub message: String,
    pub data: Value,
}

/// Contest deletion envelope; the upstream answer is passed back as `apiResponse`
#[derive(Debug, Serialize)]
pub struct ContestDeletedResponse {
    pub success: bool,
    pub message: String,
    #[serde(rename = "apiResponse")]
    pub api_response: Value,
}

/// Contest lookup envelope
#[derive(Debug, Serialize)]
pub struct ContestLookupResponse {
    pub success: bool,
    pub contest: Value,
}
