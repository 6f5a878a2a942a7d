//! Input validation utilities

use serde_json::{Map, Value};

use crate::{
    constants::messages,
    error::{AppError, AppResult},
};

/// Parse a request body as JSON; an empty body is an empty object
pub fn parse_json_body(body: &[u8]) -> AppResult<Value> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Object(Map::new()));
    }
    serde_json::from_slice(body)
        .map_err(|_| AppError::Validation(messages::INVALID_JSON_BODY.to_string()))
}

/// Parse a request body that must be a JSON object
pub fn parse_json_object(body: &[u8]) -> AppResult<Map<String, Value>> {
    match parse_json_body(body)? {
        Value::Object(fields) => Ok(fields),
        _ => Err(AppError::Validation(messages::INVALID_JSON_BODY.to_string())),
    }
}
