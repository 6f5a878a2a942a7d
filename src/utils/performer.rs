//! Performer identity resolution
//!
//! Mutating contest and submission operations must name who performed
//! them. Callers disagree on the field name, so a fixed list of aliases is
//! consulted in priority order (see `PERFORMER_ID_FIELDS`).

use serde_json::{Map, Value};

use crate::constants::PERFORMER_ID_FIELDS;

/// First non-empty performer id among the accepted aliases
pub fn resolve_performer_id(fields: &Map<String, Value>) -> Option<String> {
    PERFORMER_ID_FIELDS
        .iter()
        .find_map(|key| fields.get(*key).and_then(non_empty_id))
}

fn non_empty_id(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
