//! Contest handler implementations

use axum::{
    Json,
    body::Bytes,
    extract::{Path, State},
    http::{Method, StatusCode},
};
use serde_json::{Map, Value};
use validator::Validate;

use crate::{
    constants::{UPSTREAM_PERFORMER_FIELD, messages},
    error::{AppError, AppResult},
    middleware::auth::BearerAuth,
    state::AppState,
    upstream::EmptyBody,
    utils::{parse_json_body, parse_json_object, resolve_performer_id},
};

use super::{
    request::CreateContestRequest,
    response::{ContestCreatedResponse, ContestDeletedResponse, ContestLookupResponse},
};

/// Create a new contest
pub async fn create_contest(
    State(state): State<AppState>,
    auth: BearerAuth,
    body: Bytes,
) -> AppResult<(StatusCode, Json<ContestCreatedResponse>)> {
    let input = parse_json_body(&body)?;

    // A required field of the wrong type counts as missing
    let request: CreateContestRequest = serde_json::from_value(input.clone())
        .map_err(|_| AppError::Validation(messages::MISSING_REQUIRED_FIELDS.to_string()))?;
    request
        .validate()
        .map_err(|_| AppError::Validation(messages::MISSING_REQUIRED_FIELDS.to_string()))?;

    let upstream = state.api();
    let call = upstream
        .call(Method::POST, &["contests"])
        .with_authorization(auth.header())
        .with_json(input.clone());
    let (status, data, synthesized) = upstream.forward_with_fallback(call, &input).await?;

    let message = if synthesized {
        messages::CONTEST_CREATED_FALLBACK
    } else {
        messages::CONTEST_CREATED
    };

    Ok((
        status,
        Json(ContestCreatedResponse {
            success: true,
            message: message.to_string(),
            data,
        }),
    ))
}

/// Delete a contest on behalf of a performer
pub async fn delete_contest(
    State(state): State<AppState>,
    Path(id): Path<String>,
    auth: BearerAuth,
    body: Bytes,
) -> AppResult<(StatusCode, Json<ContestDeletedResponse>)> {
    let fields = parse_json_object(&body)?;
    let performer = resolve_performer_id(&fields)
        .ok_or_else(|| AppError::Validation(messages::MISSING_PERFORMER_ID.to_string()))?;
    let authorization = auth.require()?;

    let mut payload = Map::new();
    payload.insert(UPSTREAM_PERFORMER_FIELD.to_string(), Value::String(performer));

    let upstream = state.api();
    let call = upstream
        .call(Method::DELETE, &["contests", id.as_str()])
        .with_authorization(Some(authorization))
        .with_json(Value::Object(payload));
    let (status, api_response) = upstream.forward_json(call, EmptyBody::Reject).await?;

    Ok((
        status,
        Json(ContestDeletedResponse {
            success: true,
            message: messages::CONTEST_DELETED.to_string(),
            api_response,
        }),
    ))
}

/// Fetch a contest by its public slug, bypassing caches
pub async fn get_contest_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<(StatusCode, Json<ContestLookupResponse>)> {
    let upstream = state.api();
    let call = upstream
        .call(Method::GET, &["contests", "slug", slug.as_str()])
        .with_cache_buster();
    let (status, contest) = upstream.forward_json(call, EmptyBody::Reject).await?;

    Ok((
        status,
        Json(ContestLookupResponse {
            success: true,
            contest,
        }),
    ))
}
