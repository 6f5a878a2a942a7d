//! Submission handler implementations

use axum::{
    Json,
    body::Bytes,
    extract::{Path, State},
    http::{Method, StatusCode},
};
use serde_json::Value;

use crate::{
    constants::{UPSTREAM_PERFORMER_FIELD, messages},
    error::{AppError, AppResult},
    middleware::auth::BearerAuth,
    state::AppState,
    upstream::EmptyBody,
    utils::{parse_json_object, resolve_performer_id},
};

use super::response::SubmissionResponse;

/// Inbound fields with the resolved performer set under its upstream name
fn review_payload(body: &[u8]) -> AppResult<Value> {
    let mut fields = parse_json_object(body)?;
    let performer = resolve_performer_id(&fields)
        .ok_or_else(|| AppError::Validation(messages::MISSING_PERFORMER_ID.to_string()))?;
    fields.insert(UPSTREAM_PERFORMER_FIELD.to_string(), Value::String(performer));
    Ok(Value::Object(fields))
}

/// Approve a submission
pub async fn approve_submission(
    State(state): State<AppState>,
    Path(id): Path<String>,
    auth: BearerAuth,
    body: Bytes,
) -> AppResult<(StatusCode, Json<SubmissionResponse>)> {
    let payload = review_payload(&body)?;
    let authorization = auth.require()?;

    let upstream = state.api();
    let call = upstream
        .call(Method::POST, &["submissions", id.as_str(), "approve"])
        .with_authorization(Some(authorization))
        .with_json(payload);
    let (status, data) = upstream.forward_json(call, EmptyBody::Reject).await?;

    Ok((
        status,
        Json(SubmissionResponse::new(
            Some(messages::SUBMISSION_APPROVED),
            data,
        )),
    ))
}

/// Update a submission (status, score, reviewer notes)
pub async fn update_submission(
    State(state): State<AppState>,
    Path(id): Path<String>,
    auth: BearerAuth,
    body: Bytes,
) -> AppResult<(StatusCode, Json<SubmissionResponse>)> {
    let payload = review_payload(&body)?;
    let authorization = auth.require()?;

    let upstream = state.api();
    let call = upstream
        .call(Method::PUT, &["submissions", id.as_str()])
        .with_authorization(Some(authorization))
        .with_json(payload);
    let (status, data) = upstream.forward_json(call, EmptyBody::Reject).await?;

    Ok((
        status,
        Json(SubmissionResponse::new(
            Some(messages::SUBMISSION_UPDATED),
            data,
        )),
    ))
}

/// List every submission of a contest; an empty upstream body is an empty list
pub async fn list_contest_submissions(
    State(state): State<AppState>,
    Path(id): Path<String>,
    auth: BearerAuth,
) -> AppResult<(StatusCode, Json<SubmissionResponse>)> {
    let authorization = auth.require()?;

    let upstream = state.api();
    let call = upstream
        .call(Method::GET, &["submissions", "contest", id.as_str()])
        .with_authorization(Some(authorization));
    let (status, data) = upstream.forward_json(call, EmptyBody::Collection).await?;

    Ok((status, Json(SubmissionResponse::new(None, data))))
}
