//! Authentication handler implementations

use axum::{
    Json,
    body::Bytes,
    extract::State,
    http::{Method, StatusCode},
};

use crate::{
    constants::{messages, probe_status},
    error::AppResult,
    middleware::auth::BearerAuth,
    state::AppState,
    upstream::{EmptyBody, NormalizedResult},
    utils::{now_utc, parse_json_body},
};

use super::response::{ApiStatusResponse, AuthResponse};

/// Log in through the authentication upstream
pub async fn login(
    State(state): State<AppState>,
    body: Bytes,
) -> AppResult<(StatusCode, Json<AuthResponse>)> {
    let credentials = parse_json_body(&body)?;

    let upstream = state.auth();
    let call = upstream
        .call(Method::POST, &["auth", "login"])
        .with_json(credentials);
    let (status, data) = upstream.forward_json(call, EmptyBody::Reject).await?;

    Ok((
        status,
        Json(AuthResponse::new(Some(messages::LOGIN_SUCCESS), data)),
    ))
}

/// Invalidate the caller's upstream session
pub async fn logout(
    State(state): State<AppState>,
    auth: BearerAuth,
) -> AppResult<(StatusCode, Json<AuthResponse>)> {
    let authorization = auth.require()?;

    let upstream = state.auth();
    let call = upstream
        .call(Method::POST, &["auth", "logout"])
        .with_authorization(Some(authorization));
    let (status, data) = upstream.forward_json(call, EmptyBody::Reject).await?;

    Ok((
        status,
        Json(AuthResponse::new(Some(messages::LOGOUT_SUCCESS), data)),
    ))
}

/// Fetch the caller's profile
pub async fn profile(
    State(state): State<AppState>,
    auth: BearerAuth,
) -> AppResult<(StatusCode, Json<AuthResponse>)> {
    let authorization = auth.require()?;

    let upstream = state.auth();
    let call = upstream
        .call(Method::GET, &["auth", "profile"])
        .with_authorization(Some(authorization));
    let (status, data) = upstream.forward_json(call, EmptyBody::Reject).await?;

    Ok((status, Json(AuthResponse::new(None, data))))
}

/// Probe whether the authentication upstream is reachable.
///
/// Always answers 200; the `status` field carries the verdict.
pub async fn api_status(State(state): State<AppState>) -> Json<ApiStatusResponse> {
    let upstream = state.auth();
    let call = upstream.call(Method::GET, &[]).with_cache_buster();
    let result = upstream.forward(call, EmptyBody::Reject).await;

    let (status, message, upstream_status) = match result {
        NormalizedResult::Success { status, .. } => (
            probe_status::ONLINE,
            "API server is reachable".to_string(),
            Some(status),
        ),
        NormalizedResult::UpstreamFailure { status, message } => {
            (probe_status::DEGRADED, message, Some(status))
        }
        NormalizedResult::MalformedBody { .. } => (
            probe_status::DEGRADED,
            "API server returned an unexpected response".to_string(),
            None,
        ),
        NormalizedResult::TransportError { message } => (
            probe_status::OFFLINE,
            format!("Failed to connect to authentication server: {}", message),
            None,
        ),
    };

    Json(ApiStatusResponse {
        success: status == probe_status::ONLINE,
        status,
        message,
        api_url: upstream.base_url().to_string(),
        upstream_status,
        checked_at: now_utc(),
    })
}
