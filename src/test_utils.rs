//! Shared helpers for unit and router tests

use std::sync::Arc;

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Method, Request, StatusCode, header},
};
use reqwest::Url;
use serde_json::Value;
use tower::ServiceExt;

use crate::{
    config::Config,
    state::AppState,
    upstream::{HttpUpstream, RawUpstreamResponse, UpstreamClient, client::MockUpstreamClient},
};

pub const TEST_AUTH_URL: &str = "http://auth.test";
pub const TEST_API_URL: &str = "http://api.test/v1";

/// Raw upstream response with an arbitrary body
pub fn raw(status: u16, body: &str) -> RawUpstreamResponse {
    RawUpstreamResponse::new(status, body)
}

/// Raw upstream response carrying serialized JSON
pub fn ok_json(status: u16, payload: Value) -> RawUpstreamResponse {
    RawUpstreamResponse::new(status, payload.to_string())
}

/// Real HTTP client that ignores proxy settings, for loopback tests
pub fn local_client() -> HttpUpstream {
    let client = reqwest::Client::builder()
        .no_proxy()
        .build()
        .expect("Failed to build test HTTP client");
    HttpUpstream::with_client(client)
}

/// URL of a loopback port that nothing listens on
pub fn closed_port_url() -> Url {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    Url::parse(&format!("http://{}/", addr)).unwrap()
}

/// Configuration pointing at fake upstream hosts
pub fn test_config(environment: &str, auth_url: &str, api_url: &str) -> Config {
    let environment = environment.to_string();
    let auth_url = auth_url.to_string();
    let api_url = api_url.to_string();
    Config::from_lookup(|key| match key {
        "AUTH_API_URL" => Some(auth_url.clone()),
        "CONTEST_API_URL" => Some(api_url.clone()),
        "APP_ENV" => Some(environment.clone()),
        _ => None,
    })
    .expect("Failed to build test configuration")
}

/// Router backed by a mock upstream, in the given environment
pub fn mock_app(mock: MockUpstreamClient, environment: &str) -> Router {
    client_app(
        Arc::new(mock),
        test_config(environment, TEST_AUTH_URL, TEST_API_URL),
    )
}

/// Router backed by an arbitrary upstream client
pub fn client_app(client: Arc<dyn UpstreamClient>, config: Config) -> Router {
    crate::create_router(AppState::new(client, config))
}

/// Build a request with an optional JSON body and bearer token
pub fn json_request(
    method: Method,
    uri: &str,
    body: Option<Value>,
    token: Option<&str>,
) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    let body = match body {
        Some(json) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };
    builder.body(body).unwrap()
}

/// Drive the router once and decode the JSON response
pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}
