//! Shared helpers for server integration tests.

#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use parking_lot::RwLock;
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

use rodnia_core::{FamilyStore, TraversalLimits};
use rodnia_server::{build_router, AppState};

/// App with default search ceilings and no authentication.
pub fn test_app() -> Router {
    test_app_with(None, TraversalLimits::default())
}

/// App with an explicit API key and search ceilings.
pub fn test_app_with(api_key: Option<&str>, limits: TraversalLimits) -> Router {
    let state = Arc::new(AppState {
        store: RwLock::new(FamilyStore::new()),
        limits,
        api_key: api_key.map(String::from),
    });
    build_router(state)
}

/// Send a request with an optional JSON body, returning status and parsed
/// response body (`Null` for empty bodies).
pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };
    let request = builder.body(body).expect("Failed to build request");

    let response = app.clone().oneshot(request).await.expect("Request failed");

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("Invalid JSON body")
    };
    (status, json)
}

/// Create a member via the API, returning its id.
pub async fn create_member(app: &Router, display_name: &str) -> String {
    let (status, body) = send(
        app,
        Method::POST,
        "/members",
        Some(serde_json::json!({ "display_name": display_name })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body["id"].as_str().expect("member id").to_string()
}

/// Create a relationship via the API, returning its id.
pub async fn create_relationship(app: &Router, kind: &str, from: &str, to: &str) -> String {
    let (status, body) = send(
        app,
        Method::POST,
        "/relationships",
        Some(serde_json::json!({
            "from_member_id": from,
            "to_member_id": to,
            "kind": kind,
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body["id"].as_str().expect("relationship id").to_string()
}
