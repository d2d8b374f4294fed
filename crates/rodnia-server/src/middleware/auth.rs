//! API key authentication middleware.
//!
//! When `RODNIA_API_KEY` is set, all endpoints except `/health` and the API
//! docs require `Authorization: Bearer <key>`. When unset, the server runs
//! in dev mode and every request passes through.

use axum::{
    body::Body,
    extract::{Request, State},
    http::{header, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;

use crate::types::ErrorResponse;
use crate::AppState;

/// Constant-time byte comparison to prevent timing attacks.
///
/// Returns `true` if both slices are equal, using a fixed-time algorithm
/// that does NOT short-circuit on the first mismatch.
fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    // XOR accumulator; a non-zero result means at least one byte differed.
    let mut diff: u8 = 0;
    for (x, y) in a.iter().zip(b.iter()) {
        diff |= x ^ y;
    }
    diff == 0
}

/// Axum middleware: validate the API key from `Authorization: Bearer <key>`.
///
/// - If `AppState.api_key` is `None`, dev mode, pass through.
/// - If the request path is exempt (health, docs), pass through.
/// - Otherwise validate the Bearer token with constant-time comparison.
pub async fn auth_middleware(
    State(state): State<Arc<AppState>>,
    request: Request<Body>,
    next: Next,
) -> Response {
    let Some(expected_key) = &state.api_key else {
        return next.run(request).await;
    };

    let path = request.uri().path();
    if path == "/health" || path.starts_with("/swagger-ui") || path.starts_with("/api-docs") {
        return next.run(request).await;
    }

    let auth_header = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok());

    let token = match auth_header {
        Some(h) if h.starts_with("Bearer ") => &h[7..],
        _ => {
            return (
                StatusCode::UNAUTHORIZED,
                Json(ErrorResponse {
                    kind: "unauthorized".to_string(),
                    error: "Missing or malformed Authorization header. Expected: Bearer <api_key>"
                        .to_string(),
                }),
            )
                .into_response();
        }
    };

    if !constant_time_eq(token.as_bytes(), expected_key.as_bytes()) {
        return (
            StatusCode::UNAUTHORIZED,
            Json(ErrorResponse {
                kind: "unauthorized".to_string(),
                error: "Invalid API key".to_string(),
            }),
        )
            .into_response();
    }

    next.run(request).await
}
