//! Kinship path search handler.

use axum::{
    extract::{Query, State},
    Json,
};
use std::sync::Arc;

use rodnia_core::find_all_paths;

use crate::handlers::helpers::{
    core_error_response, internal_error, missing_parameter, parse_member_id, ApiError,
};
use crate::types::{ErrorResponse, FindPathsParams, PathsResponse};
use crate::AppState;

/// Message returned when either query parameter is absent.
const REQUIRED_PARAMS_MESSAGE: &str = "Both 'from_member_id' and 'to_member_id' are required.";

/// Enumerate every simple path between two members.
///
/// Paths are returned as ordered display names, shortest first. An empty
/// list means the members are stored but unconnected.
///
/// # Errors
///
/// Returns 400 `missing_parameter` or `invalid_parameter` for bad input,
/// 404 `member_not_found` for an unknown endpoint, and 422
/// `traversal_exhausted` when the search hits a configured ceiling.
#[utoipa::path(
    get,
    path = "/find_paths",
    tag = "paths",
    params(FindPathsParams),
    responses(
        (status = 200, description = "Every simple path, shortest first", body = PathsResponse),
        (status = 400, description = "Missing or malformed parameter", body = ErrorResponse),
        (status = 404, description = "Unknown member", body = ErrorResponse),
        (status = 422, description = "Search hit a traversal ceiling", body = ErrorResponse)
    )
)]
pub async fn find_paths(
    State(state): State<Arc<AppState>>,
    Query(params): Query<FindPathsParams>,
) -> Result<Json<PathsResponse>, ApiError> {
    let (Some(from), Some(to)) = (params.from_member_id, params.to_member_id) else {
        return Err(missing_parameter(REQUIRED_PARAMS_MESSAGE));
    };
    let source = parse_member_id(&from)?;
    let target = parse_member_id(&to)?;

    // Exhaustive enumeration can be expensive on dense families; keep it
    // off the async workers.
    let result = tokio::task::spawn_blocking(move || {
        let store = state.store.read();
        find_all_paths(&*store, source, target, &state.limits)
    })
    .await
    .map_err(|e| internal_error("Path search", &e))?;

    let paths = result.map_err(|e| core_error_response(&e))?;
    Ok(Json(PathsResponse { paths }))
}
