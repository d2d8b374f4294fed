//! Relationship handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use rodnia_core::{RelationKind, Relationship};

use crate::handlers::helpers::{
    core_error_response, invalid_parameter, parse_member_id, parse_relationship_id, ApiError,
};
use crate::types::{
    CreateRelationshipRequest, ErrorResponse, RelationshipResponse, RelationshipsResponse,
};
use crate::AppState;

/// List all relationships, ordered by creation time.
#[utoipa::path(
    get,
    path = "/relationships",
    tag = "relationships",
    responses(
        (status = 200, description = "All stored relationships", body = RelationshipsResponse)
    )
)]
pub async fn list_relationships(State(state): State<Arc<AppState>>) -> Json<RelationshipsResponse> {
    let store = state.store.read();
    let mut relationships: Vec<RelationshipResponse> = store
        .all_relationships()
        .into_iter()
        .map(RelationshipResponse::from)
        .collect();
    relationships.sort_by(|a, b| (a.created_at, a.id).cmp(&(b.created_at, b.id)));
    let count = relationships.len();
    Json(RelationshipsResponse {
        relationships,
        count,
    })
}

/// Create a relationship between two stored members.
///
/// Parallel relationships and edges in both directions are permitted; a
/// symmetric bond is modeled as one edge per direction.
///
/// # Errors
///
/// Returns 400 `invalid_parameter` for malformed ids or an unknown kind,
/// and 404 `member_not_found` when an endpoint is not stored.
#[utoipa::path(
    post,
    path = "/relationships",
    tag = "relationships",
    request_body = CreateRelationshipRequest,
    responses(
        (status = 201, description = "Relationship created", body = RelationshipResponse),
        (status = 400, description = "Malformed id or unknown kind", body = ErrorResponse),
        (status = 404, description = "Endpoint member not found", body = ErrorResponse)
    )
)]
pub async fn create_relationship(
    State(state): State<Arc<AppState>>,
    Json(request): Json<CreateRelationshipRequest>,
) -> Result<(StatusCode, Json<RelationshipResponse>), ApiError> {
    let from = parse_member_id(&request.from_member_id)?;
    let to = parse_member_id(&request.to_member_id)?;
    let kind: RelationKind = request
        .kind
        .parse()
        .map_err(|e: rodnia_core::Error| invalid_parameter(e.to_string()))?;

    let relationship = Relationship::new(kind, from, to);
    let response = RelationshipResponse::from(&relationship);

    state
        .store
        .write()
        .add_relationship(relationship)
        .map_err(|e| core_error_response(&e))?;

    Ok((StatusCode::CREATED, Json(response)))
}

/// Delete a relationship by id.
///
/// # Errors
///
/// Returns 400 `invalid_parameter` for a malformed id and 404
/// `relationship_not_found` for an unknown one.
#[utoipa::path(
    delete,
    path = "/relationships/{id}",
    tag = "relationships",
    params(
        ("id" = String, Path, description = "Relationship id")
    ),
    responses(
        (status = 204, description = "Relationship deleted"),
        (status = 400, description = "Malformed id", body = ErrorResponse),
        (status = 404, description = "Relationship not found", body = ErrorResponse)
    )
)]
pub async fn delete_relationship(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_relationship_id(&id)?;
    state
        .store
        .write()
        .remove_relationship(id)
        .map_err(|e| core_error_response(&e))?;
    Ok(StatusCode::NO_CONTENT)
}
