//! Member CRUD handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use rodnia_core::Member;

use crate::handlers::helpers::{
    core_error_response, member_not_found, parse_member_id, validate_display_name, ApiError,
};
use crate::types::{
    CreateMemberRequest, ErrorResponse, MemberResponse, MembersResponse, UpdateMemberRequest,
};
use crate::AppState;

/// List all members, ordered by creation time.
#[utoipa::path(
    get,
    path = "/members",
    tag = "members",
    responses(
        (status = 200, description = "All stored members", body = MembersResponse)
    )
)]
pub async fn list_members(State(state): State<Arc<AppState>>) -> Json<MembersResponse> {
    let store = state.store.read();
    let mut members: Vec<MemberResponse> = store
        .all_members()
        .into_iter()
        .map(MemberResponse::from)
        .collect();
    members.sort_by(|a, b| (a.created_at, a.id).cmp(&(b.created_at, b.id)));
    let count = members.len();
    Json(MembersResponse { members, count })
}

/// Create a member.
///
/// # Errors
///
/// Returns 400 `invalid_parameter` when the display name is blank.
#[utoipa::path(
    post,
    path = "/members",
    tag = "members",
    request_body = CreateMemberRequest,
    responses(
        (status = 201, description = "Member created", body = MemberResponse),
        (status = 400, description = "Invalid display name", body = ErrorResponse)
    )
)]
pub async fn create_member(
    State(state): State<Arc<AppState>>,
    Json(request): Json<CreateMemberRequest>,
) -> Result<(StatusCode, Json<MemberResponse>), ApiError> {
    let display_name = validate_display_name(&request.display_name)?;
    let member = Member::new(&display_name);
    let response = MemberResponse::from(&member);

    state
        .store
        .write()
        .add_member(member)
        .map_err(|e| core_error_response(&e))?;

    Ok((StatusCode::CREATED, Json(response)))
}

/// Fetch one member by id.
///
/// # Errors
///
/// Returns 400 `invalid_parameter` for a malformed id and 404
/// `member_not_found` for an unknown one.
#[utoipa::path(
    get,
    path = "/members/{id}",
    tag = "members",
    params(
        ("id" = String, Path, description = "Member id")
    ),
    responses(
        (status = 200, description = "The member", body = MemberResponse),
        (status = 400, description = "Malformed id", body = ErrorResponse),
        (status = 404, description = "Member not found", body = ErrorResponse)
    )
)]
pub async fn get_member(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<MemberResponse>, ApiError> {
    let id = parse_member_id(&id)?;
    let store = state.store.read();
    let member = store.get_member(id).ok_or_else(|| member_not_found(id))?;
    Ok(Json(MemberResponse::from(member)))
}

/// Rename a member.
///
/// # Errors
///
/// Returns 400 `invalid_parameter` for malformed input and 404
/// `member_not_found` for an unknown id.
#[utoipa::path(
    put,
    path = "/members/{id}",
    tag = "members",
    params(
        ("id" = String, Path, description = "Member id")
    ),
    request_body = UpdateMemberRequest,
    responses(
        (status = 200, description = "Member updated", body = MemberResponse),
        (status = 400, description = "Malformed id or display name", body = ErrorResponse),
        (status = 404, description = "Member not found", body = ErrorResponse)
    )
)]
pub async fn update_member(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(request): Json<UpdateMemberRequest>,
) -> Result<Json<MemberResponse>, ApiError> {
    let id = parse_member_id(&id)?;
    let display_name = validate_display_name(&request.display_name)?;

    let mut store = state.store.write();
    let member = store
        .rename_member(id, &display_name)
        .map_err(|e| core_error_response(&e))?;
    Ok(Json(MemberResponse::from(member)))
}

/// Delete a member and every relationship touching it.
///
/// # Errors
///
/// Returns 400 `invalid_parameter` for a malformed id and 404
/// `member_not_found` for an unknown one.
#[utoipa::path(
    delete,
    path = "/members/{id}",
    tag = "members",
    params(
        ("id" = String, Path, description = "Member id")
    ),
    responses(
        (status = 204, description = "Member and touching relationships deleted"),
        (status = 400, description = "Malformed id", body = ErrorResponse),
        (status = 404, description = "Member not found", body = ErrorResponse)
    )
)]
pub async fn delete_member(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_member_id(&id)?;
    state
        .store
        .write()
        .remove_member(id)
        .map_err(|e| core_error_response(&e))?;
    Ok(StatusCode::NO_CONTENT)
}
