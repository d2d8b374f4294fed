//! Shared handler helpers for the Rodnia REST API.
//!
//! Centralizes id parsing, input validation, and the mapping from core
//! errors to HTTP responses so every handler reports failures the same way.

use axum::{http::StatusCode, Json};
use rodnia_core::{Error as CoreError, MemberId, RelationshipId};

use crate::types::ErrorResponse;

/// Rejection tuple shared by all handlers.
pub type ApiError = (StatusCode, Json<ErrorResponse>);

/// Build a 400 response with kind `invalid_parameter`.
pub fn invalid_parameter(message: impl Into<String>) -> ApiError {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            kind: "invalid_parameter".to_string(),
            error: message.into(),
        }),
    )
}

/// Build a 400 response with kind `missing_parameter`.
pub fn missing_parameter(message: impl Into<String>) -> ApiError {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            kind: "missing_parameter".to_string(),
            error: message.into(),
        }),
    )
}

/// Parse a member id or return a structured 400.
///
/// # Errors
///
/// Returns `(400, invalid_parameter)` when the value is not a UUID.
pub fn parse_member_id(value: &str) -> Result<MemberId, ApiError> {
    value
        .parse::<MemberId>()
        .map_err(|_| invalid_parameter(format!("Invalid member id '{value}': expected a UUID")))
}

/// Parse a relationship id or return a structured 400.
///
/// # Errors
///
/// Returns `(400, invalid_parameter)` when the value is not a UUID.
pub fn parse_relationship_id(value: &str) -> Result<RelationshipId, ApiError> {
    value.parse::<RelationshipId>().map_err(|_| {
        invalid_parameter(format!("Invalid relationship id '{value}': expected a UUID"))
    })
}

/// Validate and normalize a display name.
///
/// # Errors
///
/// Returns `(400, invalid_parameter)` when the trimmed name is empty.
pub fn validate_display_name(value: &str) -> Result<String, ApiError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(invalid_parameter("display_name must not be empty"));
    }
    Ok(trimmed.to_string())
}

/// Build the 404 returned whenever a member id is not stored.
pub fn member_not_found(id: MemberId) -> ApiError {
    core_error_response(&CoreError::UnknownMember(id))
}

/// Map a core error to its HTTP response.
///
/// Unknown ids map to 404, ceiling aborts to 422, invalid kinds to 400.
/// Duplicate-id errors cannot arise from handler-generated ids and map to a
/// generic 500.
pub fn core_error_response(error: &CoreError) -> ApiError {
    match error {
        CoreError::UnknownMember(id) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                kind: "member_not_found".to_string(),
                error: format!("Member with id '{id}' does not exist."),
            }),
        ),
        CoreError::UnknownRelationship(id) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                kind: "relationship_not_found".to_string(),
                error: format!("Relationship with id '{id}' does not exist."),
            }),
        ),
        CoreError::TraversalExhausted { .. } => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ErrorResponse {
                kind: "traversal_exhausted".to_string(),
                error: error.to_string(),
            }),
        ),
        CoreError::InvalidRelationKind(_) => invalid_parameter(error.to_string()),
        CoreError::MemberExists(_) | CoreError::RelationshipExists(_) => {
            internal_error("Store write", error)
        }
    }
}

/// Build an internal server error response without leaking implementation
/// details.
///
/// Logs the full error server-side via `tracing::error!` and returns a
/// generic message to the client.
pub fn internal_error(context: &str, err: &dyn std::fmt::Display) -> ApiError {
    tracing::error!(%context, error = %err, "Internal server error");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            kind: "internal".to_string(),
            error: format!("{context}: internal error"),
        }),
    )
}
