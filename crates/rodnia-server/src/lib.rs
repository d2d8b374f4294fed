//! Rodnia server library: the HTTP layer over `rodnia-core`.
//!
//! All graph semantics live in the core crate; handlers here parse input,
//! hold the store lock, and map core errors to HTTP responses.

use std::sync::Arc;

use axum::{
    routing::{delete, get},
    Router,
};
use parking_lot::RwLock;
use utoipa::OpenApi;

use rodnia_core::{FamilyStore, TraversalLimits};

pub mod handlers;
pub mod middleware;
pub mod types;

pub use handlers::{
    create_member, create_relationship, delete_member, delete_relationship, find_paths,
    get_member, health_check, list_members, list_relationships, update_member,
};
pub use middleware::auth_middleware;

/// Shared application state.
pub struct AppState {
    /// The family graph. A single writer lock is enough: writes are tiny
    /// map operations, and path searches take the read side.
    pub store: RwLock<FamilyStore>,
    /// Search ceilings applied to every `/find_paths` request.
    pub limits: TraversalLimits,
    /// Optional API key; `None` disables authentication (dev mode).
    pub api_key: Option<String>,
}

/// OpenAPI documentation for the REST API.
#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::health::health_check,
        handlers::members::list_members,
        handlers::members::create_member,
        handlers::members::get_member,
        handlers::members::update_member,
        handlers::members::delete_member,
        handlers::relationships::list_relationships,
        handlers::relationships::create_relationship,
        handlers::relationships::delete_relationship,
        handlers::paths::find_paths,
    ),
    components(schemas(
        types::ErrorResponse,
        types::HealthResponse,
        types::MemberResponse,
        types::CreateMemberRequest,
        types::UpdateMemberRequest,
        types::MembersResponse,
        types::RelationshipResponse,
        types::CreateRelationshipRequest,
        types::RelationshipsResponse,
        types::PathsResponse,
    )),
    tags(
        (name = "health", description = "Liveness probe"),
        (name = "members", description = "Member CRUD"),
        (name = "relationships", description = "Typed directed relationships"),
        (name = "paths", description = "Exhaustive kinship path search")
    )
)]
pub struct ApiDoc;

/// Build the application router: every API route plus the health probe,
/// with the authentication middleware applied.
///
/// CORS and request tracing are layered on by the binary; tests drive this
/// router directly.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/members", get(list_members).post(create_member))
        .route(
            "/members/{id}",
            get(get_member).put(update_member).delete(delete_member),
        )
        .route(
            "/relationships",
            get(list_relationships).post(create_relationship),
        )
        .route("/relationships/{id}", delete(delete_relationship))
        .route("/find_paths", get(find_paths))
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ))
        .with_state(state)
}
