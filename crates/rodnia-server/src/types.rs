//! Request and response types for the Rodnia REST API.

use chrono::{DateTime, Utc};
use rodnia_core::{Member, MemberId, Relationship, RelationshipId};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Error payload returned by every failing endpoint.
///
/// `kind` is a stable machine-readable discriminant; `error` is the human
/// readable message.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Machine-readable error class, e.g. `member_not_found`.
    pub kind: String,
    /// Human-readable message.
    pub error: String,
}

/// A member as returned by the API.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MemberResponse {
    /// Member id.
    #[schema(value_type = Uuid)]
    pub id: MemberId,
    /// Display name.
    pub display_name: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last-modification timestamp.
    pub updated_at: DateTime<Utc>,
}

impl From<&Member> for MemberResponse {
    fn from(member: &Member) -> Self {
        Self {
            id: member.id(),
            display_name: member.display_name().to_string(),
            created_at: member.created_at(),
            updated_at: member.updated_at(),
        }
    }
}

/// Body for `POST /members`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateMemberRequest {
    /// Display name of the new member.
    pub display_name: String,
}

/// Body for `PUT /members/{id}`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UpdateMemberRequest {
    /// Replacement display name.
    pub display_name: String,
}

/// Response for `GET /members`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MembersResponse {
    /// Members ordered by creation time.
    pub members: Vec<MemberResponse>,
    /// Number of members returned.
    pub count: usize,
}

/// A relationship as returned by the API.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RelationshipResponse {
    /// Relationship id.
    #[schema(value_type = Uuid)]
    pub id: RelationshipId,
    /// Relation kind wire name (`PARENT`, `CHILD`, `SPOUSE`).
    pub kind: String,
    /// Source member id.
    #[schema(value_type = Uuid)]
    pub from_member_id: MemberId,
    /// Destination member id.
    #[schema(value_type = Uuid)]
    pub to_member_id: MemberId,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last-modification timestamp.
    pub updated_at: DateTime<Utc>,
}

impl From<&Relationship> for RelationshipResponse {
    fn from(relationship: &Relationship) -> Self {
        Self {
            id: relationship.id(),
            kind: relationship.kind().as_str().to_string(),
            from_member_id: relationship.from(),
            to_member_id: relationship.to(),
            created_at: relationship.created_at(),
            updated_at: relationship.updated_at(),
        }
    }
}

/// Body for `POST /relationships`.
///
/// Ids and kind arrive as strings and are validated by the handler so that
/// malformed input yields a structured 400 instead of a bare rejection.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateRelationshipRequest {
    /// Source member id.
    pub from_member_id: String,
    /// Destination member id.
    pub to_member_id: String,
    /// Relation kind wire name (`PARENT`, `CHILD`, `SPOUSE`).
    pub kind: String,
}

/// Response for `GET /relationships`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RelationshipsResponse {
    /// Relationships ordered by creation time.
    pub relationships: Vec<RelationshipResponse>,
    /// Number of relationships returned.
    pub count: usize,
}

/// Query parameters for `GET /find_paths`.
#[derive(Debug, Deserialize, IntoParams)]
pub struct FindPathsParams {
    /// Id of the member paths start from.
    pub from_member_id: Option<String>,
    /// Id of the member paths lead to.
    pub to_member_id: Option<String>,
}

/// Response for `GET /find_paths`: every simple path as ordered display
/// names, shortest first.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PathsResponse {
    /// Each path is source-to-target display names.
    pub paths: Vec<Vec<String>>,
}

/// Response for `GET /health`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Always `"ok"` when the server is up.
    pub status: String,
    /// Server version.
    pub version: String,
}
