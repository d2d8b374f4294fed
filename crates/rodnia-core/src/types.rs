//! Domain types for the family graph: members and the typed, directed
//! relationships connecting them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::error::Error;

/// Identifier of a member (a person node in the graph).
pub type MemberId = Uuid;

/// Identifier of a relationship (a directed edge in the graph).
pub type RelationshipId = Uuid;

/// A person in the family graph.
///
/// Identity is the opaque `id`; the display name carries no uniqueness
/// guarantee and may repeat across members.
///
/// # Example
///
/// ```rust
/// use rodnia_core::Member;
///
/// let member = Member::new("Ana Petrova");
/// assert_eq!(member.display_name(), "Ana Petrova");
/// assert_eq!(member.created_at(), member.updated_at());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Member {
    id: MemberId,
    display_name: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Member {
    /// Creates a member with a fresh random id and current timestamps.
    #[must_use]
    pub fn new(display_name: &str) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            display_name: display_name.to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Returns the member id.
    #[must_use]
    pub fn id(&self) -> MemberId {
        self.id
    }

    /// Returns the display name.
    #[must_use]
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the last-modification timestamp.
    #[must_use]
    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Replaces the display name and bumps `updated_at`.
    pub fn rename(&mut self, display_name: &str) {
        self.display_name = display_name.to_string();
        self.updated_at = Utc::now();
    }
}

/// The kind of a directed relationship between two members.
///
/// Wire form is SCREAMING_SNAKE_CASE (`"PARENT"`, `"CHILD"`, `"SPOUSE"`).
/// Every kind is traversed in its stored direction only; a symmetric bond
/// such as marriage is modeled by storing one edge per direction.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RelationKind {
    /// The source member is a parent of the destination.
    Parent,
    /// The source member is a child of the destination.
    Child,
    /// The source member is a spouse of the destination.
    Spouse,
}

impl RelationKind {
    /// Returns the canonical wire name of this kind.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Parent => "PARENT",
            Self::Child => "CHILD",
            Self::Spouse => "SPOUSE",
        }
    }
}

impl fmt::Display for RelationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RelationKind {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "PARENT" => Ok(Self::Parent),
            "CHILD" => Ok(Self::Child),
            "SPOUSE" => Ok(Self::Spouse),
            other => Err(Error::InvalidRelationKind(other.to_string())),
        }
    }
}

/// A directed, typed edge connecting two members.
///
/// Multiple relationships between the same ordered pair are permitted, as
/// are edges in both directions between two members.
///
/// # Example
///
/// ```rust
/// use rodnia_core::{Member, RelationKind, Relationship};
///
/// let ana = Member::new("Ana");
/// let boris = Member::new("Boris");
/// let bond = Relationship::new(RelationKind::Parent, ana.id(), boris.id());
/// assert_eq!(bond.from(), ana.id());
/// assert_eq!(bond.to(), boris.id());
/// assert_eq!(bond.kind(), RelationKind::Parent);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Relationship {
    id: RelationshipId,
    kind: RelationKind,
    from: MemberId,
    to: MemberId,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Relationship {
    /// Creates a relationship with a fresh random id and current timestamps.
    #[must_use]
    pub fn new(kind: RelationKind, from: MemberId, to: MemberId) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            kind,
            from,
            to,
            created_at: now,
            updated_at: now,
        }
    }

    /// Returns the relationship id.
    #[must_use]
    pub fn id(&self) -> RelationshipId {
        self.id
    }

    /// Returns the relation kind.
    #[must_use]
    pub fn kind(&self) -> RelationKind {
        self.kind
    }

    /// Returns the source member id.
    #[must_use]
    pub fn from(&self) -> MemberId {
        self.from
    }

    /// Returns the destination member id.
    #[must_use]
    pub fn to(&self) -> MemberId {
        self.to
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the last-modification timestamp.
    #[must_use]
    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}
