//! Error types for the Rodnia family graph engine.

use thiserror::Error;

use crate::types::{MemberId, RelationshipId};

/// Errors produced by the family store and the path finder.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A member with this id is already stored.
    #[error("member '{0}' already exists")]
    MemberExists(MemberId),

    /// A referenced member id does not exist in the graph.
    #[error("member '{0}' does not exist")]
    UnknownMember(MemberId),

    /// A relationship with this id is already stored.
    #[error("relationship '{0}' already exists")]
    RelationshipExists(RelationshipId),

    /// A referenced relationship id does not exist.
    #[error("relationship '{0}' does not exist")]
    UnknownRelationship(RelationshipId),

    /// A relation kind string did not name a known kind.
    #[error("invalid relation kind '{0}'. Valid kinds: PARENT, CHILD, SPOUSE")]
    InvalidRelationKind(String),

    /// A path search hit a configured ceiling before it could complete.
    ///
    /// Distinct from an empty result: the caller cannot tell whether paths
    /// beyond the ceiling exist, so no partial result is returned.
    #[error("path search exhausted: {reason}")]
    TraversalExhausted {
        /// The ceiling that tripped.
        reason: ExhaustionReason,
    },
}

/// The ceiling that aborted a path search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExhaustionReason {
    /// Extending a partial path would have exceeded this many edges.
    DepthCeiling(usize),
    /// More complete paths exist than this collection maximum.
    PathCeiling(usize),
}

impl std::fmt::Display for ExhaustionReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DepthCeiling(max) => {
                write!(f, "a path exceeded the maximum depth of {max} edges")
            }
            Self::PathCeiling(max) => write!(f, "path count exceeds the maximum of {max}"),
        }
    }
}

/// Result type alias for Rodnia operations.
pub type Result<T> = std::result::Result<T, Error>;
