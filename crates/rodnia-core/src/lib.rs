//! # Rodnia Core
//!
//! Family relationship graph engine: members, typed directed relationships,
//! and exhaustive simple-path search between two members.
//!
//! A path is a sequence of members linked pairwise by relationships, with no
//! member repeated. [`find_all_paths`] enumerates every such path between
//! two members in breadth-first order, shortest first, bounded by
//! [`TraversalLimits`].
//!
//! ## Quick start
//!
//! ```rust
//! use rodnia_core::{
//!     find_all_paths, FamilyStore, Member, RelationKind, Relationship, TraversalLimits,
//! };
//!
//! fn main() -> rodnia_core::Result<()> {
//!     let mut store = FamilyStore::new();
//!     let ana = Member::new("Ana");
//!     let boris = Member::new("Boris");
//!     let (ana_id, boris_id) = (ana.id(), boris.id());
//!     store.add_member(ana)?;
//!     store.add_member(boris)?;
//!     store.add_relationship(Relationship::new(RelationKind::Parent, ana_id, boris_id))?;
//!
//!     let paths = find_all_paths(&store, ana_id, boris_id, &TraversalLimits::default())?;
//!     assert_eq!(paths, vec![vec!["Ana".to_string(), "Boris".to_string()]]);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]

pub mod error;
pub mod pathfinder;
#[cfg(test)]
mod pathfinder_tests;
pub mod store;
pub mod types;

pub use error::{Error, ExhaustionReason, Result};
pub use pathfinder::{
    find_all_paths, GraphProvider, TraversalLimits, DEFAULT_MAX_DEPTH, DEFAULT_MAX_PATHS,
};
pub use store::FamilyStore;
pub use types::{Member, MemberId, RelationKind, Relationship, RelationshipId};
