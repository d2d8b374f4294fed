//! In-memory storage for the family graph.
//!
//! Members and relationships live in hash maps keyed by id, with outgoing
//! and incoming adjacency lists per member. The double index keeps outbound
//! edge enumeration at O(degree) and lets member removal cascade to every
//! touching relationship without a full scan. Contents are not persisted
//! across restarts.

use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::types::{Member, MemberId, Relationship, RelationshipId};

/// In-memory store for members and their directed typed relationships.
///
/// Outgoing relationships are enumerated in insertion order, which keeps
/// path search results deterministic for a given sequence of writes.
///
/// # Example
///
/// ```rust
/// use rodnia_core::{FamilyStore, Member, RelationKind, Relationship};
///
/// let mut store = FamilyStore::new();
/// let ana = Member::new("Ana");
/// let boris = Member::new("Boris");
/// let (ana_id, boris_id) = (ana.id(), boris.id());
/// store.add_member(ana)?;
/// store.add_member(boris)?;
/// store.add_relationship(Relationship::new(RelationKind::Parent, ana_id, boris_id))?;
///
/// assert_eq!(store.member_count(), 2);
/// assert_eq!(store.outgoing_relationships(ana_id).len(), 1);
/// # Ok::<(), rodnia_core::Error>(())
/// ```
#[derive(Debug, Default)]
pub struct FamilyStore {
    /// All members indexed by id.
    members: HashMap<MemberId, Member>,
    /// All relationships indexed by id.
    relationships: HashMap<RelationshipId, Relationship>,
    /// Outgoing adjacency: source member id -> relationship ids, insertion order.
    outgoing: HashMap<MemberId, Vec<RelationshipId>>,
    /// Incoming adjacency: destination member id -> relationship ids.
    incoming: HashMap<MemberId, Vec<RelationshipId>>,
}

impl FamilyStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a member to the store.
    ///
    /// # Errors
    ///
    /// Returns `Error::MemberExists` if a member with the same id is already
    /// stored.
    pub fn add_member(&mut self, member: Member) -> Result<()> {
        let id = member.id();
        if self.members.contains_key(&id) {
            return Err(Error::MemberExists(id));
        }
        self.members.insert(id, member);
        Ok(())
    }

    /// Returns a member by id, if present.
    #[must_use]
    pub fn get_member(&self, id: MemberId) -> Option<&Member> {
        self.members.get(&id)
    }

    /// Returns `true` if a member with this id is stored.
    #[must_use]
    pub fn has_member(&self, id: MemberId) -> bool {
        self.members.contains_key(&id)
    }

    /// Returns all members, in no particular order.
    #[must_use]
    pub fn all_members(&self) -> Vec<&Member> {
        self.members.values().collect()
    }

    /// Returns the number of stored members.
    #[must_use]
    pub fn member_count(&self) -> usize {
        self.members.len()
    }

    /// Renames a member, bumping its `updated_at` timestamp.
    ///
    /// # Errors
    ///
    /// Returns `Error::UnknownMember` if the id is not stored.
    pub fn rename_member(&mut self, id: MemberId, display_name: &str) -> Result<&Member> {
        let member = self
            .members
            .get_mut(&id)
            .ok_or(Error::UnknownMember(id))?;
        member.rename(display_name);
        Ok(member)
    }

    /// Removes a member and every relationship touching it, returning the
    /// removed member.
    ///
    /// # Errors
    ///
    /// Returns `Error::UnknownMember` if the id is not stored.
    pub fn remove_member(&mut self, id: MemberId) -> Result<Member> {
        let member = self.members.remove(&id).ok_or(Error::UnknownMember(id))?;
        self.remove_member_relationships(id);
        Ok(member)
    }

    /// Adds a relationship. Both endpoints must already be stored.
    ///
    /// # Errors
    ///
    /// Returns `Error::RelationshipExists` if the id is already stored, or
    /// `Error::UnknownMember` naming the first missing endpoint.
    pub fn add_relationship(&mut self, relationship: Relationship) -> Result<()> {
        let id = relationship.id();
        if self.relationships.contains_key(&id) {
            return Err(Error::RelationshipExists(id));
        }
        if !self.members.contains_key(&relationship.from()) {
            return Err(Error::UnknownMember(relationship.from()));
        }
        if !self.members.contains_key(&relationship.to()) {
            return Err(Error::UnknownMember(relationship.to()));
        }

        self.outgoing.entry(relationship.from()).or_default().push(id);
        self.incoming.entry(relationship.to()).or_default().push(id);
        self.relationships.insert(id, relationship);
        Ok(())
    }

    /// Returns a relationship by id, if present.
    #[must_use]
    pub fn get_relationship(&self, id: RelationshipId) -> Option<&Relationship> {
        self.relationships.get(&id)
    }

    /// Returns all relationships, in no particular order.
    #[must_use]
    pub fn all_relationships(&self) -> Vec<&Relationship> {
        self.relationships.values().collect()
    }

    /// Returns the number of stored relationships.
    #[must_use]
    pub fn relationship_count(&self) -> usize {
        self.relationships.len()
    }

    /// Removes a relationship, returning it.
    ///
    /// # Errors
    ///
    /// Returns `Error::UnknownRelationship` if the id is not stored.
    pub fn remove_relationship(&mut self, id: RelationshipId) -> Result<Relationship> {
        let relationship = self
            .relationships
            .remove(&id)
            .ok_or(Error::UnknownRelationship(id))?;
        if let Some(ids) = self.outgoing.get_mut(&relationship.from()) {
            ids.retain(|&rid| rid != id);
        }
        if let Some(ids) = self.incoming.get_mut(&relationship.to()) {
            ids.retain(|&rid| rid != id);
        }
        Ok(relationship)
    }

    /// Returns the outgoing relationships of a member in insertion order.
    ///
    /// Unknown ids yield an empty list; existence checks are the caller's
    /// responsibility.
    #[must_use]
    pub fn outgoing_relationships(&self, id: MemberId) -> Vec<&Relationship> {
        self.outgoing
            .get(&id)
            .map(|ids| {
                ids.iter()
                    .filter_map(|rid| self.relationships.get(rid))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Removes every relationship where the member is source or destination,
    /// cleaning the opposite adjacency entry for each.
    fn remove_member_relationships(&mut self, id: MemberId) {
        let outgoing_ids = self.outgoing.remove(&id).unwrap_or_default();
        let incoming_ids = self.incoming.remove(&id).unwrap_or_default();

        for rid in outgoing_ids {
            if let Some(relationship) = self.relationships.remove(&rid) {
                if let Some(ids) = self.incoming.get_mut(&relationship.to()) {
                    ids.retain(|&other| other != rid);
                }
            }
        }
        // Self-loops were already removed by the outgoing pass above.
        for rid in incoming_ids {
            if let Some(relationship) = self.relationships.remove(&rid) {
                if let Some(ids) = self.outgoing.get_mut(&relationship.from()) {
                    ids.retain(|&other| other != rid);
                }
            }
        }
    }
}
