//! Exhaustive simple-path search between two members.
//!
//! Provides generic enumeration via the [`GraphProvider`] trait, so any
//! storage that can report a member and its outbound edges can back a
//! search without reimplementation.

use std::collections::VecDeque;

use crate::error::{Error, ExhaustionReason, Result};
use crate::types::{Member, MemberId, RelationKind};

/// Read-only graph access required by the path finder.
///
/// Returns outgoing edges as `(kind, destination id, destination display
/// name)` triples. Edge enumeration order must be stable between calls for
/// search results to be deterministic.
pub trait GraphProvider {
    /// Looks up a member; `None` when the id is unknown.
    fn member(&self, id: MemberId) -> Option<Member>;

    /// Returns outbound edges of a member as `(kind, destination, name)`.
    fn outgoing(&self, id: MemberId) -> Vec<(RelationKind, MemberId, String)>;
}

/// Implement `GraphProvider` for `FamilyStore`.
impl GraphProvider for crate::store::FamilyStore {
    fn member(&self, id: MemberId) -> Option<Member> {
        self.get_member(id).cloned()
    }

    fn outgoing(&self, id: MemberId) -> Vec<(RelationKind, MemberId, String)> {
        self.outgoing_relationships(id)
            .into_iter()
            .filter_map(|relationship| {
                self.get_member(relationship.to()).map(|destination| {
                    (
                        relationship.kind(),
                        relationship.to(),
                        destination.display_name().to_string(),
                    )
                })
            })
            .collect()
    }
}

/// Default ceiling on edges per explored path.
pub const DEFAULT_MAX_DEPTH: usize = 32;

/// Default ceiling on collected complete paths.
pub const DEFAULT_MAX_PATHS: usize = 4096;

/// Ceilings bounding a path search.
///
/// Every simple path is enumerated eagerly, so a dense or cycle-heavy graph
/// can make an unbounded search arbitrarily expensive. Hitting either
/// ceiling aborts the search with [`Error::TraversalExhausted`] instead of
/// returning a silently incomplete result.
#[derive(Debug, Clone)]
pub struct TraversalLimits {
    /// Maximum number of edges in any explored path.
    pub max_depth: usize,
    /// Maximum number of complete paths to collect.
    pub max_paths: usize,
}

impl Default for TraversalLimits {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            max_paths: DEFAULT_MAX_PATHS,
        }
    }
}

impl TraversalLimits {
    /// Creates limits with the given ceilings.
    #[must_use]
    pub fn new(max_depth: usize, max_paths: usize) -> Self {
        Self {
            max_depth,
            max_paths,
        }
    }
}

/// Enumerates every simple path from `source` to `target`, breadth-first.
///
/// Paths are returned as ordered member display names, source first and
/// target last, shortest paths first; equal lengths keep the provider's
/// edge enumeration order. `source == target` yields no paths, since a path
/// has at least one edge. An empty `Ok` means the members are stored but
/// unconnected, which is not an error.
///
/// The revisit check is scoped to the path being extended, not shared
/// across the whole search: one member can sit on many distinct simple
/// paths, and a search-wide visited set would drop every path after the
/// first that crosses it.
///
/// # Arguments
///
/// * `graph` - Any graph implementing `GraphProvider`
/// * `source` - Starting member id
/// * `target` - Destination member id
/// * `limits` - Search ceilings
///
/// # Errors
///
/// - [`Error::UnknownMember`] if either endpoint is absent. Checked before
///   any traversal.
/// - [`Error::TraversalExhausted`] if the search trips a [`TraversalLimits`]
///   ceiling. No partial result is returned.
pub fn find_all_paths<G: GraphProvider>(
    graph: &G,
    source: MemberId,
    target: MemberId,
    limits: &TraversalLimits,
) -> Result<Vec<Vec<String>>> {
    let source_member = graph.member(source).ok_or(Error::UnknownMember(source))?;
    if graph.member(target).is_none() {
        return Err(Error::UnknownMember(target));
    }

    // A path has at least one edge, so there is no zero-edge self path.
    if source == target {
        return Ok(Vec::new());
    }

    let mut results: Vec<Vec<String>> = Vec::new();
    // Each queue entry is (last member of the partial path, the partial path
    // itself as (id, display name) pairs starting at `source`). FIFO order
    // yields complete paths shortest-first. Queued paths never contain
    // `target`: a path reaching it is emitted, not re-enqueued.
    let mut queue: VecDeque<(MemberId, Vec<(MemberId, String)>)> = VecDeque::new();
    queue.push_back((
        source,
        vec![(source, source_member.display_name().to_string())],
    ));

    while let Some((current, path)) = queue.pop_front() {
        for (_, next, next_name) in graph.outgoing(current) {
            // Per-path cycle guard. Since queued paths never contain the
            // target, this cannot shadow the target check below.
            if path.iter().any(|&(id, _)| id == next) {
                continue;
            }

            // `path` holds `path.len() - 1` edges; this extension makes it
            // `path.len()`.
            if path.len() > limits.max_depth {
                tracing::warn!(
                    max_depth = limits.max_depth,
                    "path search aborted: depth ceiling reached"
                );
                return Err(Error::TraversalExhausted {
                    reason: ExhaustionReason::DepthCeiling(limits.max_depth),
                });
            }

            if next == target {
                if results.len() >= limits.max_paths {
                    tracing::warn!(
                        max_paths = limits.max_paths,
                        "path search aborted: path ceiling reached"
                    );
                    return Err(Error::TraversalExhausted {
                        reason: ExhaustionReason::PathCeiling(limits.max_paths),
                    });
                }
                let mut names: Vec<String> =
                    path.iter().map(|(_, name)| name.clone()).collect();
                names.push(next_name);
                results.push(names);
            } else {
                let mut extended = path.clone();
                extended.push((next, next_name));
                queue.push_back((next, extended));
            }
        }
    }

    tracing::debug!(paths = results.len(), "path search complete");
    Ok(results)
}
