//! Tests for exhaustive simple-path search.

use std::cell::Cell;

use crate::error::{Error, ExhaustionReason};
use crate::pathfinder::{find_all_paths, GraphProvider, TraversalLimits};
use crate::store::FamilyStore;
use crate::types::{Member, MemberId, RelationKind, Relationship};

fn add_member(store: &mut FamilyStore, name: &str) -> MemberId {
    let member = Member::new(name);
    let id = member.id();
    store.add_member(member).unwrap();
    id
}

fn link(store: &mut FamilyStore, kind: RelationKind, from: MemberId, to: MemberId) {
    store
        .add_relationship(Relationship::new(kind, from, to))
        .unwrap();
}

fn names(path: &[&str]) -> Vec<String> {
    path.iter().map(|name| (*name).to_string()).collect()
}

/// Build the two-branch family: Ana→Boris (PARENT), Boris→Dmitri (CHILD),
/// Ana→Clara (SPOUSE), Clara→Dmitri (PARENT).
fn build_two_branch_family() -> (FamilyStore, [MemberId; 4]) {
    let mut store = FamilyStore::new();
    let ana = add_member(&mut store, "Ana");
    let boris = add_member(&mut store, "Boris");
    let clara = add_member(&mut store, "Clara");
    let dmitri = add_member(&mut store, "Dmitri");
    link(&mut store, RelationKind::Parent, ana, boris);
    link(&mut store, RelationKind::Child, boris, dmitri);
    link(&mut store, RelationKind::Spouse, ana, clara);
    link(&mut store, RelationKind::Parent, clara, dmitri);
    (store, [ana, boris, clara, dmitri])
}

/// Provider wrapper that counts `outgoing` calls.
struct Probe<'a> {
    inner: &'a FamilyStore,
    outgoing_calls: Cell<usize>,
}

impl GraphProvider for Probe<'_> {
    fn member(&self, id: MemberId) -> Option<Member> {
        self.inner.get_member(id).cloned()
    }

    fn outgoing(&self, id: MemberId) -> Vec<(RelationKind, MemberId, String)> {
        self.outgoing_calls.set(self.outgoing_calls.get() + 1);
        GraphProvider::outgoing(self.inner, id)
    }
}

#[test]
fn test_two_branch_family_both_paths_in_edge_order() {
    let (store, [ana, _, _, dmitri]) = build_two_branch_family();

    let paths = find_all_paths(&store, ana, dmitri, &TraversalLimits::default()).unwrap();

    assert_eq!(
        paths,
        vec![
            names(&["Ana", "Boris", "Dmitri"]),
            names(&["Ana", "Clara", "Dmitri"]),
        ]
    );
}

#[test]
fn test_source_equals_target_yields_no_paths() {
    let (store, [ana, ..]) = build_two_branch_family();

    let paths = find_all_paths(&store, ana, ana, &TraversalLimits::default()).unwrap();

    assert!(paths.is_empty());
}

#[test]
fn test_unconnected_members_yield_empty() {
    let (mut store, [ana, ..]) = build_two_branch_family();
    let elena = add_member(&mut store, "Elena");

    let paths = find_all_paths(&store, ana, elena, &TraversalLimits::default()).unwrap();

    assert!(paths.is_empty());
}

#[test]
fn test_unknown_source_rejected_before_traversal() {
    let (store, [ana, ..]) = build_two_branch_family();
    let ghost = uuid::Uuid::new_v4();
    let probe = Probe {
        inner: &store,
        outgoing_calls: Cell::new(0),
    };

    let result = find_all_paths(&probe, ghost, ana, &TraversalLimits::default());

    assert_eq!(result.unwrap_err(), Error::UnknownMember(ghost));
    assert_eq!(probe.outgoing_calls.get(), 0);
}

#[test]
fn test_unknown_target_rejected_before_traversal() {
    let (store, [ana, ..]) = build_two_branch_family();
    let ghost = uuid::Uuid::new_v4();
    let probe = Probe {
        inner: &store,
        outgoing_calls: Cell::new(0),
    };

    let result = find_all_paths(&probe, ana, ghost, &TraversalLimits::default());

    assert_eq!(result.unwrap_err(), Error::UnknownMember(ghost));
    assert_eq!(probe.outgoing_calls.get(), 0);
}

#[test]
fn test_shortest_paths_first() {
    let mut store = FamilyStore::new();
    let ana = add_member(&mut store, "Ana");
    let boris = add_member(&mut store, "Boris");
    let clara = add_member(&mut store, "Clara");
    // Long route inserted before the direct edge; length still wins.
    link(&mut store, RelationKind::Parent, ana, boris);
    link(&mut store, RelationKind::Parent, boris, clara);
    link(&mut store, RelationKind::Spouse, ana, clara);

    let paths = find_all_paths(&store, ana, clara, &TraversalLimits::default()).unwrap();

    assert_eq!(
        paths,
        vec![names(&["Ana", "Clara"]), names(&["Ana", "Boris", "Clara"])]
    );
}

#[test]
fn test_cycle_off_target_terminates() {
    let mut store = FamilyStore::new();
    let ana = add_member(&mut store, "Ana");
    let boris = add_member(&mut store, "Boris");
    let clara = add_member(&mut store, "Clara");
    let dmitri = add_member(&mut store, "Dmitri");
    link(&mut store, RelationKind::Parent, ana, boris);
    // Cycle Clara ↔ Dmitri hangs off the search without touching Boris.
    link(&mut store, RelationKind::Spouse, ana, clara);
    link(&mut store, RelationKind::Parent, clara, dmitri);
    link(&mut store, RelationKind::Child, dmitri, clara);

    let paths = find_all_paths(&store, ana, boris, &TraversalLimits::default()).unwrap();

    assert_eq!(paths, vec![names(&["Ana", "Boris"])]);
}

#[test]
fn test_back_edge_to_source_guarded() {
    let mut store = FamilyStore::new();
    let ana = add_member(&mut store, "Ana");
    let boris = add_member(&mut store, "Boris");
    link(&mut store, RelationKind::Spouse, ana, boris);
    link(&mut store, RelationKind::Spouse, boris, ana);

    let paths = find_all_paths(&store, ana, boris, &TraversalLimits::default()).unwrap();

    assert_eq!(paths, vec![names(&["Ana", "Boris"])]);
}

/// A member reachable along one path must stay visitable along others. A
/// search-wide visited set would return only the first path here.
#[test]
fn test_member_shared_across_paths_kept() {
    let mut store = FamilyStore::new();
    let ana = add_member(&mut store, "Ana");
    let boris = add_member(&mut store, "Boris");
    let clara = add_member(&mut store, "Clara");
    let tomas = add_member(&mut store, "Tomas");
    link(&mut store, RelationKind::Parent, ana, boris);
    link(&mut store, RelationKind::Spouse, ana, clara);
    link(&mut store, RelationKind::Child, boris, tomas);
    link(&mut store, RelationKind::Parent, clara, boris);

    let paths = find_all_paths(&store, ana, tomas, &TraversalLimits::default()).unwrap();

    assert_eq!(
        paths,
        vec![
            names(&["Ana", "Boris", "Tomas"]),
            names(&["Ana", "Clara", "Boris", "Tomas"]),
        ]
    );
}

#[test]
fn test_parallel_edges_yield_duplicate_paths() {
    let mut store = FamilyStore::new();
    let ana = add_member(&mut store, "Ana");
    let boris = add_member(&mut store, "Boris");
    link(&mut store, RelationKind::Parent, ana, boris);
    link(&mut store, RelationKind::Spouse, ana, boris);

    let paths = find_all_paths(&store, ana, boris, &TraversalLimits::default()).unwrap();

    assert_eq!(paths, vec![names(&["Ana", "Boris"]), names(&["Ana", "Boris"])]);
}

#[test]
fn test_spouse_edge_directional() {
    let mut store = FamilyStore::new();
    let ana = add_member(&mut store, "Ana");
    let boris = add_member(&mut store, "Boris");
    link(&mut store, RelationKind::Spouse, ana, boris);

    let forward = find_all_paths(&store, ana, boris, &TraversalLimits::default()).unwrap();
    let backward = find_all_paths(&store, boris, ana, &TraversalLimits::default()).unwrap();

    assert_eq!(forward.len(), 1);
    assert!(backward.is_empty());
}

#[test]
fn test_depth_ceiling_aborts() {
    let mut store = FamilyStore::new();
    let ana = add_member(&mut store, "Ana");
    let boris = add_member(&mut store, "Boris");
    let clara = add_member(&mut store, "Clara");
    let dmitri = add_member(&mut store, "Dmitri");
    link(&mut store, RelationKind::Parent, ana, boris);
    link(&mut store, RelationKind::Parent, boris, clara);
    link(&mut store, RelationKind::Parent, clara, dmitri);

    let result = find_all_paths(&store, ana, dmitri, &TraversalLimits::new(2, 100));

    assert_eq!(
        result.unwrap_err(),
        Error::TraversalExhausted {
            reason: ExhaustionReason::DepthCeiling(2),
        }
    );
}

#[test]
fn test_depth_ceiling_exact_fit() {
    let mut store = FamilyStore::new();
    let ana = add_member(&mut store, "Ana");
    let boris = add_member(&mut store, "Boris");
    let clara = add_member(&mut store, "Clara");
    let dmitri = add_member(&mut store, "Dmitri");
    link(&mut store, RelationKind::Parent, ana, boris);
    link(&mut store, RelationKind::Parent, boris, clara);
    link(&mut store, RelationKind::Parent, clara, dmitri);

    let paths = find_all_paths(&store, ana, dmitri, &TraversalLimits::new(3, 100)).unwrap();

    assert_eq!(paths, vec![names(&["Ana", "Boris", "Clara", "Dmitri"])]);
}

#[test]
fn test_path_ceiling_aborts() {
    let (store, [ana, _, _, dmitri]) = build_two_branch_family();

    let result = find_all_paths(&store, ana, dmitri, &TraversalLimits::new(32, 1));

    assert_eq!(
        result.unwrap_err(),
        Error::TraversalExhausted {
            reason: ExhaustionReason::PathCeiling(1),
        }
    );
}

#[test]
fn test_path_ceiling_exact_fit() {
    let (store, [ana, _, _, dmitri]) = build_two_branch_family();

    let paths = find_all_paths(&store, ana, dmitri, &TraversalLimits::new(32, 2)).unwrap();

    assert_eq!(paths.len(), 2);
}

/// A partial path already at the depth ceiling whose only extensions are
/// cycle-guarded must be dropped quietly, not abort the search.
#[test]
fn test_at_cap_frontier_with_only_cycles_completes() {
    let mut store = FamilyStore::new();
    let ana = add_member(&mut store, "Ana");
    let boris = add_member(&mut store, "Boris");
    let clara = add_member(&mut store, "Clara");
    link(&mut store, RelationKind::Spouse, ana, boris);
    link(&mut store, RelationKind::Spouse, boris, ana);
    link(&mut store, RelationKind::Parent, ana, clara);

    let paths = find_all_paths(&store, ana, clara, &TraversalLimits::new(1, 100)).unwrap();

    assert_eq!(paths, vec![names(&["Ana", "Clara"])]);
}

#[test]
fn test_results_use_current_display_names() {
    let mut store = FamilyStore::new();
    let ana = add_member(&mut store, "Ana");
    let boris = add_member(&mut store, "Boris");
    link(&mut store, RelationKind::Parent, ana, boris);
    store.rename_member(boris, "Boris Petrov").unwrap();

    let paths = find_all_paths(&store, ana, boris, &TraversalLimits::default()).unwrap();

    assert_eq!(paths, vec![names(&["Ana", "Boris Petrov"])]);
}

mod properties {
    use proptest::prelude::*;

    use crate::pathfinder::{find_all_paths, TraversalLimits};
    use crate::store::FamilyStore;
    use crate::types::{Member, MemberId, RelationKind, Relationship};

    /// All simple paths from `source` to `target` by straightforward
    /// recursive enumeration, as the ground truth.
    fn reference_paths(
        adjacency: &[Vec<usize>],
        source: usize,
        target: usize,
    ) -> Vec<Vec<usize>> {
        if source == target {
            return Vec::new();
        }
        let mut found = Vec::new();
        let mut path = vec![source];
        walk(adjacency, target, &mut path, &mut found);
        found
    }

    fn walk(
        adjacency: &[Vec<usize>],
        target: usize,
        path: &mut Vec<usize>,
        found: &mut Vec<Vec<usize>>,
    ) {
        let current = *path.last().unwrap();
        if current == target {
            found.push(path.clone());
            return;
        }
        for &next in &adjacency[current] {
            if path.contains(&next) {
                continue;
            }
            path.push(next);
            walk(adjacency, target, path, found);
            path.pop();
        }
    }

    /// Arbitrary digraph: member count plus a distinct-edge subset, cycles
    /// included.
    fn arb_graph() -> impl Strategy<Value = (usize, Vec<(usize, usize)>)> {
        (2usize..7).prop_flat_map(|count| {
            let pairs: Vec<(usize, usize)> = (0..count)
                .flat_map(|from| {
                    (0..count)
                        .filter(move |&to| to != from)
                        .map(move |to| (from, to))
                })
                .collect();
            let max = pairs.len();
            proptest::sample::subsequence(pairs, 0..=max)
                .prop_map(move |edges| (count, edges))
        })
    }

    proptest! {
        #[test]
        fn test_matches_reference_enumeration((count, edges) in arb_graph()) {
            let mut store = FamilyStore::new();
            let mut ids: Vec<MemberId> = Vec::new();
            for index in 0..count {
                let member = Member::new(&format!("M{index}"));
                ids.push(member.id());
                store.add_member(member).unwrap();
            }
            let mut adjacency: Vec<Vec<usize>> = vec![Vec::new(); count];
            for &(from, to) in &edges {
                adjacency[from].push(to);
                store
                    .add_relationship(Relationship::new(
                        RelationKind::Parent,
                        ids[from],
                        ids[to],
                    ))
                    .unwrap();
            }
            let source = 0;
            let target = count - 1;

            // Ceilings far above what a six-member graph can produce.
            let limits = TraversalLimits::new(16, 100_000);
            let found = find_all_paths(&store, ids[source], ids[target], &limits).unwrap();

            for pair in found.windows(2) {
                prop_assert!(pair[0].len() <= pair[1].len());
            }

            let mut got = found;
            let mut expected: Vec<Vec<String>> = reference_paths(&adjacency, source, target)
                .into_iter()
                .map(|path| path.into_iter().map(|index| format!("M{index}")).collect())
                .collect();
            got.sort();
            expected.sort();
            prop_assert_eq!(got, expected);
        }
    }
}
