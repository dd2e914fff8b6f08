//! Property-based tests for graphwalk using proptest.
//!
//! These tests verify invariants that must hold for all possible inputs,
//! finding edge cases that unit tests might miss.

use std::collections::{HashSet, VecDeque};

use proptest::prelude::*;

use graphwalk::config::{BuildConfig, Strategy as SearchStrategy};
use graphwalk::graph::{Graph, Node};
use graphwalk::search::{bfs, dfs, FifoQueue, Traversal};
use graphwalk::{Colour, NodeId};

// ---------------------------------------------------------------------------
// Strategy helpers
// ---------------------------------------------------------------------------

/// A line of edge-list input: a lone vertex or an edge.
fn arb_line() -> impl Strategy<Value = (NodeId, Option<NodeId>)> {
    (0u64..40, proptest::option::of(0u64..40))
}

fn arb_lines() -> impl Strategy<Value = Vec<(NodeId, Option<NodeId>)>> {
    prop::collection::vec(arb_line(), 0..60)
}

fn arb_strategy() -> impl Strategy<Value = SearchStrategy> {
    prop_oneof![
        Just(SearchStrategy::BreadthFirst),
        Just(SearchStrategy::DepthFirst),
        Just(SearchStrategy::LowestIdFirst),
    ]
}

fn render(lines: &[(NodeId, Option<NodeId>)]) -> String {
    lines
        .iter()
        .map(|(a, b)| match b {
            Some(b) => format!("{a} {b}\n"),
            None => format!("{a}\n"),
        })
        .collect()
}

fn distinct_ids(lines: &[(NodeId, Option<NodeId>)]) -> HashSet<NodeId> {
    lines
        .iter()
        .flat_map(|(a, b)| std::iter::once(*a).chain(*b))
        .collect()
}

/// Reference BFS distances computed independently of the crate.
fn reference_distances(g: &Graph, start: NodeId) -> Vec<(NodeId, u32)> {
    let mut seen = vec![(start, 0u32)];
    let mut known: HashSet<NodeId> = HashSet::from([start]);
    let mut queue = VecDeque::from([(start, 0u32)]);
    while let Some((id, d)) = queue.pop_front() {
        for next in g.visit(id).unwrap() {
            if known.insert(next) {
                seen.push((next, d + 1));
                queue.push_back((next, d + 1));
            }
        }
    }
    seen.sort_unstable();
    seen
}

// ===========================================================================
// Construction invariants
// ===========================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn size_equals_distinct_ids(lines in arb_lines()) {
        let g = Graph::build(&render(&lines)).unwrap();
        prop_assert_eq!(g.size(), distinct_ids(&lines).len());
    }

    #[test]
    fn every_node_starts_white(lines in arb_lines()) {
        let g = Graph::build(&render(&lines)).unwrap();
        prop_assert!(g.nodes().all(|n| n.colour() == Colour::White));
    }

    #[test]
    fn visit_returns_edges_in_insertion_order(lines in arb_lines()) {
        let g = Graph::build(&render(&lines)).unwrap();
        for id in distinct_ids(&lines) {
            let expected: Vec<NodeId> = lines
                .iter()
                .filter(|(a, b)| *a == id && b.is_some())
                .filter_map(|(_, b)| *b)
                .collect();
            prop_assert_eq!(g.visit(id).unwrap(), expected);
        }
    }

    #[test]
    fn visit_fails_exactly_for_absent_ids(lines in arb_lines(), probe in 0u64..50) {
        let g = Graph::build(&render(&lines)).unwrap();
        let present = distinct_ids(&lines).contains(&probe);
        prop_assert_eq!(g.visit(probe).is_ok(), present);
        prop_assert_eq!(g.node(probe).is_some(), present);
    }

    #[test]
    fn adjacency_targets_are_always_vertices(lines in arb_lines()) {
        let g = Graph::build(&render(&lines)).unwrap();
        for node in g.nodes() {
            for target in node.edges() {
                prop_assert!(g.contains(*target));
            }
        }
    }

    #[test]
    fn undirected_build_is_symmetric(lines in arb_lines()) {
        let g = Graph::build_with(&render(&lines), &BuildConfig { undirected: true }).unwrap();
        for node in g.nodes() {
            for &target in node.edges() {
                let back = g.visit(target).unwrap();
                prop_assert!(back.contains(&node.id()));
            }
        }
    }

    #[test]
    fn tokens_with_letters_fail(prefix in 0u64..100, word in "[a-z]{1,5}") {
        let num_first = format!("{prefix} {word}\n");
        let word_first = format!("{word} {prefix}\n");
        prop_assert!(Graph::build(&num_first).is_err());
        prop_assert!(Graph::build(&word_first).is_err());
    }
}

// ===========================================================================
// Colour invariants
// ===========================================================================

proptest! {
    #[test]
    fn advance_colour_never_regresses(steps in 0usize..10) {
        let mut node = Node::new(1);
        let mut previous = node.colour();
        for _ in 0..steps {
            node.advance_colour();
            prop_assert!(node.colour() >= previous);
            previous = node.colour();
        }
        if steps >= 2 {
            prop_assert_eq!(node.colour(), Colour::Black);
        }
    }
}

// ===========================================================================
// Traversal invariants
// ===========================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn bfs_distances_match_reference(lines in arb_lines(), start in 0u64..40) {
        let g = Graph::build(&render(&lines)).unwrap();
        prop_assume!(g.contains(start));

        let result = bfs(&g, start).unwrap();
        let got: Vec<(NodeId, u32)> = result
            .reached
            .iter()
            .map(|(id, r)| (*id, r.distance))
            .collect();
        prop_assert_eq!(got, reference_distances(&g, start));
    }

    #[test]
    fn bfs_paths_follow_edges(lines in arb_lines(), start in 0u64..40) {
        let g = Graph::build(&render(&lines)).unwrap();
        prop_assume!(g.contains(start));

        let result = bfs(&g, start).unwrap();
        for (&id, reached) in &result.reached {
            let path = result.path_to(id).unwrap();
            prop_assert_eq!(path.len(), reached.distance as usize + 1);
            prop_assert_eq!(path[0], start);
            for hop in path.windows(2) {
                prop_assert!(g.visit(hop[0]).unwrap().contains(&hop[1]));
            }
        }
    }

    #[test]
    fn dfs_reaches_the_same_set_as_bfs(lines in arb_lines(), start in 0u64..40) {
        let g = Graph::build(&render(&lines)).unwrap();
        prop_assume!(g.contains(start));

        let b: Vec<NodeId> = bfs(&g, start).unwrap().reached.keys().copied().collect();
        let d: Vec<NodeId> = dfs(&g, start).unwrap().reached.keys().copied().collect();
        prop_assert_eq!(b, d);
    }

    #[test]
    fn max_depth_keeps_nodes_within_limit(
        lines in arb_lines(),
        start in 0u64..40,
        limit in 0u32..4,
        strategy in arb_strategy(),
    ) {
        let g = Graph::build(&render(&lines)).unwrap();
        prop_assume!(g.contains(start));

        let full = bfs(&g, start).unwrap();
        let limited = Traversal::new(&g)
            .with_strategy(strategy)
            .with_max_depth(Some(limit))
            .run(start)
            .unwrap();
        let expected: Vec<(NodeId, u32)> = full
            .reached
            .iter()
            .filter(|(_, r)| r.distance <= limit)
            .map(|(id, r)| (*id, r.distance))
            .collect();
        let got: Vec<(NodeId, u32)> = limited
            .reached
            .iter()
            .map(|(id, r)| (*id, r.distance))
            .collect();
        prop_assert_eq!(got, expected);
    }

    #[test]
    fn every_popped_node_ends_black(lines in arb_lines(), start in 0u64..40) {
        let g = Graph::build(&render(&lines)).unwrap();
        prop_assume!(g.contains(start));

        let mut run = Traversal::new(&g).start(start, FifoQueue::new(), |ids: Vec<NodeId>| ids);
        let mut popped = Vec::new();
        while let Some(id) = run.step().unwrap() {
            popped.push(id);
        }
        for id in popped {
            prop_assert_eq!(run.colour(id), Colour::Black);
        }
    }

    #[test]
    fn absent_start_always_errors(lines in arb_lines(), start in 40u64..100) {
        let g = Graph::build(&render(&lines)).unwrap();
        let err = bfs(&g, start).unwrap_err();
        prop_assert!(err.is_not_found());
    }
}
