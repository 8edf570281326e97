//! Property-based tests for the ordering phase.
//!
//! These tests generate random acyclic include graphs, shuffle the order in
//! which headers are inserted, and check that the emission order always
//! covers every header once and puts parents first.

#[cfg(test)]
mod proptest_tests {
    use crate::error::Error;
    use crate::graph::{DependencyGraph, FileNode};
    use crate::phases::ordering;
    use proptest::prelude::*;
    use std::collections::HashSet;

    /// Header `i` may only include headers with a smaller index, which keeps
    /// the graph acyclic. Returns the graph's nodes in a shuffled order.
    fn acyclic_nodes() -> impl Strategy<Value = Vec<FileNode>> {
        (1usize..24)
            .prop_flat_map(|count| {
                let parents = (0..count)
                    .map(|i| proptest::collection::vec(0..i.max(1), 0..4))
                    .collect::<Vec<_>>();
                (Just(count), parents)
            })
            .prop_map(|(count, parents)| {
                (0..count)
                    .map(|i| {
                        let names = parents[i]
                            .iter()
                            .filter(|&&p| p < i)
                            .map(|p| format!("lib_{}.h", p))
                            .collect();
                        FileNode::new(format!("lib_{}.h", i), names, "")
                    })
                    .collect::<Vec<_>>()
            })
            .prop_shuffle()
    }

    proptest! {
        /// Property: every header appears exactly once
        #[test]
        fn every_header_emitted_once(nodes in acyclic_nodes()) {
            let graph: DependencyGraph = nodes.into_iter().collect();
            let order = ordering::execute(&graph).unwrap();

            prop_assert_eq!(order.len(), graph.len());
            let distinct: HashSet<&str> = order.iter().collect();
            prop_assert_eq!(distinct.len(), graph.len());
            for node in graph.nodes() {
                prop_assert!(order.position(&node.filename).is_some());
            }
        }

        /// Property: parents are emitted strictly before their dependents
        #[test]
        fn parents_precede_dependents(nodes in acyclic_nodes()) {
            let graph: DependencyGraph = nodes.into_iter().collect();
            let order = ordering::execute(&graph).unwrap();

            for node in graph.nodes() {
                let own = order.position(&node.filename).unwrap();
                for parent in &node.parents {
                    let theirs = order.position(parent).unwrap();
                    prop_assert!(theirs < own, "{} not before {}", parent, node.filename);
                }
            }
        }

        /// Property: sorting the same graph twice gives the same order
        #[test]
        fn ordering_is_deterministic(nodes in acyclic_nodes()) {
            let graph: DependencyGraph = nodes.into_iter().collect();
            let first = ordering::execute(&graph).unwrap();
            let second = ordering::execute(&graph).unwrap();
            prop_assert_eq!(first, second);
        }

        /// Property: closing any back edge into a chain is reported as a cycle
        #[test]
        fn back_edge_is_a_cycle(len in 2usize..12, from in 0usize..12) {
            let from = from % len;
            let nodes = (0..len).map(|i| {
                let mut parents = Vec::new();
                if i + 1 < len {
                    parents.push(format!("lib_{}.h", i + 1));
                }
                if i == len - 1 {
                    parents.push(format!("lib_{}.h", from));
                }
                FileNode::new(format!("lib_{}.h", i), parents, "")
            });
            let graph: DependencyGraph = nodes.collect();

            let err = ordering::execute(&graph).unwrap_err();
            let is_cycle = matches!(err, Error::CycleDetected { .. });
            prop_assert!(is_cycle);
        }
    }
}
