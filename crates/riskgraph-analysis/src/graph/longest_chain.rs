//! Longest simple path through the trigger graph, depth-first with a
//! per-path visited set.

use std::collections::HashSet;

use petgraph::stable_graph::NodeIndex;
use petgraph::Direction;

use super::TriggerGraph;

/// Find the longest simple trigger chain, measured in nodes.
///
/// Every node with outgoing edges starts a search. The visited set is
/// per-path: a node is added before recursing and removed on
/// backtrack, so it may be revisited via a different branch while
/// cycles still terminate.
pub fn longest_chain(graph: &TriggerGraph) -> usize {
    if graph.edge_count() == 0 {
        return 0;
    }

    let mut max_depth = 0;
    let mut visited = HashSet::new();
    for node in graph.graph.node_indices() {
        let has_out = graph
            .graph
            .neighbors_directed(node, Direction::Outgoing)
            .next()
            .is_some();
        if has_out {
            max_depth = max_depth.max(walk(graph, node, &mut visited));
        }
    }
    max_depth
}

fn walk(graph: &TriggerGraph, node: NodeIndex, visited: &mut HashSet<NodeIndex>) -> usize {
    visited.insert(node);
    let mut deepest = 0;
    for next in graph.graph.neighbors_directed(node, Direction::Outgoing) {
        if !visited.contains(&next) {
            deepest = deepest.max(walk(graph, next, visited));
        }
    }
    visited.remove(&node);
    1 + deepest
}
