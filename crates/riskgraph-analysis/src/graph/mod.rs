//! Directed trigger graph and the cascade-length estimator.

pub mod longest_chain;

use std::collections::HashMap;

use petgraph::stable_graph::{NodeIndex, StableGraph};
use petgraph::Directed;
use riskgraph_core::{CorrelationKind, RiskCorrelation, RiskId, Strength};

pub use longest_chain::longest_chain;

/// A directed graph over `Triggers`-kind correlations
/// (`risk_a → risk_b`), with an id → node index.
#[derive(Debug, Default)]
pub struct TriggerGraph {
    pub graph: StableGraph<RiskId, Strength, Directed>,
    index: HashMap<RiskId, NodeIndex>,
}

impl TriggerGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the graph from the `Triggers` subset of a correlation list.
    pub fn from_correlations(correlations: &[RiskCorrelation]) -> Self {
        let mut graph = Self::new();
        for c in correlations {
            if c.kind == CorrelationKind::Triggers {
                let source = graph.ensure_node(c.risk_a);
                let target = graph.ensure_node(c.risk_b);
                graph.graph.add_edge(source, target, c.strength);
            }
        }
        graph
    }

    /// Get the node for a risk id, inserting it if absent.
    pub fn ensure_node(&mut self, id: RiskId) -> NodeIndex {
        if let Some(&idx) = self.index.get(&id) {
            return idx;
        }
        let idx = self.graph.add_node(id);
        self.index.insert(id, idx);
        idx
    }

    pub fn get_node(&self, id: RiskId) -> Option<NodeIndex> {
        self.index.get(&id).copied()
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }
}

/// Longest trigger chain reachable through a correlation list.
///
/// Returns the node count of the longest simple path: 0 with no
/// trigger edges, 3 for a chain A→B→C. Cycles terminate via the
/// per-path visited set.
pub fn estimate_cascade_length(correlations: &[RiskCorrelation]) -> usize {
    let graph = TriggerGraph::from_correlations(correlations);
    longest_chain(&graph)
}
