//! Hub detection: the most interconnected cluster of risks.

use std::collections::{HashMap, HashSet};

use riskgraph_core::constants::{CLUSTER_CAP, CLUSTER_EDGE_FLOOR, LABEL_TRUNCATE_LEN};
use riskgraph_core::{Risk, RiskCorrelation, RiskId};

use crate::text::truncate_chars;

/// Find the hub risk (largest neighbor set over correlations with
/// strength ≥ 30) and return `[hub, neighbors...]` as truncated
/// labels, capped at 6 entries. Empty when no edge qualifies.
pub fn highest_risk_cluster(correlations: &[RiskCorrelation], risks: &[Risk]) -> Vec<String> {
    let mut adjacency: HashMap<RiskId, HashSet<RiskId>> = HashMap::new();
    for c in correlations {
        if c.strength.value() >= CLUSTER_EDGE_FLOOR {
            adjacency.entry(c.risk_a).or_default().insert(c.risk_b);
            adjacency.entry(c.risk_b).or_default().insert(c.risk_a);
        }
    }

    // Largest neighbor set wins; ties break on ascending id so the
    // result is deterministic across runs.
    let hub = adjacency
        .iter()
        .max_by(|(id_a, n_a), (id_b, n_b)| n_a.len().cmp(&n_b.len()).then(id_b.cmp(id_a)))
        .map(|(id, _)| *id);

    let Some(hub) = hub else {
        return Vec::new();
    };

    let labels: HashMap<RiskId, &str> = risks.iter().map(|r| (r.id, r.text.as_str())).collect();
    let label_of = |id: RiskId| -> String {
        labels
            .get(&id)
            .map(|l| truncate_chars(l, LABEL_TRUNCATE_LEN))
            .unwrap_or_else(|| id.to_string())
    };

    let mut neighbors: Vec<RiskId> = adjacency[&hub].iter().copied().collect();
    neighbors.sort();

    let mut cluster = vec![label_of(hub)];
    cluster.extend(neighbors.into_iter().map(label_of));
    cluster.truncate(CLUSTER_CAP);
    cluster
}
