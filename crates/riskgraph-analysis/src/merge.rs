//! Trust-tiered merge of externally supplied and heuristic correlations.

use std::collections::HashMap;

use riskgraph_core::models::correlation::pair_key;
use riskgraph_core::{RiskCorrelation, RiskId};
use tracing::debug;

/// Merge a higher-trust external correlation set with the locally
/// computed heuristic set.
///
/// External results win for a duplicate pair; the heuristic result
/// replaces one only when its strength is STRICTLY greater. Pair keys
/// are unordered, so `(a, b)` and `(b, a)` collide. Output is sorted
/// by strength descending.
pub fn merge(external: &[RiskCorrelation], heuristic: &[RiskCorrelation]) -> Vec<RiskCorrelation> {
    let mut by_pair: HashMap<(RiskId, RiskId), RiskCorrelation> = HashMap::new();

    for c in external {
        by_pair.insert(pair_key(c.risk_a, c.risk_b), c.clone());
    }

    let mut overridden = 0usize;
    for c in heuristic {
        let key = pair_key(c.risk_a, c.risk_b);
        match by_pair.get(&key) {
            None => {
                by_pair.insert(key, c.clone());
            }
            Some(existing) if c.strength > existing.strength => {
                by_pair.insert(key, c.clone());
                overridden += 1;
            }
            Some(_) => {}
        }
    }

    let mut merged: Vec<RiskCorrelation> = by_pair.into_values().collect();
    merged.sort_by(|a, b| b.strength.cmp(&a.strength).then_with(|| {
        // Equal strengths: order by pair key so output is deterministic.
        pair_key(a.risk_a, a.risk_b).cmp(&pair_key(b.risk_a, b.risk_b))
    }));

    debug!(
        external = external.len(),
        heuristic = heuristic.len(),
        merged = merged.len(),
        overridden,
        "correlation sets merged"
    );
    merged
}
