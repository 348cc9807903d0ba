//! Single-point-of-failure detection.

use std::collections::HashMap;

use riskgraph_core::constants::{
    SPOF_BLIND_SPOT_FLOOR, SPOF_CAP, SPOF_OUT_DEGREE, SPOF_TITLE_PREFIX_LEN, SPOF_TRIGGER_FLOOR,
};
use riskgraph_core::{
    CorrelationKind, DetectionDifficulty, Risk, RiskCorrelation, RiskId, StressTestBlindSpot,
};

use crate::text::truncate_chars;

/// Flag risks whose occurrence alone is judged likely to cause
/// multiple downstream failures.
///
/// Two sources feed the list: risks with ≥ 2 strong trigger out-edges,
/// and severe hard-to-detect blind spots. Capped at 5.
pub fn single_points_of_failure(
    correlations: &[RiskCorrelation],
    blind_spots: &[StressTestBlindSpot],
    risks: &[Risk],
) -> Vec<String> {
    let mut out_degree: HashMap<RiskId, usize> = HashMap::new();
    for c in correlations {
        if c.kind == CorrelationKind::Triggers && c.strength.value() >= SPOF_TRIGGER_FLOOR {
            *out_degree.entry(c.risk_a).or_insert(0) += 1;
        }
    }

    // Qualifying sources come from the correlations alone; a source
    // with no entry in `risks` is still reported, labeled by its id.
    // Known risks keep input order, unlabeled ids follow in id order.
    let labels: HashMap<RiskId, &str> = risks.iter().map(|r| (r.id, r.text.as_str())).collect();
    let mut spofs: Vec<String> = Vec::new();
    for risk in risks {
        if out_degree.get(&risk.id).copied().unwrap_or(0) >= SPOF_OUT_DEGREE {
            spofs.push(risk.text.clone());
        }
    }
    let mut unlabeled: Vec<RiskId> = out_degree
        .iter()
        .filter(|&(id, &degree)| degree >= SPOF_OUT_DEGREE && !labels.contains_key(id))
        .map(|(id, _)| *id)
        .collect();
    unlabeled.sort();
    spofs.extend(unlabeled.into_iter().map(|id| id.to_string()));

    for spot in blind_spots {
        if spot.probability_score.value() >= SPOF_BLIND_SPOT_FLOOR
            && spot.impact_score.value() >= SPOF_BLIND_SPOT_FLOOR
            && spot.detection_difficulty == DetectionDifficulty::Hard
        {
            // Dedup compares only a 30-char title prefix, so near-
            // duplicate titles collapse to one entry.
            let prefix = truncate_chars(&spot.title, SPOF_TITLE_PREFIX_LEN);
            if !spofs.iter().any(|existing| existing.starts_with(&prefix)) {
                spofs.push(spot.title.clone());
            }
        }
    }

    spofs.truncate(SPOF_CAP);
    spofs
}
