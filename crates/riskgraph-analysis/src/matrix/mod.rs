//! Matrix computer: aggregates correlations and blind-spot severity
//! into the probability matrix.

pub mod cells;
pub mod cluster;
pub mod spof;

use riskgraph_core::constants::{
    BASELINE_FAILURE_RISK, BLIND_SPOT_MEAN_WEIGHT, CORRELATION_MEAN_WEIGHT, CRITICAL_SPOT_BONUS,
    CRITICAL_SPOT_FLOOR, DEFAULT_DIVERSITY, DIVERSITY_RATIO_WEIGHT, DIVERSITY_STRENGTH_FLOOR,
    DIVERSITY_STRENGTH_WEIGHT, MASKING_BONUS, TRIGGER_BONUS,
};
use riskgraph_core::{
    CorrelationKind, ProbabilityMatrix, Risk, RiskCorrelation, Strength, StressTestBlindSpot,
};
use tracing::debug;

/// Compute the probability matrix from correlations and optional
/// blind-spot data. `risks` supplies id → label resolution for the
/// cluster and SPOF display strings.
///
/// Never fails: zero correlations and zero blind spots produce the
/// documented defaults (baseline failure risk 20, diversity 80).
pub fn compute(
    correlations: &[RiskCorrelation],
    blind_spots: &[StressTestBlindSpot],
    risks: &[Risk],
) -> ProbabilityMatrix {
    let matrix = ProbabilityMatrix {
        overall_failure_risk: overall_failure_risk(correlations, blind_spots),
        risk_correlations: correlations.to_vec(),
        highest_risk_cluster: cluster::highest_risk_cluster(correlations, risks),
        single_point_of_failures: spof::single_points_of_failure(correlations, blind_spots, risks),
        risk_diversity_score: diversity_score(correlations),
    };
    debug!(
        failure_risk = matrix.overall_failure_risk.value(),
        diversity = matrix.risk_diversity_score.value(),
        cluster = matrix.highest_risk_cluster.len(),
        spofs = matrix.single_point_of_failures.len(),
        "matrix computed"
    );
    matrix
}

/// Additive, capped severity model.
///
/// ```text
/// risk = 20
///   + 0.30 × mean strength of non-independent correlations
///   + 5 per triggers correlation
///   + 8 per blind spot with probability ≥ 70 and impact ≥ 70
///   + 0.20 × mean (probability × impact / 100) over all blind spots
///   + 4 per masks correlation
/// ```
///
/// Clamped to [0, 100].
fn overall_failure_risk(
    correlations: &[RiskCorrelation],
    blind_spots: &[StressTestBlindSpot],
) -> Strength {
    let mut risk = BASELINE_FAILURE_RISK;

    let non_independent: Vec<&RiskCorrelation> = correlations
        .iter()
        .filter(|c| c.kind != CorrelationKind::Independent)
        .collect();

    if !non_independent.is_empty() {
        let mean = non_independent
            .iter()
            .map(|c| c.strength.as_f64())
            .sum::<f64>()
            / non_independent.len() as f64;
        risk += mean * CORRELATION_MEAN_WEIGHT;
    }

    let triggers = count_kind(correlations, CorrelationKind::Triggers);
    risk += triggers as f64 * TRIGGER_BONUS;

    let critical_spots = blind_spots
        .iter()
        .filter(|b| {
            b.probability_score.value() >= CRITICAL_SPOT_FLOOR
                && b.impact_score.value() >= CRITICAL_SPOT_FLOOR
        })
        .count();
    risk += critical_spots as f64 * CRITICAL_SPOT_BONUS;

    if !blind_spots.is_empty() {
        let mean_spot_risk = blind_spots
            .iter()
            .map(|b| b.probability_score.as_f64() * b.impact_score.as_f64() / 100.0)
            .sum::<f64>()
            / blind_spots.len() as f64;
        risk += mean_spot_risk * BLIND_SPOT_MEAN_WEIGHT;
    }

    let masks = count_kind(correlations, CorrelationKind::Masks);
    risk += masks as f64 * MASKING_BONUS;

    Strength::from_f64(risk)
}

/// Risk-diversity score. Not the inverse of failure risk: it weights
/// the coupling ratio and mean strength differently and is computed
/// independently.
fn diversity_score(correlations: &[RiskCorrelation]) -> Strength {
    if correlations.is_empty() {
        // Assume independence when nothing is known.
        return Strength::from(DEFAULT_DIVERSITY);
    }

    let non_independent: Vec<&RiskCorrelation> = correlations
        .iter()
        .filter(|c| c.kind != CorrelationKind::Independent)
        .collect();

    let strongly_coupled = non_independent
        .iter()
        .filter(|c| c.strength.value() >= DIVERSITY_STRENGTH_FLOOR)
        .count();
    let correlation_ratio = strongly_coupled as f64 / correlations.len() as f64;

    let avg_strength = if non_independent.is_empty() {
        0.0
    } else {
        non_independent
            .iter()
            .map(|c| c.strength.as_f64())
            .sum::<f64>()
            / non_independent.len() as f64
    };

    let penalty = (correlation_ratio * DIVERSITY_RATIO_WEIGHT
        + avg_strength / 100.0 * DIVERSITY_STRENGTH_WEIGHT)
        .round();
    Strength::from_f64(100.0 - penalty)
}

fn count_kind(correlations: &[RiskCorrelation], kind: CorrelationKind) -> usize {
    correlations.iter().filter(|c| c.kind == kind).count()
}
