//! Stats and export reporting over a computed probability matrix.

use std::collections::HashSet;

use riskgraph_core::{
    CorrelationKind, MatrixStats, MatrixSummary, ProbabilityMatrix, RiskLevel, Strength,
};

use crate::graph::estimate_cascade_length;

/// Derive summary statistics from a matrix.
pub fn stats(matrix: &ProbabilityMatrix) -> MatrixStats {
    let correlations = &matrix.risk_correlations;

    let mut referenced = HashSet::new();
    for c in correlations {
        referenced.insert(c.risk_a);
        referenced.insert(c.risk_b);
    }

    let non_independent: Vec<_> = correlations
        .iter()
        .filter(|c| c.kind != CorrelationKind::Independent)
        .collect();

    let avg_strength = if non_independent.is_empty() {
        0.0
    } else {
        non_independent
            .iter()
            .map(|c| c.strength.as_f64())
            .sum::<f64>()
            / non_independent.len() as f64
    };
    let max_strength = non_independent
        .iter()
        .map(|c| c.strength)
        .max()
        .unwrap_or(Strength::MIN);

    MatrixStats {
        total_risks: referenced.len(),
        correlated_pairs: non_independent.len(),
        independent_pairs: correlations.len() - non_independent.len(),
        avg_strength,
        max_strength,
        cascade_chain_length: estimate_cascade_length(correlations),
        spof_count: matrix.single_point_of_failures.len(),
        diversity_score: matrix.risk_diversity_score,
    }
}

/// Flatten a matrix into a serializable export record with a one-line
/// natural-language headline.
pub fn summary(matrix: &ProbabilityMatrix) -> MatrixSummary {
    let stats = stats(matrix);
    let level = RiskLevel::from_score(matrix.overall_failure_risk);

    let headline = format!(
        "{} overall failure risk ({}/100): {} correlated pair{}, longest trigger chain {}, {} single point{} of failure, diversity {}/100.",
        level,
        matrix.overall_failure_risk,
        stats.correlated_pairs,
        plural(stats.correlated_pairs),
        stats.cascade_chain_length,
        stats.spof_count,
        plural(stats.spof_count),
        stats.diversity_score,
    );

    MatrixSummary {
        overall_failure_risk: matrix.overall_failure_risk,
        risk_level: level.as_str().to_string(),
        total_risks: stats.total_risks,
        correlated_pairs: stats.correlated_pairs,
        independent_pairs: stats.independent_pairs,
        avg_strength: stats.avg_strength,
        max_strength: stats.max_strength,
        cascade_chain_length: stats.cascade_chain_length,
        spof_count: stats.spof_count,
        diversity_score: stats.diversity_score,
        headline,
    }
}

fn plural(n: usize) -> &'static str {
    if n == 1 {
        ""
    } else {
        "s"
    }
}
