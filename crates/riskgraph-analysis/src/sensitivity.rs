//! Sensitivity analysis: sweeps each decision variable across its
//! range and measures how hard it moves the score.

use riskgraph_core::constants::{
    CRITICAL_ELASTICITY, CRITICAL_SCORE_RANGE, SENSITIVITY_IMPACT_SCALE, STEEP_ELASTICITY,
};
use riskgraph_core::{SensitivityReport, SensitivityVariable, TornadoBar, VariableImpact};
use tracing::debug;

/// Evaluate every variable at the ends of its range and report
/// per-variable elasticity, tornado-chart bars, and templated
/// recommendations. The score model is linear in each variable, so
/// the range endpoints bound every intermediate value. A variable
/// with `base_value == 0` contributes no score impact.
pub fn analyze_sensitivity(
    base_score: f64,
    variables: &[SensitivityVariable],
) -> SensitivityReport {
    let mut variable_impacts = Vec::with_capacity(variables.len());
    let mut tornado_chart_data = Vec::with_capacity(variables.len());

    for var in variables {
        let score_at = |value: f64| -> f64 {
            let delta = if var.base_value == 0.0 {
                0.0
            } else {
                (value - var.base_value) / var.base_value
            };
            (base_score + delta * var.weight * SENSITIVITY_IMPACT_SCALE).clamp(0.0, 100.0)
        };

        let first = score_at(var.min_value);
        let last = score_at(var.max_value);
        let score_range = last - first;

        // Elasticity: % change in score per % change in the variable.
        let pct_change_score = if base_score == 0.0 {
            0.0
        } else {
            score_range / base_score * 100.0
        };
        let pct_change_var = if var.base_value == 0.0 {
            0.0
        } else {
            (var.max_value - var.min_value) / var.base_value * 100.0
        };
        let elasticity = if pct_change_var == 0.0 {
            0.0
        } else {
            pct_change_score / pct_change_var
        };

        let correlation = if last > first { 1.0 } else { -1.0 };
        let is_critical =
            elasticity.abs() > CRITICAL_ELASTICITY || score_range.abs() > CRITICAL_SCORE_RANGE;

        variable_impacts.push(VariableImpact {
            variable_name: var.name.clone(),
            elasticity,
            correlation,
            score_at_min: first,
            score_at_max: last,
            score_range,
            is_critical,
        });

        tornado_chart_data.push(TornadoBar {
            variable_name: var.name.clone(),
            low_value: var.min_value,
            high_value: var.max_value,
            base_value: var.base_value,
            low_score: first,
            high_score: last,
        });
    }

    // Widest swing first.
    tornado_chart_data.sort_by(|a, b| {
        let range_a = (a.high_score - a.low_score).abs();
        let range_b = (b.high_score - b.low_score).abs();
        range_b
            .partial_cmp(&range_a)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let critical_variables: Vec<String> = variable_impacts
        .iter()
        .filter(|v| v.is_critical)
        .map(|v| v.variable_name.clone())
        .collect();

    let recommendations = recommendations(&variable_impacts);

    debug!(
        variables = variables.len(),
        critical = critical_variables.len(),
        "sensitivity analysis complete"
    );

    SensitivityReport {
        variable_impacts,
        tornado_chart_data,
        critical_variables,
        recommendations,
    }
}

fn recommendations(impacts: &[VariableImpact]) -> Vec<String> {
    let mut recs = Vec::new();

    for impact in impacts {
        if impact.is_critical {
            if impact.correlation > 0.0 {
                recs.push(format!(
                    "Focus on maximizing '{}': higher values raise the score",
                    impact.variable_name
                ));
            } else {
                recs.push(format!(
                    "Limit exposure to '{}': higher values lower the score",
                    impact.variable_name
                ));
            }
        }
        if impact.elasticity.abs() > STEEP_ELASTICITY {
            recs.push(format!(
                "High sensitivity to '{}' (elasticity {:.2}): small changes have large effects",
                impact.variable_name, impact.elasticity
            ));
        }
    }

    if recs.is_empty() {
        recs.push("Score is robust to the modeled variables".to_string());
    }
    recs
}
