//! Monte Carlo risk simulation: draws each risk factor per iteration
//! and aggregates the resulting score distribution.

use riskgraph_core::constants::{
    DEFAULT_SIM_SEED, SCENARIO_ACCEPTABLE_FLOOR, SCENARIO_EXCELLENT_FLOOR, SCENARIO_GOOD_FLOOR,
    SCENARIO_POOR_FLOOR, SIM_FAILURE_THRESHOLD,
};
use riskgraph_core::{
    ConfidenceInterval, RiskFactor, ScenarioOutcome, SimulationConfig, SimulationReport,
};
use tracing::debug;

// Knuth MMIX linear congruential generator.
const LCG_MULTIPLIER: u64 = 6364136223846793005;
const LCG_INCREMENT: u64 = 1442695040888963407;

fn lcg_next(state: &mut u64) -> f64 {
    *state = state
        .wrapping_mul(LCG_MULTIPLIER)
        .wrapping_add(LCG_INCREMENT);
    (*state as f64) / (u64::MAX as f64)
}

/// Simulate `config.iterations` outcomes starting from `base_score`.
///
/// Each iteration draws every risk factor once: a uniform draw below
/// the factor's probability materializes it, and a second draw picks
/// an impact uniformly in `[impact_low, impact_high]` subtracted from
/// the score. Iteration results are clamped to [0, 100].
///
/// Fully deterministic: the generator is seeded from `config.seed`
/// (or a fixed default), so the same inputs reproduce the same report.
/// Zero iterations return an all-zero report.
pub fn run_simulation(
    base_score: f64,
    risks: &[RiskFactor],
    config: &SimulationConfig,
) -> SimulationReport {
    if config.iterations == 0 {
        return SimulationReport::default();
    }

    let mut state = config.seed.unwrap_or(DEFAULT_SIM_SEED);
    let mut results: Vec<f64> = Vec::with_capacity(config.iterations);

    for _ in 0..config.iterations {
        let mut score = base_score;
        for risk in risks {
            if lcg_next(&mut state) < risk.probability {
                let range = risk.impact_high - risk.impact_low;
                let impact = risk.impact_low + range * lcg_next(&mut state);
                score -= impact;
            }
        }
        results.push(score.clamp(0.0, 100.0));
    }

    results.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let n = results.len() as f64;
    let mean_score = results.iter().sum::<f64>() / n;
    let variance = results.iter().map(|x| (x - mean_score).powi(2)).sum::<f64>() / n;

    // Nearest-rank percentile over the sorted results.
    let percentile = |p: f64| -> f64 {
        let idx = ((p / 100.0) * (results.len() - 1) as f64).round() as usize;
        results[idx]
    };

    let failure_count = results.iter().filter(|&&s| s < SIM_FAILURE_THRESHOLD).count();

    let report = SimulationReport {
        mean_score,
        std_dev: variance.sqrt(),
        min_score: results[0],
        max_score: results[results.len() - 1],
        percentile_5: percentile(5.0),
        percentile_25: percentile(25.0),
        percentile_50: percentile(50.0),
        percentile_75: percentile(75.0),
        percentile_95: percentile(95.0),
        confidence_interval: ConfidenceInterval {
            lower_bound: percentile((1.0 - config.confidence_level) / 2.0 * 100.0),
            upper_bound: percentile((1.0 + config.confidence_level) / 2.0 * 100.0),
            confidence_level: config.confidence_level,
        },
        risk_of_failure: failure_count as f64 / n,
        iterations_run: config.iterations,
        scenario_distribution: scenario_distribution(&results),
    };

    debug!(
        iterations = report.iterations_run,
        mean = report.mean_score,
        risk_of_failure = report.risk_of_failure,
        "simulation complete"
    );
    report
}

/// Bucket the sorted results into five named outcome scenarios.
fn scenario_distribution(results: &[f64]) -> Vec<ScenarioOutcome> {
    let n = results.len() as f64;
    let share = |floor: f64, ceil: f64| -> f64 {
        results.iter().filter(|&&s| s >= floor && s < ceil).count() as f64 / n
    };

    vec![
        ScenarioOutcome {
            name: "Excellent".to_string(),
            probability: share(SCENARIO_EXCELLENT_FLOOR, f64::INFINITY),
            score_impact: 0.0,
            description: "All objectives met with minimal issues".to_string(),
        },
        ScenarioOutcome {
            name: "Good".to_string(),
            probability: share(SCENARIO_GOOD_FLOOR, SCENARIO_EXCELLENT_FLOOR),
            score_impact: -10.0,
            description: "Succeeds with minor adjustments".to_string(),
        },
        ScenarioOutcome {
            name: "Acceptable".to_string(),
            probability: share(SCENARIO_ACCEPTABLE_FLOOR, SCENARIO_GOOD_FLOOR),
            score_impact: -25.0,
            description: "Basic objectives met, with challenges".to_string(),
        },
        ScenarioOutcome {
            name: "Poor".to_string(),
            probability: share(SCENARIO_POOR_FLOOR, SCENARIO_ACCEPTABLE_FLOOR),
            score_impact: -45.0,
            description: "Significant obstacles, revision needed".to_string(),
        },
        ScenarioOutcome {
            name: "Failure".to_string(),
            probability: share(f64::NEG_INFINITY, SCENARIO_POOR_FLOOR),
            score_impact: -70.0,
            description: "Likely to fail without major intervention".to_string(),
        },
    ]
}
