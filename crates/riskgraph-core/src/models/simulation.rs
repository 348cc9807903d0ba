//! Monte Carlo simulation inputs and outputs.

use serde::{Deserialize, Serialize};

/// A quantified risk fed to the simulator: how likely it is to
/// materialize and the score impact range if it does.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskFactor {
    pub name: String,
    /// Probability of the risk materializing, in [0, 1].
    pub probability: f64,
    pub impact_low: f64,
    pub impact_high: f64,
    pub category: RiskCategory,
}

/// Thematic bucket for a quantified risk factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskCategory {
    Technical,
    Market,
    Financial,
    Operational,
    Strategic,
    External,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ConfidenceInterval {
    pub lower_bound: f64,
    pub upper_bound: f64,
    pub confidence_level: f64,
}

/// One bucket of the simulated outcome distribution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioOutcome {
    pub name: String,
    /// Share of iterations landing in this bucket, in [0, 1].
    pub probability: f64,
    pub score_impact: f64,
    pub description: String,
}

/// Aggregate statistics over all simulated iterations.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SimulationReport {
    pub mean_score: f64,
    pub std_dev: f64,
    pub min_score: f64,
    pub max_score: f64,
    pub percentile_5: f64,
    pub percentile_25: f64,
    pub percentile_50: f64,
    pub percentile_75: f64,
    pub percentile_95: f64,
    pub confidence_interval: ConfidenceInterval,
    /// Share of iterations scoring below the failure threshold.
    pub risk_of_failure: f64,
    pub iterations_run: usize,
    pub scenario_distribution: Vec<ScenarioOutcome>,
}
