//! RiskEngine: orchestrates the full pipeline.
//!
//! detect (pairwise heuristics) → merge (external trust tier) →
//! matrix (severity, diversity, cluster, SPOF) → report (stats/export).

use riskgraph_core::{
    DetectorConfig, MatrixCell, MatrixStats, MatrixSummary, ProbabilityMatrix, Risk,
    RiskCorrelation, StressTestBlindSpot,
};
use serde::Serialize;
use tracing::info;

use crate::detect;
use crate::matrix;
use crate::merge;
use crate::report;
use crate::rules::RuleSet;

/// Everything one analysis pass produces. Discarded once rendered;
/// the next input edit recomputes it from scratch.
#[derive(Debug, Clone, Serialize)]
pub struct Analysis {
    pub matrix: ProbabilityMatrix,
    pub cells: Vec<MatrixCell>,
    pub stats: MatrixStats,
    pub summary: MatrixSummary,
}

/// The main analysis engine. Synchronous and side-effect-free: the
/// rule table is immutable, so one engine can serve any number of
/// concurrent callers without locking.
pub struct RiskEngine {
    rules: RuleSet,
    config: DetectorConfig,
}

impl RiskEngine {
    pub fn new() -> Self {
        Self {
            rules: RuleSet::default(),
            config: DetectorConfig::default(),
        }
    }

    pub fn with_config(config: DetectorConfig) -> Self {
        Self {
            rules: RuleSet::default(),
            config,
        }
    }

    pub fn with_rules(rules: RuleSet, config: DetectorConfig) -> Self {
        Self { rules, config }
    }

    pub fn config(&self) -> &DetectorConfig {
        &self.config
    }

    /// Run a full analysis pass.
    ///
    /// `blind_spots` and `external_correlations` are optional
    /// model-supplied inputs; empty slices leave the engine running on
    /// pure heuristics.
    pub fn analyze(
        &self,
        risks: &[Risk],
        blind_spots: &[StressTestBlindSpot],
        external_correlations: &[RiskCorrelation],
    ) -> Analysis {
        let heuristic = detect::detect(risks, &self.rules, &self.config);
        let correlations = if external_correlations.is_empty() {
            heuristic
        } else {
            merge::merge(external_correlations, &heuristic)
        };

        let matrix = matrix::compute(&correlations, blind_spots, risks);
        let cells = matrix::cells::cells_from_blind_spots(blind_spots);
        let stats = report::stats(&matrix);
        let summary = report::summary(&matrix);

        info!(
            risks = risks.len(),
            correlations = matrix.risk_correlations.len(),
            failure_risk = matrix.overall_failure_risk.value(),
            cascade = stats.cascade_chain_length,
            "analysis pass complete"
        );

        Analysis {
            matrix,
            cells,
            stats,
            summary,
        }
    }
}

impl Default for RiskEngine {
    fn default() -> Self {
        Self::new()
    }
}
