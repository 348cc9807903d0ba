//! The probability matrix and its derived reporting artifacts.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::QUADRANT_MIDPOINT;
use crate::models::correlation::RiskCorrelation;
use crate::risk::Strength;

/// Primary output artifact of the engine. Read-only once produced;
/// recomputed from scratch on every input change.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProbabilityMatrix {
    pub overall_failure_risk: Strength,
    pub risk_correlations: Vec<RiskCorrelation>,
    /// Hub risk first, then its neighbors. Labels truncated to 80
    /// characters, at most 6 entries.
    pub highest_risk_cluster: Vec<String>,
    /// At most 5 entries.
    pub single_point_of_failures: Vec<String>,
    pub risk_diversity_score: Strength,
}

/// Coarse severity bucket for the quadrant chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Quadrant {
    Critical,
    High,
    Medium,
    Low,
}

impl Quadrant {
    /// Classify a (probability, impact) pair against the 50/50 midpoint.
    /// Scores exactly at the midpoint fall into the lower bucket.
    pub fn classify(probability: Strength, impact: Strength) -> Self {
        let p = probability.value() > QUADRANT_MIDPOINT;
        let i = impact.value() > QUADRANT_MIDPOINT;
        match (p, i) {
            (true, true) => Self::Critical,
            (false, true) => Self::High,
            (true, false) => Self::Medium,
            (false, false) => Self::Low,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

impl fmt::Display for Quadrant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One cell of the quadrant visualization. Derived, never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatrixCell {
    pub risk_id: String,
    pub label: String,
    pub probability: Strength,
    pub impact: Strength,
    pub quadrant: Quadrant,
}

/// Aggregate statistics over a computed matrix.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MatrixStats {
    /// Distinct risks referenced by any correlation.
    pub total_risks: usize,
    pub correlated_pairs: usize,
    pub independent_pairs: usize,
    /// Mean strength among non-independent pairs.
    pub avg_strength: f64,
    /// Maximum strength among non-independent pairs.
    pub max_strength: Strength,
    /// Longest trigger chain through the matrix's own correlations.
    pub cascade_chain_length: usize,
    pub spof_count: usize,
    pub diversity_score: Strength,
}

/// Overall risk-level label derived from fixed thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    Critical,
    High,
    Moderate,
    Low,
}

impl RiskLevel {
    pub fn from_score(score: Strength) -> Self {
        let v = score.value();
        if v >= 75 {
            Self::Critical
        } else if v >= 50 {
            Self::High
        } else if v >= 25 {
            Self::Moderate
        } else {
            Self::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Critical => "Critical",
            Self::High => "High",
            Self::Moderate => "Moderate",
            Self::Low => "Low",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Flat record for exported reports and spreadsheets.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatrixSummary {
    pub overall_failure_risk: Strength,
    pub risk_level: String,
    pub total_risks: usize,
    pub correlated_pairs: usize,
    pub independent_pairs: usize,
    pub avg_strength: f64,
    pub max_strength: Strength,
    pub cascade_chain_length: usize,
    pub spof_count: usize,
    pub diversity_score: Strength,
    /// One-line natural-language summary.
    pub headline: String,
}
