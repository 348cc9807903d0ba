//! Typed, scored correlation between two risks.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::risk::{RiskId, Strength};

/// How two risks interact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CorrelationKind {
    /// Co-occurrence worsens impact.
    Amplifies,
    /// One risk can directly cause the other.
    Triggers,
    /// One risk hides early signals of the other.
    Masks,
    /// No meaningful relationship detected.
    Independent,
}

impl CorrelationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Amplifies => "amplifies",
            Self::Triggers => "triggers",
            Self::Masks => "masks",
            Self::Independent => "independent",
        }
    }
}

impl fmt::Display for CorrelationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which tier produced a correlation. External results come from a
/// model-driven stress test and outrank heuristic ones in the merger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CorrelationSource {
    Heuristic,
    External,
}

/// A scored interaction between an unordered pair of risks.
///
/// For `Triggers`-kind correlations the direction is `risk_a → risk_b`;
/// for every other kind the pair is symmetric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskCorrelation {
    pub risk_a: RiskId,
    pub risk_b: RiskId,
    pub kind: CorrelationKind,
    pub strength: Strength,
    /// Human-readable domino description, templated per kind.
    pub cascade_effect: String,
    pub combined_probability: Strength,
    pub source: CorrelationSource,
}

impl RiskCorrelation {
    /// Canonical unordered key: the two ids sorted lexicographically.
    /// `(a, b)` and `(b, a)` produce the same key.
    pub fn pair_key(&self) -> (RiskId, RiskId) {
        pair_key(self.risk_a, self.risk_b)
    }
}

/// Canonical unordered pair key for two risk ids.
pub fn pair_key(a: RiskId, b: RiskId) -> (RiskId, RiskId) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}
