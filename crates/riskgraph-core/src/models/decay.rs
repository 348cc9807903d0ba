//! Decision decay inputs and outputs: how fast a decision's
//! confidence erodes and when it should be revisited.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One force eroding a decision's confidence over time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecayFactor {
    pub name: String,
    /// Exponential decay rate, in percent per day units.
    pub decay_rate: f64,
    /// Widens the timeline's uncertainty band over time.
    pub volatility: f64,
}

/// One day on the projected confidence timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecayPoint {
    pub day: u32,
    pub confidence: f64,
    pub upper_bound: f64,
    pub lower_bound: f64,
}

/// Coarse stability bucket derived from the half-life.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DecayClass {
    /// Half-life beyond 180 days.
    Stable,
    /// Half-life 60 to 180 days.
    Moderate,
    /// Half-life 14 to 60 days.
    Volatile,
    /// Half-life under 14 days.
    Critical,
}

impl DecayClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Stable => "Stable",
            Self::Moderate => "Moderate",
            Self::Volatile => "Volatile",
            Self::Critical => "Critical",
        }
    }
}

impl fmt::Display for DecayClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecayReport {
    pub half_life_days: f64,
    pub confidence_timeline: Vec<DecayPoint>,
    /// Days until the decision should be reviewed.
    pub review_after_days: u32,
    pub decay_class: DecayClass,
    /// 0–100; 100 means a half-life of a year or more.
    pub stability_score: f64,
    pub recommendations: Vec<String>,
}
