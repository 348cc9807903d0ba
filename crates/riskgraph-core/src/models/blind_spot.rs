//! Blind spots: scored severity data supplied by an out-of-scope
//! model-driven adversarial review.

use serde::{Deserialize, Serialize};

use crate::risk::Strength;

/// How hard a blind spot is to notice before it materializes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DetectionDifficulty {
    Easy,
    Medium,
    Hard,
}

/// A blind spot identified by the external stress test.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StressTestBlindSpot {
    pub id: String,
    pub title: String,
    pub probability_score: Strength,
    pub impact_score: Strength,
    pub detection_difficulty: DetectionDifficulty,
}
