//! Shared builders for riskgraph integration tests and benchmarks.

use riskgraph_core::{
    CorrelationKind, CorrelationSource, DetectionDifficulty, Risk, RiskCorrelation, RiskId,
    Strength, StressTestBlindSpot,
};

/// A risk with a fresh id.
pub fn risk(text: &str) -> Risk {
    Risk::new(text)
}

/// A heuristic-sourced correlation between two risks.
pub fn correlation(
    a: &Risk,
    b: &Risk,
    kind: CorrelationKind,
    strength: u8,
) -> RiskCorrelation {
    correlation_by_id(a.id, b.id, kind, strength, CorrelationSource::Heuristic)
}

/// An external (model-supplied) correlation between two risks.
pub fn external_correlation(
    a: &Risk,
    b: &Risk,
    kind: CorrelationKind,
    strength: u8,
) -> RiskCorrelation {
    correlation_by_id(a.id, b.id, kind, strength, CorrelationSource::External)
}

/// A correlation built directly from ids.
pub fn correlation_by_id(
    risk_a: RiskId,
    risk_b: RiskId,
    kind: CorrelationKind,
    strength: u8,
    source: CorrelationSource,
) -> RiskCorrelation {
    RiskCorrelation {
        risk_a,
        risk_b,
        kind,
        strength: Strength::from(strength),
        cascade_effect: format!("test correlation ({kind})"),
        combined_probability: Strength::from(strength),
        source,
    }
}

/// A blind spot with the given severity scores.
pub fn blind_spot(
    id: &str,
    title: &str,
    probability: u8,
    impact: u8,
    difficulty: DetectionDifficulty,
) -> StressTestBlindSpot {
    StressTestBlindSpot {
        id: id.to_string(),
        title: title.to_string(),
        probability_score: Strength::from(probability),
        impact_score: Strength::from(impact),
        detection_difficulty: difficulty,
    }
}
