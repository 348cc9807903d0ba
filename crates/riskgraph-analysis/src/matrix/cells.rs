//! Quadrant-chart cells, derived on demand and never stored.

use riskgraph_core::{MatrixCell, Quadrant, StressTestBlindSpot};

/// Derive visualization cells from scored blind spots, the only input
/// carrying probability/impact pairs.
pub fn cells_from_blind_spots(blind_spots: &[StressTestBlindSpot]) -> Vec<MatrixCell> {
    blind_spots
        .iter()
        .map(|spot| MatrixCell {
            risk_id: spot.id.clone(),
            label: spot.title.clone(),
            probability: spot.probability_score,
            impact: spot.impact_score,
            quadrant: Quadrant::classify(spot.probability_score, spot.impact_score),
        })
        .collect()
}
