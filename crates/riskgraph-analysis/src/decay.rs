//! Decision decay: projects confidence erosion over time and derives
//! a half-life, stability class, and review schedule.

use riskgraph_core::constants::{
    DECAY_MODERATE_FLOOR_DAYS, DECAY_RATE_SCALE, DECAY_STABLE_FLOOR_DAYS,
    DECAY_VOLATILE_FLOOR_DAYS, REVIEW_LEAD_FACTOR, STABILITY_FULL_HORIZON_DAYS,
    VOLATILITY_MARGIN_SCALE,
};
use riskgraph_core::{DecayClass, DecayFactor, DecayPoint, DecayReport};
use tracing::debug;

/// Project `initial_confidence` over `horizon_days` under exponential
/// decay.
///
/// ```text
/// confidence(day) = initial × exp(−rate × day / 100)
/// ```
///
/// where `rate` is the mean decay rate over all factors, with an
/// uncertainty band of `volatility × √day / 10` around each point.
/// Half-life is the first day confidence drops to half the initial
/// value, extrapolated analytically when the horizon is too short.
/// An empty factor list yields a flat timeline classified Stable.
pub fn estimate_decay(
    initial_confidence: f64,
    factors: &[DecayFactor],
    horizon_days: u32,
) -> DecayReport {
    let (rate, volatility) = if factors.is_empty() {
        (0.0, 0.0)
    } else {
        let n = factors.len() as f64;
        (
            factors.iter().map(|f| f.decay_rate).sum::<f64>() / n,
            factors.iter().map(|f| f.volatility).sum::<f64>() / n,
        )
    };

    let mut confidence_timeline = Vec::with_capacity(horizon_days as usize + 1);
    let mut half_life_days = None;

    for day in 0..=horizon_days {
        let confidence = initial_confidence * (-(rate * f64::from(day) / DECAY_RATE_SCALE)).exp();
        let margin = volatility * f64::from(day).sqrt() / VOLATILITY_MARGIN_SCALE;

        confidence_timeline.push(DecayPoint {
            day,
            confidence,
            upper_bound: (confidence + margin).min(100.0),
            lower_bound: (confidence - margin).max(0.0),
        });

        if half_life_days.is_none() && confidence <= initial_confidence / 2.0 && day > 0 {
            half_life_days = Some(f64::from(day));
        }
    }

    // Not reached within the horizon: solve exp(−rate·t/100) = 1/2.
    let half_life_days = half_life_days.unwrap_or_else(|| {
        if rate > 0.0 {
            std::f64::consts::LN_2 / (rate / DECAY_RATE_SCALE)
        } else {
            f64::from(horizon_days)
        }
    });

    // Zero aggregate rate means no decay at all, whatever the horizon.
    let decay_class = if rate <= 0.0 || half_life_days > DECAY_STABLE_FLOOR_DAYS {
        DecayClass::Stable
    } else if half_life_days > DECAY_MODERATE_FLOOR_DAYS {
        DecayClass::Moderate
    } else if half_life_days > DECAY_VOLATILE_FLOOR_DAYS {
        DecayClass::Volatile
    } else {
        DecayClass::Critical
    };

    let stability_score = if rate <= 0.0 {
        100.0
    } else {
        (half_life_days / STABILITY_FULL_HORIZON_DAYS * 100.0).min(100.0)
    };

    let report = DecayReport {
        half_life_days,
        confidence_timeline,
        review_after_days: (half_life_days * REVIEW_LEAD_FACTOR).round() as u32,
        decay_class,
        stability_score,
        recommendations: recommendations(decay_class, half_life_days),
    };

    debug!(
        half_life = report.half_life_days,
        class = %report.decay_class,
        "decay estimate complete"
    );
    report
}

fn recommendations(class: DecayClass, half_life: f64) -> Vec<String> {
    match class {
        DecayClass::Critical => vec![
            "Very short validity window: act before conditions shift".to_string(),
            format!("Schedule a review within {} days", (half_life * 0.3).round() as u32),
            "Look for ways to make the decision less time-sensitive".to_string(),
        ],
        DecayClass::Volatile => vec![
            "Requires frequent monitoring".to_string(),
            format!("Plan a review every {} days", (half_life * 0.4).round() as u32),
            "Identify the assumptions driving the volatility".to_string(),
        ],
        DecayClass::Moderate => vec![
            "Reasonable stability".to_string(),
            format!(
                "Schedule a quarterly review (every {} days)",
                (half_life * 0.5).round() as u32
            ),
        ],
        DecayClass::Stable => vec![
            "Highly stable".to_string(),
            "An annual review is sufficient".to_string(),
            "Watch for events that could invalidate the core assumptions".to_string(),
        ],
    }
}
