//! Named constants for every empirically-tuned weight in the severity
//! model. Changing any of these is a behavior change, not a refactor,
//! and must come with updated golden-output tests.

/// Riskgraph version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// ---------------------------------------------------------------------------
// Heuristic detector
// ---------------------------------------------------------------------------

/// Weight of the best keyword rule's score in pair strength.
pub const RULE_WEIGHT: f64 = 0.7;

/// Weight of direct token similarity in pair strength (rule present).
pub const SIMILARITY_WEIGHT: f64 = 0.3;

/// Minimum Jaccard similarity for a rule-less pair to correlate.
pub const DIRECT_SIMILARITY_FLOOR: f64 = 0.2;

/// Strength multiplier for rule-less, similarity-only correlations.
pub const DIRECT_SIMILARITY_WEIGHT: f64 = 0.8;

/// Discount mapping pair strength to combined probability.
pub const JOINT_PROBABILITY_FACTOR: f64 = 0.8;

/// Tokens this short carry no signal and are dropped.
pub const MIN_TOKEN_LEN: usize = 3;

/// Risk labels are truncated to this many characters in cascade text.
pub const CASCADE_LABEL_LEN: usize = 40;

// ---------------------------------------------------------------------------
// Matrix computer — overall failure risk
// ---------------------------------------------------------------------------

/// Failure risk every analysis starts from.
pub const BASELINE_FAILURE_RISK: f64 = 20.0;

/// Weight of the mean non-independent correlation strength.
pub const CORRELATION_MEAN_WEIGHT: f64 = 0.30;

/// Additive bonus per triggers-kind correlation.
pub const TRIGGER_BONUS: f64 = 5.0;

/// Additive bonus per masks-kind correlation.
pub const MASKING_BONUS: f64 = 4.0;

/// Additive bonus per blind spot with probability and impact ≥ 70.
pub const CRITICAL_SPOT_BONUS: f64 = 8.0;

/// Probability/impact floor for the critical blind-spot bonus.
pub const CRITICAL_SPOT_FLOOR: u8 = 70;

/// Weight of the mean blind-spot risk (p×i/100) term.
pub const BLIND_SPOT_MEAN_WEIGHT: f64 = 0.20;

// ---------------------------------------------------------------------------
// Matrix computer — diversity
// ---------------------------------------------------------------------------

/// Diversity assumed when no correlations exist at all.
pub const DEFAULT_DIVERSITY: u8 = 80;

/// Correlations below this strength do not count toward the coupling ratio.
pub const DIVERSITY_STRENGTH_FLOOR: u8 = 30;

/// Weight of the coupling ratio in the diversity penalty.
pub const DIVERSITY_RATIO_WEIGHT: f64 = 50.0;

/// Weight of the mean strength in the diversity penalty.
pub const DIVERSITY_STRENGTH_WEIGHT: f64 = 50.0;

// ---------------------------------------------------------------------------
// Cluster and SPOF detection
// ---------------------------------------------------------------------------

/// Minimum strength for an edge to join the cluster adjacency.
pub const CLUSTER_EDGE_FLOOR: u8 = 30;

/// Maximum entries in the highest-risk cluster.
pub const CLUSTER_CAP: usize = 6;

/// Cluster/SPOF labels are truncated to this many characters.
pub const LABEL_TRUNCATE_LEN: usize = 80;

/// Minimum strength for a trigger edge to count toward SPOF out-degree.
pub const SPOF_TRIGGER_FLOOR: u8 = 40;

/// Out-degree at which a risk becomes a single point of failure.
pub const SPOF_OUT_DEGREE: usize = 2;

/// Probability/impact floor for a blind spot to qualify as a SPOF.
pub const SPOF_BLIND_SPOT_FLOOR: u8 = 65;

/// Maximum SPOF entries reported.
pub const SPOF_CAP: usize = 5;

/// Title prefix length used to deduplicate SPOF entries.
pub const SPOF_TITLE_PREFIX_LEN: usize = 30;

// ---------------------------------------------------------------------------
// Reporting
// ---------------------------------------------------------------------------

/// Probability/impact midpoint separating matrix quadrants.
pub const QUADRANT_MIDPOINT: u8 = 50;

// ---------------------------------------------------------------------------
// Monte Carlo simulator
// ---------------------------------------------------------------------------

/// Iterations scoring below this count toward the risk of failure.
pub const SIM_FAILURE_THRESHOLD: f64 = 60.0;

/// Scenario bucket floors: excellent / good / acceptable / poor.
pub const SCENARIO_EXCELLENT_FLOOR: f64 = 90.0;
pub const SCENARIO_GOOD_FLOOR: f64 = 75.0;
pub const SCENARIO_ACCEPTABLE_FLOOR: f64 = 60.0;
pub const SCENARIO_POOR_FLOOR: f64 = 40.0;

/// Seed used when the config supplies none; keeps runs reproducible.
pub const DEFAULT_SIM_SEED: u64 = 12345;

// ---------------------------------------------------------------------------
// Sensitivity analysis
// ---------------------------------------------------------------------------

/// Scales a variable's weighted relative delta into score points.
pub const SENSITIVITY_IMPACT_SCALE: f64 = 20.0;

/// |elasticity| above which a variable is critical.
pub const CRITICAL_ELASTICITY: f64 = 0.5;

/// |score range| above which a variable is critical.
pub const CRITICAL_SCORE_RANGE: f64 = 15.0;

/// |elasticity| above which a dedicated high-sensitivity note is added.
pub const STEEP_ELASTICITY: f64 = 1.0;

// ---------------------------------------------------------------------------
// Decision decay
// ---------------------------------------------------------------------------

/// Half-life floors (days) for the Stable / Moderate / Volatile classes.
pub const DECAY_STABLE_FLOOR_DAYS: f64 = 180.0;
pub const DECAY_MODERATE_FLOOR_DAYS: f64 = 60.0;
pub const DECAY_VOLATILE_FLOOR_DAYS: f64 = 14.0;

/// Half-life mapping to a stability score of 100.
pub const STABILITY_FULL_HORIZON_DAYS: f64 = 365.0;

/// Divisor applied to `volatility × √day` for the uncertainty band.
pub const VOLATILITY_MARGIN_SCALE: f64 = 10.0;

/// Decay rates are expressed in percent-per-day units.
pub const DECAY_RATE_SCALE: f64 = 100.0;

/// Review is due at this fraction of the half-life.
pub const REVIEW_LEAD_FACTOR: f64 = 0.5;
