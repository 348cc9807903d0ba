//! Heuristic correlation detector: evaluates every unordered pair of
//! risks against token similarity and the keyword rule table.

pub mod templates;

use riskgraph_core::constants::{
    DIRECT_SIMILARITY_FLOOR, DIRECT_SIMILARITY_WEIGHT, JOINT_PROBABILITY_FACTOR, RULE_WEIGHT,
    SIMILARITY_WEIGHT,
};
use riskgraph_core::{
    CorrelationKind, CorrelationSource, DetectorConfig, Risk, RiskCorrelation, Strength,
};
use tracing::debug;

use crate::rules::{KeywordRule, RuleSet};
use crate::text;

/// Detect correlations across every unordered pair of risks.
///
/// Pure function of the inputs: same risks, rules, and config always
/// produce the same output. Fewer than 2 risks returns an empty list.
pub fn detect(risks: &[Risk], rules: &RuleSet, config: &DetectorConfig) -> Vec<RiskCorrelation> {
    if risks.len() < 2 {
        return Vec::new();
    }

    let token_sets: Vec<_> = risks.iter().map(|r| text::token_set(&r.text)).collect();

    let mut correlations = Vec::new();
    for i in 0..risks.len() {
        for j in (i + 1)..risks.len() {
            let similarity = text::jaccard(&token_sets[i], &token_sets[j]);
            let best_rule = best_rule_for_pair(rules, &token_sets[i], &token_sets[j], config);

            let (kind, raw_strength) = match best_rule {
                Some((rule, rule_score)) => (
                    rule.kind,
                    f64::from(rule.base_strength) * rule_score * RULE_WEIGHT
                        + similarity * 100.0 * SIMILARITY_WEIGHT,
                ),
                None if similarity >= DIRECT_SIMILARITY_FLOOR => (
                    CorrelationKind::Amplifies,
                    similarity * 100.0 * DIRECT_SIMILARITY_WEIGHT,
                ),
                None => (CorrelationKind::Independent, 0.0),
            };

            let strength = Strength::from_f64(raw_strength);
            let kind = if strength.value() < config.min_correlation_strength {
                CorrelationKind::Independent
            } else {
                kind
            };

            if strength.value() >= config.min_correlation_strength || config.include_independent {
                correlations.push(RiskCorrelation {
                    risk_a: risks[i].id,
                    risk_b: risks[j].id,
                    kind,
                    strength,
                    cascade_effect: templates::render(kind, &risks[i].text, &risks[j].text),
                    combined_probability: Strength::from_f64(
                        strength.as_f64() * JOINT_PROBABILITY_FACTOR,
                    ),
                    source: CorrelationSource::Heuristic,
                });
            }
        }
    }

    // Stable sort keeps pair-generation order among equal strengths.
    correlations.sort_by(|a, b| b.strength.cmp(&a.strength));
    correlations.truncate(config.max_correlations);

    debug!(
        risks = risks.len(),
        correlations = correlations.len(),
        "heuristic detection complete"
    );
    correlations
}

/// Find the best-matching rule for a pair: a rule is a candidate only
/// if BOTH risks individually exceed the overlap threshold; among
/// candidates, the highest mean overlap wins.
fn best_rule_for_pair<'r>(
    rules: &'r RuleSet,
    tokens_a: &std::collections::HashSet<String>,
    tokens_b: &std::collections::HashSet<String>,
    config: &DetectorConfig,
) -> Option<(&'r KeywordRule, f64)> {
    let mut best: Option<(&KeywordRule, f64)> = None;
    for rule in rules.rules() {
        let overlap_a = text::keyword_overlap(tokens_a, rule.keywords);
        let overlap_b = text::keyword_overlap(tokens_b, rule.keywords);
        if overlap_a <= config.keyword_overlap_threshold
            || overlap_b <= config.keyword_overlap_threshold
        {
            continue;
        }
        let score = (overlap_a + overlap_b) / 2.0;
        match best {
            Some((_, best_score)) if score <= best_score => {}
            _ => best = Some((rule, score)),
        }
    }
    best
}
