//! Heuristic detector behavior: degenerate inputs, order independence,
//! rule matching, similarity fallback, threshold forcing, and the cap.

use riskgraph_analysis::detect::detect;
use riskgraph_analysis::text;
use riskgraph_analysis::{KeywordRule, RuleSet};
use riskgraph_core::{CorrelationKind, DetectorConfig, Risk};
use test_fixtures::risk;

fn run(risks: &[Risk], config: &DetectorConfig) -> Vec<riskgraph_core::RiskCorrelation> {
    detect(risks, &RuleSet::default(), config)
}

#[test]
fn fewer_than_two_risks_yields_empty() {
    let config = DetectorConfig::default();
    assert!(run(&[], &config).is_empty());
    assert!(run(&[risk("Budget overrun on cloud spend")], &config).is_empty());
}

#[test]
fn tokenizer_normalizes_and_drops_short_tokens() {
    let tokens = text::tokenize("The API, v2 — now 15% slower!");
    // "the" survives (3 chars); "api" survives; "v2"/"15" are ≤ 2 and dropped.
    assert!(tokens.contains(&"the".to_string()));
    assert!(tokens.contains(&"api".to_string()));
    assert!(tokens.contains(&"now".to_string()));
    assert!(tokens.contains(&"slower".to_string()));
    assert!(!tokens.iter().any(|t| t.len() < 3));
}

#[test]
fn tokenizer_strips_non_ascii_and_counts_chars() {
    // Accented characters become separators; "café" keeps its
    // three-character ASCII stem while "naïve" splits into fragments
    // too short to survive.
    let tokens = text::tokenize("éé naïve café");
    assert_eq!(tokens, vec!["caf".to_string()]);
}

#[test]
fn jaccard_guards_and_identity() {
    let empty = text::token_set("");
    assert_eq!(text::jaccard(&empty, &empty), 0.0);

    let s = text::token_set("vendor shipment delayed");
    assert!((text::jaccard(&s, &s) - 1.0).abs() < f64::EPSILON);
}

#[test]
fn keyword_overlap_is_fuzzy_per_subtoken() {
    let tokens = text::token_set("vendor contract renegotiation");
    // "vendor lock-in" matches via its "vendor" sub-token.
    let overlap = text::keyword_overlap(&tokens, &["vendor lock-in", "shipment"]);
    assert!((overlap - 0.5).abs() < f64::EPSILON);
    assert_eq!(text::keyword_overlap(&tokens, &[]), 0.0);
}

#[test]
fn rule_match_beats_raw_similarity() {
    let risks = [
        risk("Budget overrun on cloud spend"),
        risk("Cost overrun in funding plan"),
    ];
    let out = run(&risks, &DetectorConfig::default());
    assert_eq!(out.len(), 1);
    let c = &out[0];
    // financial rule: overlaps 2/4 and 3/4, base 75; similarity 1/7.
    // 75 × 0.625 × 0.7 + 14.29 × 0.3 ≈ 37.1
    assert_eq!(c.kind, CorrelationKind::Amplifies);
    assert_eq!(c.strength.value(), 37);
    assert!(c.combined_probability.value() <= c.strength.value());
}

#[test]
fn runtime_built_rule_table_is_injectable() {
    let rules = RuleSet::custom(vec![KeywordRule {
        name: "logistics",
        keywords: &["freight", "customs"],
        kind: CorrelationKind::Triggers,
        base_strength: 90,
    }]);
    let risks = [
        risk("Freight backlog at the port"),
        risk("Customs inspection delays freight release"),
    ];
    let out = detect(&risks, &rules, &DetectorConfig::default());
    assert_eq!(out.len(), 1);
    // logistics rule: overlaps 1/2 and 2/2, base 90; similarity 1/8.
    // 90 × 0.75 × 0.7 + 12.5 × 0.3 = 51.
    assert_eq!(out[0].kind, CorrelationKind::Triggers);
    assert_eq!(out[0].strength.value(), 51);
}

#[test]
fn similarity_alone_produces_amplifies() {
    // No rule keywords anywhere; overlap 2 of 4 tokens → Jaccard 0.5.
    let risks = [risk("alpha beta gamma"), risk("alpha beta epsilon")];
    let out = run(&risks, &DetectorConfig::default());
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].kind, CorrelationKind::Amplifies);
    // 0.5 × 100 × 0.8 = 40.
    assert_eq!(out[0].strength.value(), 40);
}

#[test]
fn weak_pairs_are_forced_independent() {
    // Jaccard exactly 0.2 (2 shared / 10 union): raw strength 16 < 20.
    let risks = [
        risk("alpha beta gamma delta epsilon zeta"),
        risk("alpha beta theta iota kappa lambda"),
    ];

    // Hidden entirely by default.
    assert!(run(&risks, &DetectorConfig::default()).is_empty());

    // Visible as independent when asked for.
    let config = DetectorConfig {
        include_independent: true,
        ..DetectorConfig::default()
    };
    let out = run(&risks, &config);
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].kind, CorrelationKind::Independent);
    assert_eq!(out[0].strength.value(), 16);
}

#[test]
fn detection_is_order_independent() {
    let r1 = risk("Budget overrun on cloud spend");
    let r2 = risk("Cost overrun in funding plan");

    let forward = run(&[r1.clone(), r2.clone()], &DetectorConfig::default());
    let reversed = run(&[r2, r1], &DetectorConfig::default());

    assert_eq!(forward.len(), 1);
    assert_eq!(reversed.len(), 1);
    assert_eq!(forward[0].pair_key(), reversed[0].pair_key());
    assert_eq!(forward[0].kind, reversed[0].kind);
    assert_eq!(forward[0].strength, reversed[0].strength);
}

#[test]
fn output_sorted_and_capped() {
    let risks = [
        risk("Budget overrun on cloud spend"),
        risk("Cost overrun in funding plan"),
        risk("Funding shortfall forces budget cuts"),
        risk("Vendor delays shipment delivery"),
    ];
    let config = DetectorConfig {
        max_correlations: 2,
        ..DetectorConfig::default()
    };
    let out = run(&risks, &config);
    assert!(out.len() <= 2);
    for pair in out.windows(2) {
        assert!(pair[0].strength >= pair[1].strength);
    }
}

#[test]
fn cascade_effect_is_templated_per_kind() {
    let risks = [
        risk("Vendor delays shipment delivery"),
        risk("Shipment delivery window slips past vendor deadline"),
    ];
    let out = run(&risks, &DetectorConfig::default());
    assert!(!out.is_empty());
    let c = &out[0];
    assert_eq!(c.kind, CorrelationKind::Triggers);
    assert!(c.cascade_effect.contains("domino"));
}

#[test]
fn determinism_same_input_same_output() {
    let risks = [
        risk("Budget overrun on cloud spend"),
        risk("Vendor delays shipment delivery"),
        risk("Cost overrun in funding plan"),
    ];
    let config = DetectorConfig::default();
    let a = run(&risks, &config);
    let b = run(&risks, &config);
    assert_eq!(a, b);
}
