//! Trust-tiered merge of external and heuristic correlation sets.

use riskgraph_analysis::merge::merge;
use riskgraph_core::{CorrelationKind, CorrelationSource, RiskId};
use test_fixtures::correlation_by_id;

fn external(a: RiskId, b: RiskId, strength: u8) -> riskgraph_core::RiskCorrelation {
    correlation_by_id(a, b, CorrelationKind::Triggers, strength, CorrelationSource::External)
}

fn heuristic(a: RiskId, b: RiskId, strength: u8) -> riskgraph_core::RiskCorrelation {
    correlation_by_id(a, b, CorrelationKind::Amplifies, strength, CorrelationSource::Heuristic)
}

#[test]
fn heuristic_overrides_only_when_strictly_stronger() {
    let (a, b) = (RiskId::new(), RiskId::new());

    // 70 > 40: heuristic wins.
    let merged = merge(&[external(a, b, 40)], &[heuristic(a, b, 70)]);
    assert_eq!(merged.len(), 1);
    assert_eq!(merged[0].strength.value(), 70);
    assert_eq!(merged[0].source, CorrelationSource::Heuristic);

    // Equal strength is not strictly greater: external wins.
    let merged = merge(&[external(a, b, 70)], &[heuristic(a, b, 70)]);
    assert_eq!(merged.len(), 1);
    assert_eq!(merged[0].source, CorrelationSource::External);

    // 40 < 70: external wins.
    let merged = merge(&[external(a, b, 70)], &[heuristic(a, b, 40)]);
    assert_eq!(merged.len(), 1);
    assert_eq!(merged[0].strength.value(), 70);
    assert_eq!(merged[0].source, CorrelationSource::External);
}

#[test]
fn reversed_pair_order_is_the_same_key() {
    let (a, b) = (RiskId::new(), RiskId::new());
    // External lists (a, b); heuristic lists (b, a). Same pair.
    let merged = merge(&[external(a, b, 60)], &[heuristic(b, a, 30)]);
    assert_eq!(merged.len(), 1);
    assert_eq!(merged[0].source, CorrelationSource::External);
}

#[test]
fn disjoint_pairs_are_all_kept_sorted() {
    let (a, b, c, d) = (RiskId::new(), RiskId::new(), RiskId::new(), RiskId::new());
    let merged = merge(&[external(a, b, 30)], &[heuristic(c, d, 80), heuristic(a, c, 55)]);
    assert_eq!(merged.len(), 3);
    let strengths: Vec<u8> = merged.iter().map(|c| c.strength.value()).collect();
    assert_eq!(strengths, vec![80, 55, 30]);
}

#[test]
fn empty_sides_pass_through() {
    let (a, b) = (RiskId::new(), RiskId::new());
    assert_eq!(merge(&[], &[]).len(), 0);
    assert_eq!(merge(&[external(a, b, 50)], &[]).len(), 1);
    assert_eq!(merge(&[], &[heuristic(a, b, 50)]).len(), 1);
}
