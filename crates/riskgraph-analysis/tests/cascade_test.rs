//! Cascade-length estimation over the trigger graph.

use riskgraph_analysis::estimate_cascade_length;
use riskgraph_core::{CorrelationKind, CorrelationSource, RiskId};
use test_fixtures::correlation_by_id;

fn triggers(a: RiskId, b: RiskId, strength: u8) -> riskgraph_core::RiskCorrelation {
    correlation_by_id(a, b, CorrelationKind::Triggers, strength, CorrelationSource::Heuristic)
}

#[test]
fn no_edges_means_zero() {
    assert_eq!(estimate_cascade_length(&[]), 0);
}

#[test]
fn non_trigger_kinds_are_ignored() {
    let (a, b) = (RiskId::new(), RiskId::new());
    let amplifies = correlation_by_id(
        a,
        b,
        CorrelationKind::Amplifies,
        80,
        CorrelationSource::Heuristic,
    );
    assert_eq!(estimate_cascade_length(&[amplifies]), 0);
}

#[test]
fn linear_chain_counts_nodes() {
    let (a, b, c) = (RiskId::new(), RiskId::new(), RiskId::new());
    let chain = [triggers(a, b, 50), triggers(b, c, 50)];
    assert_eq!(estimate_cascade_length(&chain), 3);
}

#[test]
fn single_edge_is_a_chain_of_two() {
    let (a, b) = (RiskId::new(), RiskId::new());
    assert_eq!(estimate_cascade_length(&[triggers(a, b, 50)]), 2);
}

#[test]
fn cycle_terminates_with_bounded_length() {
    let (a, b) = (RiskId::new(), RiskId::new());
    let cycle = [triggers(a, b, 50), triggers(b, a, 50)];
    assert_eq!(estimate_cascade_length(&cycle), 2);
}

#[test]
fn longer_cycle_terminates() {
    let (a, b, c) = (RiskId::new(), RiskId::new(), RiskId::new());
    let cycle = [triggers(a, b, 50), triggers(b, c, 50), triggers(c, a, 50)];
    assert_eq!(estimate_cascade_length(&cycle), 3);
}

#[test]
fn branching_takes_the_deepest_path() {
    let (a, b, c, d) = (RiskId::new(), RiskId::new(), RiskId::new(), RiskId::new());
    // a → b, a → c → d: deepest is a, c, d.
    let edges = [triggers(a, b, 50), triggers(a, c, 50), triggers(c, d, 50)];
    assert_eq!(estimate_cascade_length(&edges), 3);
}

#[test]
fn node_reachable_via_two_branches_counts_on_each() {
    let (a, b, c, d) = (RiskId::new(), RiskId::new(), RiskId::new(), RiskId::new());
    // Diamond: a → b → d and a → c → d. The per-path visited set lets
    // d be counted on whichever branch is walked; longest is still 3.
    let edges = [
        triggers(a, b, 50),
        triggers(b, d, 50),
        triggers(a, c, 50),
        triggers(c, d, 50),
    ];
    assert_eq!(estimate_cascade_length(&edges), 3);
}
