use criterion::{criterion_group, criterion_main, Criterion};

use riskgraph_analysis::{estimate_cascade_length, RiskEngine};
use riskgraph_core::{CorrelationKind, CorrelationSource, Risk, RiskId};
use test_fixtures::correlation_by_id;

/// Build a few dozen risks mixing rule vocabulary, the expected upper
/// end of real input.
fn build_risk_set(n: usize) -> Vec<Risk> {
    let themes = [
        "budget overrun on vendor contract renewal",
        "shipment delivery slips past the deadline",
        "customer churn after a missed release",
        "team attrition in the platform group",
        "infrastructure outage during migration",
        "compliance audit finds gaps",
        "data breach through a vendor integration",
        "funding shortfall forces scope cuts",
    ];
    (0..n)
        .map(|i| Risk::new(format!("{} (scenario {i})", themes[i % themes.len()])))
        .collect()
}

fn bench_full_analysis_30_risks(c: &mut Criterion) {
    let risks = build_risk_set(30);
    let engine = RiskEngine::new();

    c.bench_function("full_analysis_30_risks", |b| {
        b.iter(|| engine.analyze(&risks, &[], &[]));
    });
}

fn bench_cascade_deep_chain(c: &mut Criterion) {
    // 50-node chain with a branch at every fifth node. Kept sparse:
    // the longest-simple-path walk is exponential on dense graphs.
    let ids: Vec<RiskId> = (0..50).map(|_| RiskId::new()).collect();
    let mut correlations = Vec::new();
    for i in 0..ids.len() - 1 {
        correlations.push(correlation_by_id(
            ids[i],
            ids[i + 1],
            CorrelationKind::Triggers,
            60,
            CorrelationSource::Heuristic,
        ));
        if i % 5 == 0 && i + 2 < ids.len() {
            correlations.push(correlation_by_id(
                ids[i],
                ids[i + 2],
                CorrelationKind::Triggers,
                45,
                CorrelationSource::Heuristic,
            ));
        }
    }

    c.bench_function("cascade_length_deep_chain", |b| {
        b.iter(|| estimate_cascade_length(&correlations));
    });
}

criterion_group!(benches, bench_full_analysis_30_risks, bench_cascade_deep_chain);
criterion_main!(benches);
