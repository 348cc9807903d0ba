//! # riskgraph-analysis
//!
//! Deterministic risk-correlation and cascade-failure analysis.
//! Given free-text risk statements (and optional model-supplied blind
//! spots and correlations), the engine detects interacting risk pairs,
//! classifies the interaction, walks trigger chains, scores how
//! independent the risk set is, and flags single points of failure.
//! Standalone scenario analytics sit alongside the pipeline: seeded
//! Monte Carlo risk simulation, sensitivity analysis, and decision
//! decay estimation.
//!
//! Every function is a pure, synchronous transformation of its inputs;
//! the whole pipeline is O(n²) in the number of risks and cheap to
//! re-run from scratch on every edit.

pub mod decay;
pub mod detect;
pub mod engine;
pub mod graph;
pub mod matrix;
pub mod merge;
pub mod report;
pub mod rules;
pub mod sensitivity;
pub mod simulate;
pub mod text;

pub use decay::estimate_decay;
pub use engine::{Analysis, RiskEngine};
pub use graph::estimate_cascade_length;
pub use rules::{KeywordRule, RuleSet};
pub use sensitivity::analyze_sensitivity;
pub use simulate::run_simulation;
