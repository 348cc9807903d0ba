//! # riskgraph-core
//!
//! Foundation crate for the riskgraph analysis engine.
//! Defines all types, config, errors, and constants.
//! The engine crate depends on this and adds the algorithms.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod risk;

// Re-export the most commonly used types at the crate root.
pub use config::{DetectorConfig, EngineConfig, SimulationConfig};
pub use errors::{RiskGraphError, RiskGraphResult};
pub use models::{
    ConfidenceInterval, CorrelationKind, CorrelationSource, DecayClass, DecayFactor, DecayPoint,
    DecayReport, DetectionDifficulty, MatrixCell, MatrixStats, MatrixSummary, ProbabilityMatrix,
    Quadrant, RiskCategory, RiskCorrelation, RiskFactor, RiskLevel, ScenarioOutcome,
    SensitivityReport, SensitivityVariable, SimulationReport, StressTestBlindSpot, TornadoBar,
    VariableImpact,
};
pub use risk::{Risk, RiskId, Strength};
