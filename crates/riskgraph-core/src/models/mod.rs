//! Output and input artifacts of the analysis engine.

pub mod blind_spot;
pub mod correlation;
pub mod decay;
pub mod matrix;
pub mod sensitivity;
pub mod simulation;

pub use blind_spot::{DetectionDifficulty, StressTestBlindSpot};
pub use correlation::{CorrelationKind, CorrelationSource, RiskCorrelation};
pub use decay::{DecayClass, DecayFactor, DecayPoint, DecayReport};
pub use matrix::{MatrixCell, MatrixStats, MatrixSummary, ProbabilityMatrix, Quadrant, RiskLevel};
pub use sensitivity::{SensitivityReport, SensitivityVariable, TornadoBar, VariableImpact};
pub use simulation::{
    ConfidenceInterval, RiskCategory, RiskFactor, ScenarioOutcome, SimulationReport,
};
