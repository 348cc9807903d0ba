//! Engine configuration with serde defaults and TOML loading.

use serde::{Deserialize, Serialize};

use crate::errors::{RiskGraphError, RiskGraphResult};

mod defaults {
    pub const KEYWORD_OVERLAP_THRESHOLD: f64 = 0.15;
    pub const MIN_CORRELATION_STRENGTH: u8 = 20;
    pub const MAX_CORRELATIONS: usize = 15;
    pub const INCLUDE_INDEPENDENT: bool = false;
    pub const SIM_ITERATIONS: usize = 10_000;
    pub const SIM_CONFIDENCE_LEVEL: f64 = 0.95;
}

/// Tunable thresholds for the heuristic correlation detector.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectorConfig {
    /// Minimum per-risk keyword overlap for a rule to be a candidate.
    pub keyword_overlap_threshold: f64,
    /// Pairs below this strength are forced to independent.
    pub min_correlation_strength: u8,
    /// Maximum correlations returned, strongest first.
    pub max_correlations: usize,
    /// Whether independent pairs are emitted at all.
    pub include_independent: bool,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            keyword_overlap_threshold: defaults::KEYWORD_OVERLAP_THRESHOLD,
            min_correlation_strength: defaults::MIN_CORRELATION_STRENGTH,
            max_correlations: defaults::MAX_CORRELATIONS,
            include_independent: defaults::INCLUDE_INDEPENDENT,
        }
    }
}

impl DetectorConfig {
    pub fn validate(&self) -> RiskGraphResult<()> {
        if !(0.0..=1.0).contains(&self.keyword_overlap_threshold) {
            return Err(RiskGraphError::InvalidConfig {
                reason: format!(
                    "keyword_overlap_threshold must be in [0, 1], got {}",
                    self.keyword_overlap_threshold
                ),
            });
        }
        if self.min_correlation_strength > 100 {
            return Err(RiskGraphError::InvalidConfig {
                reason: format!(
                    "min_correlation_strength must be ≤ 100, got {}",
                    self.min_correlation_strength
                ),
            });
        }
        Ok(())
    }
}

/// Tunables for the Monte Carlo risk simulator.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub iterations: usize,
    /// None falls back to a fixed seed; runs stay deterministic.
    pub seed: Option<u64>,
    pub confidence_level: f64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            iterations: defaults::SIM_ITERATIONS,
            seed: None,
            confidence_level: defaults::SIM_CONFIDENCE_LEVEL,
        }
    }
}

impl SimulationConfig {
    pub fn validate(&self) -> RiskGraphResult<()> {
        if self.confidence_level <= 0.0 || self.confidence_level >= 1.0 {
            return Err(RiskGraphError::InvalidConfig {
                reason: format!(
                    "confidence_level must be in (0, 1), got {}",
                    self.confidence_level
                ),
            });
        }
        Ok(())
    }
}

/// Top-level engine configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub detector: DetectorConfig,
    pub simulation: SimulationConfig,
}

impl EngineConfig {
    /// Parse and validate a TOML config document.
    pub fn from_toml_str(raw: &str) -> RiskGraphResult<Self> {
        let config: Self = toml::from_str(raw)?;
        config.detector.validate()?;
        config.simulation.validate()?;
        Ok(config)
    }
}
