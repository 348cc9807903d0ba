//! Sensitivity analysis inputs and outputs.

use serde::{Deserialize, Serialize};

/// A decision variable swept between its min and max values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensitivityVariable {
    pub name: String,
    pub base_value: f64,
    pub min_value: f64,
    pub max_value: f64,
    /// Relative weight of this variable in the score model.
    pub weight: f64,
}

/// How strongly one variable moves the score across its sweep.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariableImpact {
    pub variable_name: String,
    /// % change in score per % change in the variable.
    pub elasticity: f64,
    /// +1.0 when a higher value raises the score, −1.0 otherwise.
    pub correlation: f64,
    pub score_at_min: f64,
    pub score_at_max: f64,
    pub score_range: f64,
    pub is_critical: bool,
}

/// One bar of the tornado chart, widest score swing first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TornadoBar {
    pub variable_name: String,
    pub low_value: f64,
    pub high_value: f64,
    pub base_value: f64,
    pub low_score: f64,
    pub high_score: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SensitivityReport {
    pub variable_impacts: Vec<VariableImpact>,
    pub tornado_chart_data: Vec<TornadoBar>,
    pub critical_variables: Vec<String>,
    pub recommendations: Vec<String>,
}
