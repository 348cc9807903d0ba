//! Config defaults, TOML loading, and validation.

use riskgraph_core::{DetectorConfig, EngineConfig, RiskGraphError, SimulationConfig};

#[test]
fn detector_defaults_match_documented_values() {
    let config = DetectorConfig::default();
    assert!((config.keyword_overlap_threshold - 0.15).abs() < f64::EPSILON);
    assert_eq!(config.min_correlation_strength, 20);
    assert_eq!(config.max_correlations, 15);
    assert!(!config.include_independent);
}

#[test]
fn simulation_defaults_match_documented_values() {
    let config = SimulationConfig::default();
    assert_eq!(config.iterations, 10_000);
    assert_eq!(config.seed, None);
    assert!((config.confidence_level - 0.95).abs() < f64::EPSILON);
}

#[test]
fn simulation_section_overrides_named_fields() {
    let raw = r#"
[simulation]
iterations = 500
seed = 99
"#;
    let config = EngineConfig::from_toml_str(raw).unwrap();
    assert_eq!(config.simulation.iterations, 500);
    assert_eq!(config.simulation.seed, Some(99));
    assert!((config.simulation.confidence_level - 0.95).abs() < f64::EPSILON);
}

#[test]
fn degenerate_confidence_level_rejected() {
    let config = SimulationConfig {
        confidence_level: 1.0,
        ..SimulationConfig::default()
    };
    assert!(matches!(
        config.validate().unwrap_err(),
        RiskGraphError::InvalidConfig { .. }
    ));
}

#[test]
fn empty_toml_yields_defaults() {
    let config = EngineConfig::from_toml_str("").unwrap();
    assert_eq!(config.detector.max_correlations, 15);
}

#[test]
fn partial_toml_overrides_only_named_fields() {
    let raw = r#"
[detector]
min_correlation_strength = 35
include_independent = true
"#;
    let config = EngineConfig::from_toml_str(raw).unwrap();
    assert_eq!(config.detector.min_correlation_strength, 35);
    assert!(config.detector.include_independent);
    // Untouched fields keep defaults.
    assert_eq!(config.detector.max_correlations, 15);
    assert!((config.detector.keyword_overlap_threshold - 0.15).abs() < f64::EPSILON);
}

#[test]
fn out_of_range_threshold_rejected() {
    let raw = r#"
[detector]
keyword_overlap_threshold = 1.5
"#;
    let err = EngineConfig::from_toml_str(raw).unwrap_err();
    assert!(matches!(err, RiskGraphError::InvalidConfig { .. }));
}

#[test]
fn min_strength_above_100_rejected() {
    let config = DetectorConfig {
        min_correlation_strength: 101,
        ..DetectorConfig::default()
    };
    assert!(config.validate().is_err());
}

#[test]
fn malformed_toml_is_a_parse_error() {
    let err = EngineConfig::from_toml_str("[detector\nbroken").unwrap_err();
    assert!(matches!(err, RiskGraphError::ConfigParse(_)));
}

#[test]
fn config_round_trips_through_toml() {
    let config = EngineConfig::default();
    let raw = toml::to_string(&config).unwrap();
    let back = EngineConfig::from_toml_str(&raw).unwrap();
    assert_eq!(
        back.detector.min_correlation_strength,
        config.detector.min_correlation_strength
    );
    assert_eq!(back.detector.max_correlations, config.detector.max_correlations);
}
