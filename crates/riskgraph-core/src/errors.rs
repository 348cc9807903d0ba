//! Error types. The analysis path itself is infallible — degenerate
//! input yields empty or default artifacts — so errors only exist at
//! the configuration boundary.

pub type RiskGraphResult<T> = Result<T, RiskGraphError>;

#[derive(Debug, thiserror::Error)]
pub enum RiskGraphError {
    #[error("invalid config: {reason}")]
    InvalidConfig { reason: String },

    #[error("config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),
}
