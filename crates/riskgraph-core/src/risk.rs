//! Risk identity and the clamped strength score.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable opaque identifier for a risk statement.
///
/// All pair keys, adjacency maps, and cluster/SPOF bookkeeping key on
/// this id. The risk text is a display label only, so renaming a risk
/// keeps its continuity with prior analyses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RiskId(Uuid);

impl RiskId {
    /// Mint a fresh id.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for RiskId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RiskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<Uuid> for RiskId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

/// A user-supplied risk statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Risk {
    pub id: RiskId,
    /// Free text as entered. Display label only, never an identity.
    pub text: String,
}

impl Risk {
    /// Create a risk with a fresh id.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: RiskId::new(),
            text: text.into(),
        }
    }

    /// Create a risk under an id the caller already tracks.
    pub fn with_id(id: RiskId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
        }
    }
}

/// Correlation strength / probability score clamped to [0, 100].
///
/// Both `correlation_strength` and `combined_probability` use this
/// wrapper, so the range invariant holds by construction.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Strength(u8);

impl Strength {
    pub const MIN: Strength = Strength(0);
    pub const MAX: Strength = Strength(100);

    /// Create a new Strength, clamping to [0, 100].
    pub fn new(value: i64) -> Self {
        Self(value.clamp(0, 100) as u8)
    }

    /// Round a float score into a clamped Strength.
    pub fn from_f64(value: f64) -> Self {
        if value.is_nan() {
            return Self(0);
        }
        Self(value.round().clamp(0.0, 100.0) as u8)
    }

    /// Get the raw value.
    pub fn value(self) -> u8 {
        self.0
    }

    pub fn as_f64(self) -> f64 {
        f64::from(self.0)
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u8> for Strength {
    fn from(value: u8) -> Self {
        Self(value.min(100))
    }
}

impl From<Strength> for u8 {
    fn from(s: Strength) -> Self {
        s.0
    }
}
