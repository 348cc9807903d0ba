//! The keyword rule table: domain knowledge about which thematic risk
//! categories tend to interact and how. Immutable, defined once, and
//! safe to share across any number of callers.

use std::borrow::Cow;

use riskgraph_core::CorrelationKind;

/// A thematic keyword group mapped to a correlation kind and a base
/// strength in [0, 100].
#[derive(Debug, Clone, Copy)]
pub struct KeywordRule {
    pub name: &'static str,
    pub keywords: &'static [&'static str],
    pub kind: CorrelationKind,
    pub base_strength: u8,
}

/// Built-in rule table. Keyword lists are short: a single thematic hit
/// yields a meaningful match fraction.
const BUILTIN_RULES: &[KeywordRule] = &[
    KeywordRule {
        name: "financial",
        keywords: &["budget", "cost", "funding", "overrun"],
        kind: CorrelationKind::Amplifies,
        base_strength: 75,
    },
    KeywordRule {
        name: "supply-chain",
        keywords: &["vendor", "shipment", "delivery"],
        kind: CorrelationKind::Triggers,
        base_strength: 85,
    },
    KeywordRule {
        name: "schedule",
        keywords: &["deadline", "schedule", "delay", "slip"],
        kind: CorrelationKind::Triggers,
        base_strength: 80,
    },
    KeywordRule {
        name: "personnel",
        keywords: &["staff", "team", "turnover", "attrition"],
        kind: CorrelationKind::Amplifies,
        base_strength: 70,
    },
    KeywordRule {
        name: "technical",
        keywords: &["outage", "infrastructure", "integration", "migration"],
        kind: CorrelationKind::Triggers,
        base_strength: 75,
    },
    KeywordRule {
        name: "compliance",
        keywords: &["regulation", "compliance", "audit", "legal"],
        kind: CorrelationKind::Masks,
        base_strength: 65,
    },
    KeywordRule {
        name: "market",
        keywords: &["customer", "churn", "competitor", "demand"],
        kind: CorrelationKind::Amplifies,
        base_strength: 70,
    },
    KeywordRule {
        name: "security",
        keywords: &["breach", "vulnerability", "attack", "ransomware"],
        kind: CorrelationKind::Masks,
        base_strength: 70,
    },
];

/// An immutable set of keyword rules. The default borrows the
/// built-in table; tests and callers with domain-specific
/// vocabularies can inject their own, static or built at runtime.
#[derive(Debug, Clone)]
pub struct RuleSet {
    rules: Cow<'static, [KeywordRule]>,
}

impl RuleSet {
    /// A rule set over a caller-supplied table, borrowed or owned.
    pub fn custom(rules: impl Into<Cow<'static, [KeywordRule]>>) -> Self {
        Self {
            rules: rules.into(),
        }
    }

    pub fn rules(&self) -> &[KeywordRule] {
        &self.rules
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self {
            rules: Cow::Borrowed(BUILTIN_RULES),
        }
    }
}
