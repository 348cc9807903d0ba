//! Cascade-effect templates per correlation kind.
//! Templates use `{a}` and `{b}` as placeholders for truncated risk labels.

use riskgraph_core::constants::CASCADE_LABEL_LEN;
use riskgraph_core::CorrelationKind;

use crate::text::truncate_chars;

/// Get the cascade-effect template for a correlation kind.
pub fn template_for(kind: CorrelationKind) -> &'static str {
    match kind {
        CorrelationKind::Amplifies => {
            "If '{a}' occurs alongside '{b}', their combined impact is worse than either alone."
        }
        CorrelationKind::Triggers => "'{a}' can set off '{b}', starting a domino chain.",
        CorrelationKind::Masks => "'{a}' can hide the early warning signs of '{b}'.",
        CorrelationKind::Independent => "'{a}' and '{b}' show no meaningful interaction.",
    }
}

/// Render a template with truncated risk labels.
pub fn render(kind: CorrelationKind, label_a: &str, label_b: &str) -> String {
    template_for(kind)
        .replace("{a}", &truncate_chars(label_a, CASCADE_LABEL_LEN))
        .replace("{b}", &truncate_chars(label_b, CASCADE_LABEL_LEN))
}
