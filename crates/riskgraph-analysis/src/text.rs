//! Tokenization and set-overlap similarity over free-text risk statements.

use std::collections::HashSet;

use riskgraph_core::constants::MIN_TOKEN_LEN;

/// Tokenize free text: lowercase, strip everything except ASCII
/// letters, digits, hyphen, and whitespace, split on whitespace, and
/// drop tokens shorter than 3 characters.
pub fn tokenize(text: &str) -> Vec<String> {
    let cleaned: String = text
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c.is_whitespace() {
                c
            } else {
                ' '
            }
        })
        .collect();

    cleaned
        .split_whitespace()
        .filter(|t| t.chars().count() >= MIN_TOKEN_LEN)
        .map(String::from)
        .collect()
}

/// Tokenize into a set for overlap computations.
pub fn token_set(text: &str) -> HashSet<String> {
    tokenize(text).into_iter().collect()
}

/// Jaccard similarity: |intersection| / |union|.
/// Returns 0.0 when both sets are empty. Symmetric, in [0, 1].
pub fn jaccard(a: &HashSet<String>, b: &HashSet<String>) -> f64 {
    if a.is_empty() && b.is_empty() {
        return 0.0;
    }
    let intersection = a.intersection(b).count() as f64;
    let union = a.union(b).count() as f64;
    if union == 0.0 {
        0.0
    } else {
        intersection / union
    }
}

/// Truncate a label to at most `max_chars` characters (char-safe).
pub fn truncate_chars(s: &str, max_chars: usize) -> String {
    s.chars().take(max_chars).collect()
}

/// Fraction of keyword phrases matched by a token set.
///
/// A phrase matches if ANY of its sub-tokens (split on hyphen or
/// whitespace) is present. Intentionally permissive rather than
/// exact-phrase matching.
pub fn keyword_overlap(tokens: &HashSet<String>, keywords: &[&str]) -> f64 {
    if keywords.is_empty() {
        return 0.0;
    }
    let matched = keywords
        .iter()
        .filter(|phrase| {
            phrase
                .split(['-', ' '])
                .filter(|sub| !sub.is_empty())
                .any(|sub| tokens.contains(&sub.to_lowercase()))
        })
        .count();
    matched as f64 / keywords.len() as f64
}
