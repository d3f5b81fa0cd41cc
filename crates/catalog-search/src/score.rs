//! Leaf scoring.
//!
//! Each field is scored on a 0–1 scale where 0 is a perfect match. A field
//! scores 0 when it contains the whole query. Otherwise its score is the
//! smaller of the normalized Levenshtein distance between query and field,
//! and the mean over query tokens of the distance to the closest field
//! token (a token contained in a field token counts as exact).

use rapidfuzz::distance::levenshtein;
use serde::Serialize;

use catalog_model::NodeId;

use crate::utils::Normalized;

/// Score of one leaf against a query.
#[derive(Debug, Clone, Serialize)]
pub struct LeafScore {
    pub node: NodeId,
    /// Weighted field score (0.0 = perfect match).
    pub score: f64,
    pub matched: bool,
    /// Breakdown of score components for explainability.
    pub components: Vec<ScoreComponent>,
}

impl LeafScore {
    /// Human-readable explanation of the score.
    pub fn explain(&self) -> String {
        self.components
            .iter()
            .map(|c| format!("{}: {:.2} (x{:.2})", c.field, c.value, c.weight))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

/// A field contributing to the final score.
#[derive(Debug, Clone, Serialize)]
pub struct ScoreComponent {
    /// Field name, `name` or `path`.
    pub field: &'static str,
    pub value: f64,
    pub weight: f64,
    /// The normalized field text that was compared.
    pub text: String,
}

/// Distance between a query and one field, 0.0 to 1.0.
pub fn field_score(query: &Normalized, field: &Normalized) -> f64 {
    if query.is_empty() || field.is_empty() {
        return 1.0;
    }
    if field.text.contains(&query.text) {
        return 0.0;
    }
    let whole = distance(&query.text, &field.text);
    let per_token = query
        .tokens
        .iter()
        .map(|token| {
            field
                .tokens
                .iter()
                .map(|candidate| token_distance(token, candidate))
                .fold(1.0_f64, f64::min)
        })
        .sum::<f64>()
        / query.tokens.len() as f64;
    whole.min(per_token)
}

fn token_distance(token: &str, candidate: &str) -> f64 {
    if candidate.contains(token) {
        0.0
    } else {
        distance(token, candidate)
    }
}

fn distance(left: &str, right: &str) -> f64 {
    levenshtein::normalized_distance(left.chars(), right.chars())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(query: &str, field: &str) -> f64 {
        field_score(&Normalized::new(query), &Normalized::new(field))
    }

    #[test]
    fn substrings_are_perfect() {
        assert_eq!(score("hex", "Hex Head"), 0.0);
        assert_eq!(score("head", "screws/socket_head"), 0.0);
        assert_eq!(score("sock", "Socket Head"), 0.0);
    }

    #[test]
    fn every_query_token_may_hit_a_different_field_token() {
        assert_eq!(score("head socket", "Socket Head"), 0.0);
    }

    #[test]
    fn single_typo_scores_low() {
        let value = score("sockt", "Socket Head");
        assert!(value > 0.0 && value < 0.2, "got {value}");
    }

    #[test]
    fn unrelated_words_score_high() {
        assert!(score("washer", "Socket Head") > 0.5);
        assert_eq!(score("hex", "Socket Head"), 0.5);
    }

    #[test]
    fn empty_sides_never_match() {
        assert_eq!(score("", "Socket Head"), 1.0);
        assert_eq!(score("hex", ""), 1.0);
    }
}
