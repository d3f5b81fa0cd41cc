use serde::{Deserialize, Serialize};

/// Default acceptance threshold; 0 is a perfect match, 1 no match at all.
pub const DEFAULT_THRESHOLD: f64 = 0.4;
/// Default weight of the display name field.
pub const DEFAULT_NAME_WEIGHT: f64 = 0.7;
/// Default weight of the component path field.
pub const DEFAULT_PATH_WEIGHT: f64 = 0.3;

/// Tuning of the fuzzy leaf matcher.
///
/// A leaf matches when the weighted mean of its field scores is at most
/// `threshold`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SearchOptions {
    pub threshold: f64,
    pub name_weight: f64,
    pub path_weight: f64,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            name_weight: DEFAULT_NAME_WEIGHT,
            path_weight: DEFAULT_PATH_WEIGHT,
        }
    }
}

impl SearchOptions {
    /// Only near-exact matches and single typos in longer words.
    #[must_use]
    pub fn strict() -> Self {
        Self {
            threshold: 0.25,
            ..Self::default()
        }
    }

    /// Tolerates more misspellings, at the cost of unrelated hits.
    #[must_use]
    pub fn relaxed() -> Self {
        Self {
            threshold: 0.55,
            ..Self::default()
        }
    }

    /// Set the acceptance threshold, clamped to `0.0..=1.0`.
    #[must_use]
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = if threshold.is_nan() {
            DEFAULT_THRESHOLD
        } else {
            threshold.clamp(0.0, 1.0)
        };
        self
    }

    #[must_use]
    pub fn with_weights(mut self, name_weight: f64, path_weight: f64) -> Self {
        self.name_weight = name_weight.max(0.0);
        self.path_weight = path_weight.max(0.0);
        self
    }

    /// Weights scaled to sum to one. Falls back to equal weights when both
    /// are zero.
    pub fn normalized_weights(&self) -> (f64, f64) {
        let name = self.name_weight.max(0.0);
        let path = self.path_weight.max(0.0);
        let total = name + path;
        if total <= f64::EPSILON {
            (0.5, 0.5)
        } else {
            (name / total, path / total)
        }
    }
}
