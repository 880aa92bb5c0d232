//! Positional weighting and window scoring.

use scissile_core::{Result, ScissileError};
use scissile_seq::WINDOW_LEN;

/// Default per-position weights, P4..P4'.
///
/// The cut-adjacent positions P1/P1' carry the most weight, decaying outward:
/// residues closest to the scissile bond are the strongest determinants of
/// cleavage.
pub const DEFAULT_WEIGHTS: [f64; WINDOW_LEN] = [4.0, 8.0, 16.0, 35.0, 20.0, 10.0, 5.0, 2.0];

/// The positional weight vector applied to every window's frequency values.
///
/// One fixed vector is used across all proteases and sequences; it is a
/// parameter of the scoring algorithm, not part of any profile.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreWeights([f64; WINDOW_LEN]);

impl Default for ScoreWeights {
    fn default() -> Self {
        Self(DEFAULT_WEIGHTS)
    }
}

impl ScoreWeights {
    /// Create a custom weight vector.
    ///
    /// # Errors
    ///
    /// Returns an error if any weight is negative or non-finite.
    pub fn new(weights: [f64; WINDOW_LEN]) -> Result<Self> {
        for (i, &w) in weights.iter().enumerate() {
            if !w.is_finite() || w < 0.0 {
                return Err(ScissileError::InvalidInput(format!(
                    "weight at position {} must be non-negative and finite, got {}",
                    i, w
                )));
            }
        }
        Ok(Self(weights))
    }

    /// Reduce a window's 8 per-position frequency values to one likelihood
    /// score: the weighted sum over all positions.
    pub fn score(&self, values: &[f64; WINDOW_LEN]) -> f64 {
        values.iter().zip(&self.0).map(|(v, w)| v * w).sum()
    }
}
