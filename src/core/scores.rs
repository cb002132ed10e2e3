//! Type-safe score scale.
//!
//! Every dimension, composite and component score in a report lives on the
//! same 0-100 scale. Wrapping it in a newtype keeps the clamp in one place.
//!
//! ```rust
//! use pitchmap::core::Score0To100;
//!
//! assert_eq!(Score0To100::new(85.0).value(), 85.0);
//! assert_eq!(Score0To100::new(150.0).value(), 100.0);
//! assert_eq!(Score0To100::new(f64::NAN).value(), 0.0);
//! ```

use serde::{Deserialize, Serialize};

/// Score on 0-100 scale.
///
/// Values are automatically clamped to the [0.0, 100.0] range; NaN becomes 0.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Score0To100(f64);

impl Score0To100 {
    pub const ZERO: Score0To100 = Score0To100(0.0);
    pub const MAX: Score0To100 = Score0To100(100.0);

    /// Create a new score, clamping to [0.0, 100.0].
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            Self(0.0)
        } else {
            Self(value.clamp(0.0, 100.0))
        }
    }

    /// Build a score from a 0-1 fraction.
    pub fn from_fraction(fraction: f64) -> Self {
        Self::new(fraction * 100.0)
    }

    /// Get the raw score value.
    pub fn value(self) -> f64 {
        self.0
    }
}

impl std::fmt::Display for Score0To100 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1}", self.0)
    }
}

/// Weighted sum of `(score, weight)` pairs, clamped back onto the scale.
pub fn weighted_sum(parts: &[(Score0To100, f64)]) -> Score0To100 {
    Score0To100::new(parts.iter().map(|(s, w)| s.value() * w).sum())
}
