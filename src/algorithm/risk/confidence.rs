//! Confidence values attached to predictions
//!
//! The confidence is a display value only: a uniform draw from a fixed band per
//! model, or the band midpoint when a deterministic value is configured.

use crate::config::ConfidenceMode;
use rand::Rng;

/// Half-open band `[min, max)` a model's confidence is drawn from
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConfidenceBand {
    pub min: f64,
    pub max: f64,
}

impl ConfidenceBand {
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Midpoint of the band
    #[must_use]
    pub fn midpoint(&self) -> f64 {
        (self.min + self.max) / 2.0
    }

    /// Whether `value` lies within the band
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        (self.min..self.max).contains(&value)
    }

    /// Draw from the band with the given generator
    pub fn sample_with<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        rng.random_range(self.min..self.max)
    }

    /// Produce a confidence value according to `mode`
    #[must_use]
    pub fn resolve(&self, mode: ConfidenceMode) -> f64 {
        match mode {
            ConfidenceMode::Sampled => self.sample_with(&mut rand::rng()),
            ConfidenceMode::Midpoint => self.midpoint(),
        }
    }
}

/// CKD model confidence band
pub const CKD_CONFIDENCE: ConfidenceBand = ConfidenceBand::new(0.85, 0.95);
/// Diabetes model confidence band
pub const DIABETES_CONFIDENCE: ConfidenceBand = ConfidenceBand::new(0.88, 0.96);
/// Blood pressure model confidence band
pub const BLOOD_PRESSURE_CONFIDENCE: ConfidenceBand = ConfidenceBand::new(0.82, 0.92);
