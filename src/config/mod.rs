//! Configuration for risk scoring.

use chrono::{Datelike, Local, NaiveDate};
use std::fmt;

/// How the confidence value of a prediction is produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConfidenceMode {
    /// Uniform draw within the model's confidence band
    #[default]
    Sampled,
    /// The midpoint of the model's confidence band
    Midpoint,
}

/// Configuration for the risk models
#[derive(Debug, Clone)]
pub struct ScoringConfig {
    /// Confidence generation mode
    pub confidence: ConfidenceMode,
    /// Date whose calendar year counts as the current year for age (today when unset)
    pub reference_date: Option<NaiveDate>,
    /// Reject patients with non-finite numeric fields before scoring
    pub validate_inputs: bool,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            confidence: ConfidenceMode::Sampled,
            reference_date: None,
            validate_inputs: true,
        }
    }
}

impl ScoringConfig {
    /// Create a configuration with default settings
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the confidence mode
    #[must_use]
    pub const fn with_confidence(mut self, confidence: ConfidenceMode) -> Self {
        self.confidence = confidence;
        self
    }

    /// Pin the reference date used for age
    #[must_use]
    pub const fn with_reference_date(mut self, date: NaiveDate) -> Self {
        self.reference_date = Some(date);
        self
    }

    /// Enable or disable input validation
    #[must_use]
    pub const fn with_validation(mut self, validate_inputs: bool) -> Self {
        self.validate_inputs = validate_inputs;
        self
    }

    /// Calendar year treated as the current year
    #[must_use]
    pub fn reference_year(&self) -> i32 {
        self.reference_date
            .unwrap_or_else(|| Local::now().date_naive())
            .year()
    }
}

impl fmt::Display for ScoringConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Scoring Configuration:")?;
        writeln!(f, "  Confidence: {:?}", self.confidence)?;
        match self.reference_date {
            Some(date) => writeln!(f, "  Reference Date: {date}")?,
            None => writeln!(f, "  Reference Date: today")?,
        }
        writeln!(f, "  Validate Inputs: {}", self.validate_inputs)?;
        Ok(())
    }
}
