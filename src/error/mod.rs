//! Error handling for risk scoring and patient loading.

use std::io;

/// Errors raised by the validated scoring path and by patient loading
#[derive(Debug, thiserror::Error)]
pub enum ScoringError {
    /// A numeric clinical field holds NaN or an infinity
    #[error("Non-finite value for field '{field}' on patient '{patient_id}': {value}")]
    NonFiniteField {
        /// Identifier of the offending patient record
        patient_id: String,
        /// Name of the offending field
        field: &'static str,
        /// The rejected value
        value: f64,
    },

    /// Error opening or reading a file
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Error decoding patient JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// An aggregate was requested over a cohort with no patients
    #[error("Cohort is empty")]
    EmptyCohort,
}

impl ScoringError {
    /// Whether this error comes from input validation rather than I/O
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::NonFiniteField { .. })
    }
}

/// Result type for scoring operations
pub type Result<T> = std::result::Result<T, ScoringError>;
