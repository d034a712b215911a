//! Logging utilities
//!
//! Standardized log lines for patient loading and cohort scoring runs.

use std::path::Path;
use std::time::Duration;

use crate::error::ScoringError;

/// Log the start of a patient export load
pub fn log_load_start(path: &Path) {
    log::info!("Loading patients from {}", path.display());
}

/// Log a finished patient export load
///
/// An empty export is reported as a warning since nothing will be scored.
pub fn log_load_complete(path: &Path, patients: usize, elapsed: Duration) {
    if patients == 0 {
        log::warn!("No patients found in export: {}", path.display());
    } else {
        log::info!(
            "Loaded {} patients from {} in {:?}",
            patients,
            path.display(),
            elapsed
        );
    }
}

/// Log a patient dropped from a cohort run
pub fn log_rejected_patient(patient_id: &str, error: &ScoringError) {
    if error.is_validation() {
        log::warn!("Rejected patient {patient_id}: {error}");
    } else {
        log::error!("Could not score patient {patient_id}: {error}");
    }
}

/// Log the outcome of a cohort run
pub fn log_cohort_complete(scored: usize, rejected: usize, elapsed: Duration) {
    let message = cohort_outcome(scored, rejected, elapsed);
    if rejected > 0 {
        log::warn!("{message}");
    } else {
        log::info!("{message}");
    }
}

fn cohort_outcome(scored: usize, rejected: usize, elapsed: Duration) -> String {
    match rejected {
        0 => format!("Scored {scored} patients in {elapsed:?}"),
        1 => format!("Scored {scored} patients in {elapsed:?}; 1 patient rejected"),
        n => format!("Scored {scored} patients in {elapsed:?}; {n} patients rejected"),
    }
}
