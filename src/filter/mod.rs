//! Patient list filtering
//!
//! Free-text search over names and MRN combined with optional status and stored
//! risk level constraints. All conditions must hold for a patient to match.

use crate::algorithm::risk::tiers::ClusterRiskLevel;
use crate::models::{Patient, PatientStatus};

/// A condition over a patient record
pub trait PatientPredicate: std::fmt::Debug {
    /// Whether `patient` satisfies the condition
    fn matches(&self, patient: &Patient) -> bool;

    /// Keep the patients that satisfy the condition, in order
    fn apply<'a>(&self, patients: &'a [Patient]) -> Vec<&'a Patient> {
        patients.iter().filter(|p| self.matches(p)).collect()
    }
}

/// Search and facet filter for the patient list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatientFilter {
    /// Case-insensitive substring of first name, last name or MRN
    pub query: String,
    pub status: Option<PatientStatus>,
    pub risk_level: Option<ClusterRiskLevel>,
}

impl PatientFilter {
    /// Create a filter that matches every patient
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    #[must_use]
    pub const fn with_status(mut self, status: PatientStatus) -> Self {
        self.status = Some(status);
        self
    }

    #[must_use]
    pub const fn with_risk_level(mut self, risk_level: ClusterRiskLevel) -> Self {
        self.risk_level = Some(risk_level);
        self
    }

    fn matches_query(&self, patient: &Patient) -> bool {
        if self.query.is_empty() {
            return true;
        }
        let needle = self.query.to_lowercase();
        [&patient.first_name, &patient.last_name, &patient.mrn]
            .into_iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }
}

impl PatientPredicate for PatientFilter {
    fn matches(&self, patient: &Patient) -> bool {
        self.matches_query(patient)
            && self.status.is_none_or(|status| patient.status == status)
            && self
                .risk_level
                .is_none_or(|level| patient.triage_level == level)
    }
}
