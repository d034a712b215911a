//! Intake triage
//!
//! Assigns the stored risk level and care status of a newly registered patient
//! from a simple point count over headline markers.

use super::tiers::ClusterRiskLevel;
use crate::models::{Patient, PatientStatus};
use serde::{Deserialize, Serialize};

/// Outcome of intake triage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TriageAssessment {
    pub points: u32,
    pub risk_level: ClusterRiskLevel,
    pub status: PatientStatus,
}

/// Count triage points for a patient
#[must_use]
pub fn triage_points(patient: &Patient) -> u32 {
    let mut points = 0;
    if patient.hba1c >= 6.5 {
        points += 2;
    }
    if patient.egfr < 60.0 {
        points += 2;
    }
    if patient.blood_pressure_systolic >= 140.0 {
        points += 1;
    }
    if patient.calculated_bmi() >= 30.0 {
        points += 1;
    }
    if patient.smoker {
        points += 1;
    }
    if patient.diabetes_history {
        points += 1;
    }
    if patient.family_history_cardiac {
        points += 1;
    }
    points
}

/// Triage a patient at registration
#[must_use]
pub fn triage_patient(patient: &Patient) -> TriageAssessment {
    let points = triage_points(patient);
    let risk_level = if points >= 4 {
        ClusterRiskLevel::High
    } else if points >= 2 {
        ClusterRiskLevel::Moderate
    } else {
        ClusterRiskLevel::Low
    };
    let status = if risk_level == ClusterRiskLevel::High {
        PatientStatus::Critical
    } else {
        PatientStatus::Active
    };

    TriageAssessment {
        points,
        risk_level,
        status,
    }
}

/// Apply triage to a patient record in place, returning the assessment
pub fn apply_triage(patient: &mut Patient) -> TriageAssessment {
    let assessment = triage_patient(patient);
    patient.bmi = patient.calculated_bmi();
    patient.triage_level = assessment.risk_level;
    patient.status = assessment.status;
    assessment
}
