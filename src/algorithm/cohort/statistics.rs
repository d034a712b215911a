//! Cohort statistics and summaries
//!
//! Headline counts over a patient list (the dashboard view) and a text summary of
//! a scored cohort.

use super::CohortAssessment;
use crate::algorithm::risk::ModelKind;
use crate::algorithm::risk::metabolic::MetabolicCluster;
use crate::algorithm::risk::tiers::{ClusterRiskLevel, RiskLevel};
use crate::error::{Result, ScoringError};
use crate::models::{Patient, PatientStatus};
use itertools::Itertools;
use std::fmt::Write;

/// Headline counts for a patient list
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CohortStatistics {
    pub total_patients: usize,
    /// Patients with critical status
    pub critical_patients: usize,
    /// Patients whose stored triage level is high
    pub high_risk_patients: usize,
    /// Mean recorded BMI, `None` for an empty cohort
    pub average_bmi: Option<f64>,
    /// eGFR below 60
    pub reduced_kidney_function: usize,
    /// HbA1c at or above 6.5%
    pub diabetic_hba1c: usize,
    /// Systolic ≥ 140 or diastolic ≥ 90
    pub hypertensive: usize,
    /// BMI at or above 30
    pub obese: usize,
}

impl CohortStatistics {
    /// Calculate statistics for a patient list
    #[must_use]
    pub fn from_patients(patients: &[Patient]) -> Self {
        let count = |pred: fn(&Patient) -> bool| patients.iter().filter(|p| pred(p)).count();

        Self {
            total_patients: patients.len(),
            critical_patients: count(|p| p.status == PatientStatus::Critical),
            high_risk_patients: count(|p| p.triage_level == ClusterRiskLevel::High),
            average_bmi: average_bmi(patients).ok(),
            reduced_kidney_function: count(|p| p.egfr < 60.0),
            diabetic_hba1c: count(|p| p.hba1c >= 6.5),
            hypertensive: count(|p| {
                p.blood_pressure_systolic >= 140.0 || p.blood_pressure_diastolic >= 90.0
            }),
            obese: count(|p| p.bmi >= 30.0),
        }
    }

    /// Fraction of the cohort represented by `count`
    #[must_use]
    pub fn prevalence(&self, count: usize) -> f64 {
        if self.total_patients == 0 {
            0.0
        } else {
            count as f64 / self.total_patients as f64
        }
    }
}

/// Mean recorded BMI over the cohort
pub fn average_bmi(patients: &[Patient]) -> Result<f64> {
    if patients.is_empty() {
        return Err(ScoringError::EmptyCohort);
    }
    Ok(patients.iter().map(|p| p.bmi).sum::<f64>() / patients.len() as f64)
}

/// Generate a text summary of cohort statistics and scoring results
#[must_use]
pub fn generate_summary(stats: &CohortStatistics, cohort: &CohortAssessment) -> String {
    let mut summary = String::new();
    let _ = writeln!(summary, "Cohort Summary:");
    let _ = writeln!(summary, "  Total Patients: {}", stats.total_patients);
    let _ = writeln!(summary, "  Critical Patients: {}", stats.critical_patients);
    let _ = writeln!(summary, "  High Triage Risk: {}", stats.high_risk_patients);
    match stats.average_bmi {
        Some(bmi) => {
            let _ = writeln!(summary, "  Average BMI: {bmi:.1}");
        }
        None => {
            let _ = writeln!(summary, "  Average BMI: n/a");
        }
    }

    let _ = writeln!(summary, "\nScreening:");
    for (label, count) in [
        ("eGFR < 60", stats.reduced_kidney_function),
        ("HbA1c >= 6.5%", stats.diabetic_hba1c),
        ("BP >= 140/90", stats.hypertensive),
        ("BMI >= 30", stats.obese),
    ] {
        let _ = writeln!(
            summary,
            "  {label}: {count} ({:.1}%)",
            stats.prevalence(count) * 100.0
        );
    }

    let _ = writeln!(
        summary,
        "\nScored: {} ({} rejected)",
        cohort.scored_count(),
        cohort.rejected.len()
    );

    for kind in [ModelKind::Ckd, ModelKind::Diabetes, ModelKind::BloodPressure] {
        let counts = cohort.tier_counts(kind);
        let line = RiskLevel::all()
            .into_iter()
            .map(|level| format!("{level}: {}", counts.get(&level).copied().unwrap_or(0)))
            .join(", ");
        let _ = writeln!(summary, "  {kind}: {line}");
    }

    let clusters = cohort.cluster_distribution();
    let _ = writeln!(summary, "\nMetabolic Clusters:");
    for cluster in MetabolicCluster::all() {
        let _ = writeln!(
            summary,
            "  {} {}: {}",
            cluster.id(),
            cluster.label(),
            clusters.get(&cluster).copied().unwrap_or(0)
        );
    }

    summary
}
