//! Cohort scoring
//!
//! Scores a list of patients with every risk model in parallel using Rayon. The
//! models are stateless, so each patient is scored independently; output keeps
//! the input order.

pub mod statistics;

pub use statistics::{CohortStatistics, generate_summary};

use crate::algorithm::risk::metabolic::MetabolicCluster;
use crate::algorithm::risk::tiers::RiskLevel;
use crate::algorithm::risk::{ModelKind, PatientAssessment, RiskEngine};
use crate::config::ScoringConfig;
use crate::error::Result;
use crate::models::Patient;
use indicatif::{ParallelProgressIterator, ProgressBar};
use crate::utils::logging::{log_cohort_complete, log_rejected_patient};
use log::info;
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// A patient that could not be scored
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedPatient {
    pub patient_id: String,
    pub reason: String,
}

/// Assessments for a whole cohort
#[derive(Debug, Clone, Default)]
pub struct CohortAssessment {
    /// Successful assessments in input order
    pub assessments: Vec<PatientAssessment>,
    /// Patients rejected by validation
    pub rejected: Vec<RejectedPatient>,
    pub elapsed: Duration,
}

impl CohortAssessment {
    /// Number of patients scored successfully
    #[must_use]
    pub fn scored_count(&self) -> usize {
        self.assessments.len()
    }

    /// Number of patients per metabolic cluster
    #[must_use]
    pub fn cluster_distribution(&self) -> FxHashMap<MetabolicCluster, usize> {
        let mut counts = FxHashMap::default();
        for assessment in &self.assessments {
            *counts
                .entry(assessment.metabolic.metabolic_cluster())
                .or_insert(0) += 1;
        }
        counts
    }

    /// Number of patients per tier for one prediction model
    ///
    /// Metabolic clustering has no four-tier level and yields an empty map.
    #[must_use]
    pub fn tier_counts(&self, kind: ModelKind) -> FxHashMap<RiskLevel, usize> {
        let mut counts = FxHashMap::default();
        for assessment in &self.assessments {
            let level = match kind {
                ModelKind::Ckd => assessment.ckd.risk_level,
                ModelKind::Diabetes => assessment.diabetes.risk_level,
                ModelKind::BloodPressure => assessment.blood_pressure.prediction.risk_level,
                ModelKind::MetabolicSyndrome => continue,
            };
            *counts.entry(level).or_insert(0) += 1;
        }
        counts
    }

    /// Look up the assessment for a patient id
    #[must_use]
    pub fn get(&self, patient_id: &str) -> Option<&PatientAssessment> {
        self.assessments
            .iter()
            .find(|assessment| assessment.patient_id == patient_id)
    }
}

/// Score every patient in the cohort
#[must_use]
pub fn score_cohort(patients: &[Patient], config: &ScoringConfig) -> CohortAssessment {
    let engine = RiskEngine::new(config.clone());
    let start = Instant::now();
    info!(
        "Scoring cohort of {} patients using {} threads (validation {})",
        patients.len(),
        rayon::current_num_threads(),
        if engine.config().validate_inputs {
            "on"
        } else {
            "off"
        }
    );

    let results: Vec<(String, Result<PatientAssessment>)> = patients
        .par_iter()
        .map(|patient| (patient.id.clone(), engine.assess(patient)))
        .collect();

    collect_results(results, start)
}

/// Score every patient in the cohort, advancing `progress` per patient
#[must_use]
pub fn score_cohort_with_progress(
    patients: &[Patient],
    config: &ScoringConfig,
    progress: &ProgressBar,
) -> CohortAssessment {
    let engine = RiskEngine::new(config.clone());
    let start = Instant::now();
    progress.set_length(patients.len() as u64);

    let results: Vec<(String, Result<PatientAssessment>)> = patients
        .par_iter()
        .progress_with(progress.clone())
        .map(|patient| (patient.id.clone(), engine.assess(patient)))
        .collect();

    collect_results(results, start)
}

fn collect_results(
    results: Vec<(String, Result<PatientAssessment>)>,
    start: Instant,
) -> CohortAssessment {
    let mut cohort = CohortAssessment {
        assessments: Vec::with_capacity(results.len()),
        ..CohortAssessment::default()
    };

    for (patient_id, result) in results {
        match result {
            Ok(assessment) => cohort.assessments.push(assessment),
            Err(e) => {
                log_rejected_patient(&patient_id, &e);
                cohort.rejected.push(RejectedPatient {
                    patient_id,
                    reason: e.to_string(),
                });
            }
        }
    }

    cohort.elapsed = start.elapsed();
    log_cohort_complete(cohort.assessments.len(), cohort.rejected.len(), cohort.elapsed);
    cohort
}
