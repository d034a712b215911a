//! A Rust library for clinical decision support risk scoring.
//!
//! Scores patient records with four independent models (chronic kidney disease,
//! diabetes, blood pressure and metabolic syndrome clustering), triages new
//! intakes, and summarizes whole cohorts in parallel.

pub mod algorithm;
pub mod config;
pub mod error;
pub mod filter;
pub mod loader;
pub mod models;
pub mod utils;

// Re-export the most common types for easier use
// Core types
pub use config::{ConfidenceMode, ScoringConfig};
pub use error::{Result, ScoringError};
pub use models::{Gender, Patient, PatientStatus, generate_mrn};

// Risk models
pub use algorithm::risk::tiers::{ClusterRiskLevel, RiskLevel};
pub use algorithm::risk::{
    BloodPressurePrediction, ClusterResult, PatientAssessment, PredictionResult, RiskEngine,
    RiskFactor, RiskModel, cluster_metabolic_syndrome, predict_blood_pressure, predict_ckd_risk,
    predict_diabetes_risk, triage_patient,
};

// Cohort processing
pub use algorithm::cohort::{CohortAssessment, CohortStatistics, generate_summary, score_cohort};
pub use filter::{PatientFilter, PatientPredicate};
pub use loader::{load_patients, parse_patients};
