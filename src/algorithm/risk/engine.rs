//! Run every risk model against a patient under one configuration.

use super::blood_pressure::{BloodPressureModel, BloodPressurePrediction};
use super::ckd::CkdRiskModel;
use super::diabetes::DiabetesRiskModel;
use super::metabolic::{ClusterResult, MetabolicSyndromeModel};
use super::tiers::RiskLevel;
use super::{PredictionResult, RiskModel};
use crate::config::ScoringConfig;
use crate::error::Result;
use crate::models::Patient;
use serde::{Deserialize, Serialize};

/// Results of all four models for one patient
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientAssessment {
    pub patient_id: String,
    pub ckd: PredictionResult,
    pub diabetes: PredictionResult,
    pub blood_pressure: BloodPressurePrediction,
    pub metabolic: ClusterResult,
}

impl PatientAssessment {
    /// Highest tier across the three prediction models
    #[must_use]
    pub fn highest_risk(&self) -> RiskLevel {
        self.ckd
            .risk_level
            .max(self.diabetes.risk_level)
            .max(self.blood_pressure.prediction.risk_level)
    }
}

/// Scores patients under a fixed configuration
#[derive(Debug, Clone, Default)]
pub struct RiskEngine {
    config: ScoringConfig,
}

impl RiskEngine {
    #[must_use]
    pub const fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub const fn config(&self) -> &ScoringConfig {
        &self.config
    }

    #[must_use]
    pub fn ckd(&self, patient: &Patient) -> PredictionResult {
        CkdRiskModel.evaluate(patient, &self.config)
    }

    #[must_use]
    pub fn diabetes(&self, patient: &Patient) -> PredictionResult {
        DiabetesRiskModel.evaluate(patient, &self.config)
    }

    #[must_use]
    pub fn blood_pressure(&self, patient: &Patient) -> BloodPressurePrediction {
        BloodPressureModel.evaluate(patient, &self.config)
    }

    #[must_use]
    pub fn metabolic(&self, patient: &Patient) -> ClusterResult {
        MetabolicSyndromeModel.evaluate(patient, &self.config)
    }

    /// Run all models, validating the record first when configured to
    pub fn assess(&self, patient: &Patient) -> Result<PatientAssessment> {
        if self.config.validate_inputs {
            patient.validate()?;
        }

        Ok(PatientAssessment {
            patient_id: patient.id.clone(),
            ckd: self.ckd(patient),
            diabetes: self.diabetes(patient),
            blood_pressure: self.blood_pressure(patient),
            metabolic: self.metabolic(patient),
        })
    }
}
