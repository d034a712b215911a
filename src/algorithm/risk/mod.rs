//! Clinical risk models
//!
//! Four independent models consume one `Patient` snapshot each:
//!
//! - [`ckd`]: chronic kidney disease risk
//! - [`diabetes`]: diabetes risk from glycemic and lipid markers
//! - [`blood_pressure`]: linear blood pressure prediction plus risk from the observed reading
//! - [`metabolic`]: rule-based metabolic syndrome clustering
//!
//! The additive models share one result shape, `PredictionResult`. All models are
//! pure apart from the optional confidence jitter.

pub mod blood_pressure;
pub mod ckd;
pub mod confidence;
pub mod diabetes;
pub mod engine;
pub mod metabolic;
pub mod tiers;
pub mod triage;

use crate::config::{ConfidenceMode, ScoringConfig};
use crate::models::Patient;
use confidence::ConfidenceBand;
use serde::{Deserialize, Serialize};
use std::fmt;
use tiers::{Breakpoints, MAX_SCORE, RiskLevel};

pub use blood_pressure::{BloodPressureModel, BloodPressurePrediction, predict_blood_pressure};
pub use ckd::{CkdRiskModel, predict_ckd_risk};
pub use diabetes::{DiabetesRiskModel, predict_diabetes_risk};
pub use engine::{PatientAssessment, RiskEngine};
pub use metabolic::{
    ClusterResult, MetabolicCluster, MetabolicCriterion, MetabolicSyndromeModel,
    cluster_metabolic_syndrome,
};
pub use triage::{TriageAssessment, apply_triage, triage_patient};

/// Direction in which a factor moves the risk
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Impact {
    /// Protective or within normal range
    Positive,
    /// Raises the risk
    Negative,
    /// No meaningful effect
    Neutral,
}

/// Observed value of a factor, either a bare number or text with units
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FactorValue {
    Number(f64),
    Text(String),
}

impl From<f64> for FactorValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for FactorValue {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<String> for FactorValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for FactorValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl fmt::Display for FactorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => write!(f, "{s}"),
        }
    }
}

/// One input's contribution to a prediction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskFactor {
    pub name: String,
    pub value: FactorValue,
    pub impact: Impact,
    pub weight: f64,
}

impl RiskFactor {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        value: impl Into<FactorValue>,
        impact: Impact,
        weight: f64,
    ) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            impact,
            weight,
        }
    }
}

/// Result of an additive prediction model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionResult {
    /// Clamped score in `[0, 100]`
    pub score: u32,
    pub risk_level: RiskLevel,
    /// Display confidence in `[0, 1]`
    pub confidence: f64,
    /// Contributions in evaluation order
    pub factors: Vec<RiskFactor>,
    pub recommendation: String,
}

impl PredictionResult {
    /// Look up a factor by name
    #[must_use]
    pub fn factor(&self, name: &str) -> Option<&RiskFactor> {
        self.factors.iter().find(|f| f.name == name)
    }

    /// Factors that raise the risk
    pub fn negative_factors(&self) -> impl Iterator<Item = &RiskFactor> {
        self.factors.iter().filter(|f| f.impact == Impact::Negative)
    }
}

/// The models this crate provides
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModelKind {
    Ckd,
    Diabetes,
    BloodPressure,
    MetabolicSyndrome,
}

impl ModelKind {
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Ckd => "CKD Risk",
            Self::Diabetes => "Diabetes Risk",
            Self::BloodPressure => "Blood Pressure",
            Self::MetabolicSyndrome => "Metabolic Syndrome",
        }
    }
}

impl fmt::Display for ModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// A model that scores one patient snapshot
pub trait RiskModel {
    type Output;

    /// Which model this is
    fn kind(&self) -> ModelKind;

    /// Score `patient` under `config`
    fn evaluate(&self, patient: &Patient, config: &ScoringConfig) -> Self::Output;
}

/// Accumulates points and factors for an additive threshold model
#[derive(Debug, Default)]
pub(crate) struct ScoreSheet {
    score: u32,
    factors: Vec<RiskFactor>,
}

impl ScoreSheet {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Record a factor worth `points`; zero-point factors count as protective
    pub(crate) fn record(&mut self, name: &str, value: impl Into<FactorValue>, points: u32) {
        let impact = if points > 0 {
            Impact::Negative
        } else {
            Impact::Positive
        };
        self.score += points;
        self.factors
            .push(RiskFactor::new(name, value, impact, f64::from(points)));
    }

    /// Clamp, tier and package the accumulated score
    pub(crate) fn finish(
        self,
        breakpoints: &Breakpoints,
        band: ConfidenceBand,
        mode: ConfidenceMode,
        recommend: fn(RiskLevel) -> &'static str,
    ) -> PredictionResult {
        let score = self.score.min(MAX_SCORE);
        let risk_level = RiskLevel::from_score(score, breakpoints);
        PredictionResult {
            score,
            risk_level,
            confidence: band.resolve(mode),
            factors: self.factors,
            recommendation: recommend(risk_level).to_string(),
        }
    }
}
