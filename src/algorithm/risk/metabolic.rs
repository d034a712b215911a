//! Metabolic syndrome clustering
//!
//! A deterministic bucketer over the five ATP III criteria. The cluster is a
//! non-decreasing function of the number of criteria met:
//! 0 → 1, 1-2 → 2, 3-4 → 3, 5 → 4.

use super::tiers::ClusterRiskLevel;
use super::{ModelKind, RiskModel};
use crate::config::ScoringConfig;
use crate::models::{Gender, Patient};
use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Characteristic reported when no criterion is met
pub const NO_CRITERIA_MET: &str = "No metabolic syndrome criteria met";

/// One ATP III criterion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetabolicCriterion {
    /// BMI ≥ 30, standing in for central obesity
    ElevatedBmi,
    /// Triglycerides ≥ 150 mg/dL
    ElevatedTriglycerides,
    /// HDL below the sex-specific threshold
    LowHdl,
    /// Systolic ≥ 130 or diastolic ≥ 85
    ElevatedBloodPressure,
    /// Fasting glucose ≥ 100 mg/dL
    ElevatedFastingGlucose,
}

impl MetabolicCriterion {
    /// All criteria in evaluation order
    #[must_use]
    pub const fn all() -> [Self; 5] {
        [
            Self::ElevatedBmi,
            Self::ElevatedTriglycerides,
            Self::LowHdl,
            Self::ElevatedBloodPressure,
            Self::ElevatedFastingGlucose,
        ]
    }

    /// Whether `patient` meets this criterion
    #[must_use]
    pub fn is_met(self, patient: &Patient) -> bool {
        match self {
            Self::ElevatedBmi => patient.bmi >= 30.0,
            Self::ElevatedTriglycerides => patient.triglycerides >= 150.0,
            Self::LowHdl => patient.hdl_cholesterol < hdl_threshold(patient.gender),
            Self::ElevatedBloodPressure => {
                patient.blood_pressure_systolic >= 130.0
                    || patient.blood_pressure_diastolic >= 85.0
            }
            Self::ElevatedFastingGlucose => patient.fasting_glucose >= 100.0,
        }
    }

    /// Human-readable characteristic for a met criterion
    #[must_use]
    pub fn describe(self, gender: Gender) -> String {
        match self {
            Self::ElevatedBmi => "Elevated BMI (≥30)".to_string(),
            Self::ElevatedTriglycerides => "Elevated Triglycerides (≥150 mg/dL)".to_string(),
            Self::LowHdl => format!("Low HDL (<{} mg/dL)", hdl_threshold(gender)),
            Self::ElevatedBloodPressure => "Elevated BP (≥130/85)".to_string(),
            Self::ElevatedFastingGlucose => "Elevated Fasting Glucose (≥100 mg/dL)".to_string(),
        }
    }
}

/// HDL threshold in mg/dL: 40 for men, 50 otherwise
#[must_use]
pub const fn hdl_threshold(gender: Gender) -> f64 {
    if gender.is_male() { 40.0 } else { 50.0 }
}

/// Metabolic phenotype clusters
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum MetabolicCluster {
    MetabolicallyHealthy = 1,
    AtRisk = 2,
    MetabolicSyndrome = 3,
    SevereMetabolicSyndrome = 4,
}

impl MetabolicCluster {
    /// Assign the cluster for a criteria count
    #[must_use]
    pub const fn from_criteria_count(count: usize) -> Self {
        match count {
            0 => Self::MetabolicallyHealthy,
            1 | 2 => Self::AtRisk,
            3 | 4 => Self::MetabolicSyndrome,
            _ => Self::SevereMetabolicSyndrome,
        }
    }

    /// Numeric cluster id (1-4)
    #[must_use]
    pub const fn id(self) -> u8 {
        self as u8
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::MetabolicallyHealthy => "Metabolically Healthy",
            Self::AtRisk => "At-Risk / Pre-Metabolic",
            Self::MetabolicSyndrome => "Metabolic Syndrome",
            Self::SevereMetabolicSyndrome => "Severe Metabolic Syndrome",
        }
    }

    #[must_use]
    pub const fn risk_level(self) -> ClusterRiskLevel {
        match self {
            Self::MetabolicallyHealthy => ClusterRiskLevel::Low,
            Self::AtRisk => ClusterRiskLevel::Moderate,
            Self::MetabolicSyndrome | Self::SevereMetabolicSyndrome => ClusterRiskLevel::High,
        }
    }

    /// All clusters in ascending order
    #[must_use]
    pub const fn all() -> [Self; 4] {
        [
            Self::MetabolicallyHealthy,
            Self::AtRisk,
            Self::MetabolicSyndrome,
            Self::SevereMetabolicSyndrome,
        ]
    }
}

impl fmt::Display for MetabolicCluster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Result of metabolic syndrome clustering
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClusterResult {
    /// Cluster id (1-4)
    pub cluster: u8,
    pub cluster_name: String,
    /// One entry per met criterion, or the single no-criteria entry
    pub characteristics: Vec<String>,
    pub criteria_count: usize,
    pub risk_level: ClusterRiskLevel,
}

impl ClusterResult {
    /// The typed cluster for this result
    #[must_use]
    pub const fn metabolic_cluster(&self) -> MetabolicCluster {
        MetabolicCluster::from_criteria_count(self.criteria_count)
    }
}

/// Metabolic syndrome clustering model
#[derive(Debug, Clone, Copy, Default)]
pub struct MetabolicSyndromeModel;

impl RiskModel for MetabolicSyndromeModel {
    type Output = ClusterResult;

    fn kind(&self) -> ModelKind {
        ModelKind::MetabolicSyndrome
    }

    fn evaluate(&self, patient: &Patient, _config: &ScoringConfig) -> ClusterResult {
        cluster_metabolic_syndrome(patient)
    }
}

/// Cluster a patient by the number of metabolic syndrome criteria met
#[must_use]
pub fn cluster_metabolic_syndrome(patient: &Patient) -> ClusterResult {
    let mut characteristics: Vec<String> = MetabolicCriterion::all()
        .into_iter()
        .filter(|criterion| criterion.is_met(patient))
        .map(|criterion| criterion.describe(patient.gender))
        .collect();

    let criteria_count = characteristics.len();
    let cluster = MetabolicCluster::from_criteria_count(criteria_count);

    if characteristics.is_empty() {
        characteristics.push(NO_CRITERIA_MET.to_string());
    }

    debug!(
        "Metabolic cluster for patient {}: {} ({} criteria)",
        patient.id, cluster, criteria_count
    );

    ClusterResult {
        cluster: cluster.id(),
        cluster_name: cluster.label().to_string(),
        characteristics,
        criteria_count,
        risk_level: cluster.risk_level(),
    }
}
