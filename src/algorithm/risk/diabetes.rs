//! Diabetes risk model
//!
//! Same additive ladder shape as the CKD model, driven by HbA1c, fasting glucose,
//! BMI and lipids. The lipid factors have no lower band and are omitted from the
//! factor list when below threshold.

use super::confidence::DIABETES_CONFIDENCE;
use super::tiers::{RiskLevel, STANDARD_BREAKPOINTS};
use super::{ModelKind, PredictionResult, RiskModel, ScoreSheet};
use crate::config::ScoringConfig;
use crate::models::Patient;
use log::debug;

/// Diabetes risk model
#[derive(Debug, Clone, Copy, Default)]
pub struct DiabetesRiskModel;

impl RiskModel for DiabetesRiskModel {
    type Output = PredictionResult;

    fn kind(&self) -> ModelKind {
        ModelKind::Diabetes
    }

    fn evaluate(&self, patient: &Patient, config: &ScoringConfig) -> PredictionResult {
        let mut sheet = ScoreSheet::new();

        sheet.record(
            "HbA1c",
            format!("{}%", patient.hba1c),
            hba1c_points(patient.hba1c),
        );
        sheet.record(
            "Fasting Glucose",
            format!("{} mg/dL", patient.fasting_glucose),
            fasting_glucose_points(patient.fasting_glucose),
        );
        sheet.record(
            "BMI",
            format!("{:.1}", patient.bmi),
            bmi_points(patient.bmi),
        );

        if patient.diabetes_history {
            sheet.record("Diabetes History", "Yes", 10);
        }

        if patient.triglycerides >= 150.0 {
            sheet.record(
                "Triglycerides",
                format!("{} mg/dL", patient.triglycerides),
                8,
            );
        }

        if patient.hdl_cholesterol < 40.0 {
            sheet.record(
                "HDL Cholesterol",
                format!("{} mg/dL", patient.hdl_cholesterol),
                7,
            );
        }

        let result = sheet.finish(
            &STANDARD_BREAKPOINTS,
            DIABETES_CONFIDENCE,
            config.confidence,
            recommendation,
        );
        debug!(
            "{} for patient {}: {} ({})",
            self.kind(),
            patient.id,
            result.score,
            result.risk_level
        );
        result
    }
}

/// Points for the HbA1c band
#[must_use]
pub fn hba1c_points(hba1c: f64) -> u32 {
    if hba1c >= 6.5 {
        40
    } else if hba1c >= 5.7 {
        25
    } else {
        0
    }
}

/// Points for the fasting glucose band
#[must_use]
pub fn fasting_glucose_points(glucose: f64) -> u32 {
    if glucose >= 126.0 {
        20
    } else if glucose >= 100.0 {
        10
    } else {
        0
    }
}

/// Points for the BMI band
#[must_use]
pub fn bmi_points(bmi: f64) -> u32 {
    if bmi >= 30.0 {
        15
    } else if bmi >= 25.0 {
        8
    } else {
        0
    }
}

/// Recommendation text for a diabetes risk tier
#[must_use]
pub const fn recommendation(level: RiskLevel) -> &'static str {
    match level {
        RiskLevel::Low => {
            "Maintain healthy lifestyle. Annual HbA1c screening recommended for patients with risk factors."
        }
        RiskLevel::Moderate => {
            "Pre-diabetes likely. Recommend lifestyle intervention program. Recheck HbA1c in 3-6 months. Consider metformin if lifestyle changes insufficient."
        }
        RiskLevel::High => {
            "High probability of undiagnosed diabetes. Confirm with repeat HbA1c or OGTT. Initiate treatment if confirmed. Consider endocrinology referral."
        }
        RiskLevel::VeryHigh => {
            "Strong indication of diabetes. Begin treatment immediately. Comprehensive diabetes education required. Screen for complications including retinopathy, neuropathy, and nephropathy."
        }
    }
}

/// Score diabetes risk with the default configuration
#[must_use]
pub fn predict_diabetes_risk(patient: &Patient) -> PredictionResult {
    DiabetesRiskModel.evaluate(patient, &ScoringConfig::default())
}
