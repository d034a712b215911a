//! Chronic kidney disease risk model
//!
//! Additive threshold ladder over kidney function, proteinuria and comorbidities.
//! Each lab band is evaluated top-down and the first match wins.

use super::confidence::CKD_CONFIDENCE;
use super::tiers::{RiskLevel, STANDARD_BREAKPOINTS};
use super::{ModelKind, PredictionResult, RiskModel, ScoreSheet};
use crate::config::ScoringConfig;
use crate::models::Patient;
use log::debug;

/// Age above which the age factor applies
const AGE_THRESHOLD: i32 = 65;

/// CKD risk model
#[derive(Debug, Clone, Copy, Default)]
pub struct CkdRiskModel;

impl RiskModel for CkdRiskModel {
    type Output = PredictionResult;

    fn kind(&self) -> ModelKind {
        ModelKind::Ckd
    }

    fn evaluate(&self, patient: &Patient, config: &ScoringConfig) -> PredictionResult {
        let mut sheet = ScoreSheet::new();

        sheet.record("eGFR", patient.egfr, egfr_points(patient.egfr));
        sheet.record(
            "Creatinine",
            format!("{} mg/dL", patient.creatinine),
            creatinine_points(patient.creatinine),
        );
        sheet.record(
            "Urine Albumin",
            format!("{} mg/L", patient.albumin),
            albumin_points(patient.albumin),
        );

        if patient.diabetes_history {
            sheet.record("Diabetes History", "Yes", 10);
        }

        if patient.hypertension_history || patient.blood_pressure_systolic >= 140.0 {
            sheet.record("Hypertension", "Present", 10);
        }

        if let Some(age) = patient
            .age_in_year(config.reference_year())
            .filter(|&age| age > AGE_THRESHOLD)
        {
            sheet.record("Age", age, 5);
        }

        let result = sheet.finish(
            &STANDARD_BREAKPOINTS,
            CKD_CONFIDENCE,
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

/// Points for the eGFR band
#[must_use]
pub fn egfr_points(egfr: f64) -> u32 {
    if egfr < 30.0 {
        40
    } else if egfr < 60.0 {
        30
    } else if egfr < 90.0 {
        15
    } else {
        0
    }
}

/// Points for serum creatinine
#[must_use]
pub fn creatinine_points(creatinine: f64) -> u32 {
    if creatinine > 1.5 {
        15
    } else if creatinine > 1.2 {
        8
    } else {
        0
    }
}

/// Points for urine albumin
#[must_use]
pub fn albumin_points(albumin: f64) -> u32 {
    if albumin > 30.0 {
        20
    } else if albumin > 20.0 {
        10
    } else {
        0
    }
}

/// Recommendation text for a CKD risk tier
#[must_use]
pub const fn recommendation(level: RiskLevel) -> &'static str {
    match level {
        RiskLevel::Low => {
            "Continue routine monitoring. Annual eGFR and urine albumin testing recommended."
        }
        RiskLevel::Moderate => {
            "Increase monitoring frequency to every 6 months. Consider nephrology referral if progression occurs."
        }
        RiskLevel::High => {
            "Urgent nephrology referral recommended. Optimize blood pressure and glucose control. Consider ACE inhibitor or ARB therapy."
        }
        RiskLevel::VeryHigh => {
            "Immediate nephrology consultation required. Prepare for possible renal replacement therapy discussion. Aggressive management of comorbidities essential."
        }
    }
}

/// Score CKD risk with the default configuration
#[must_use]
pub fn predict_ckd_risk(patient: &Patient) -> PredictionResult {
    CkdRiskModel.evaluate(patient, &ScoringConfig::default())
}
