//! Blood pressure model
//!
//! Two independent outputs: a predicted systolic/diastolic pair from a fixed linear
//! model, and a risk score derived only from the observed systolic reading.
//! Changing the predictor inputs while holding the observed systolic fixed never
//! changes the risk score.

use super::confidence::BLOOD_PRESSURE_CONFIDENCE;
use super::tiers::{BLOOD_PRESSURE_BREAKPOINTS, RiskLevel};
use super::{Impact, ModelKind, PredictionResult, RiskFactor, RiskModel};
use crate::config::ScoringConfig;
use crate::models::Patient;
use log::debug;
use serde::{Deserialize, Serialize};

const BASELINE_SYSTOLIC: f64 = 100.0;
const BASELINE_DIASTOLIC: f64 = 65.0;
/// BMI at which the BMI term contributes nothing
const REFERENCE_BMI: f64 = 22.0;

/// Unrounded output of the linear model
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PredictedPressure {
    pub systolic: f64,
    pub diastolic: f64,
}

/// Blood pressure prediction with the observed-reading risk score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BloodPressurePrediction {
    #[serde(flatten)]
    pub prediction: PredictionResult,
    /// Rounded predicted systolic, NaN when an input was NaN or the age is unknown
    pub predicted_systolic: f64,
    pub predicted_diastolic: f64,
}

/// Blood pressure model
#[derive(Debug, Clone, Copy, Default)]
pub struct BloodPressureModel;

impl RiskModel for BloodPressureModel {
    type Output = BloodPressurePrediction;

    fn kind(&self) -> ModelKind {
        ModelKind::BloodPressure
    }

    fn evaluate(&self, patient: &Patient, config: &ScoringConfig) -> BloodPressurePrediction {
        let age = patient.age_in_year(config.reference_year());
        let (predicted, factors) = linear_model(patient, age);

        let score = observed_systolic_score(patient.blood_pressure_systolic);
        let risk_level = RiskLevel::from_score(score, &BLOOD_PRESSURE_BREAKPOINTS);

        debug!(
            "{} for patient {}: predicted {:.1}/{:.1}, observed systolic {} -> {} ({})",
            self.kind(),
            patient.id,
            predicted.systolic,
            predicted.diastolic,
            patient.blood_pressure_systolic,
            score,
            risk_level
        );

        BloodPressurePrediction {
            prediction: PredictionResult {
                score,
                risk_level,
                confidence: BLOOD_PRESSURE_CONFIDENCE.resolve(config.confidence),
                factors,
                recommendation: recommendation(risk_level).to_string(),
            },
            predicted_systolic: round_half_up(predicted.systolic),
            predicted_diastolic: round_half_up(predicted.diastolic),
        }
    }
}

/// Evaluate the linear model for a patient of the given age
///
/// An unknown age makes both predictions NaN.
#[must_use]
pub fn linear_prediction(patient: &Patient, age: Option<i32>) -> PredictedPressure {
    linear_model(patient, age).0
}

fn linear_model(patient: &Patient, age: Option<i32>) -> (PredictedPressure, Vec<RiskFactor>) {
    let mut systolic = BASELINE_SYSTOLIC;
    let mut diastolic = BASELINE_DIASTOLIC;
    let mut factors = Vec::with_capacity(5);

    let age_years = age.map_or(f64::NAN, f64::from);
    systolic += age_years * 0.5;
    diastolic += age_years * 0.2;
    factors.push(match age {
        Some(age) => RiskFactor::new(
            "Age",
            age,
            if age > 50 {
                Impact::Negative
            } else {
                Impact::Neutral
            },
            age_years * 0.5,
        ),
        None => RiskFactor::new("Age", "Unknown", Impact::Neutral, 0.0),
    });

    let bmi_term = bmi_contribution(patient.bmi);
    systolic += bmi_term;
    diastolic += bmi_term * 0.5;
    factors.push(RiskFactor::new(
        "BMI",
        format!("{:.1}", patient.bmi),
        if patient.bmi > 25.0 {
            Impact::Negative
        } else {
            Impact::Positive
        },
        bmi_term.abs(),
    ));

    if patient.triglycerides >= 150.0 {
        systolic += 5.0;
        factors.push(RiskFactor::new(
            "Triglycerides",
            format!("{} mg/dL", patient.triglycerides),
            Impact::Negative,
            5.0,
        ));
    }

    if patient.diabetes_history || patient.hba1c >= 6.5 {
        systolic += 8.0;
        diastolic += 4.0;
        factors.push(RiskFactor::new("Diabetes", "Present", Impact::Negative, 8.0));
    }

    if patient.smoker {
        systolic += 6.0;
        factors.push(RiskFactor::new("Smoking", "Yes", Impact::Negative, 6.0));
    }

    if patient.gender.is_male() {
        systolic += 4.0;
    }

    (PredictedPressure { systolic, diastolic }, factors)
}

/// Systolic contribution of BMI, linear in the deviation from the reference BMI
#[must_use]
pub fn bmi_contribution(bmi: f64) -> f64 {
    (bmi - REFERENCE_BMI) * 0.8
}

/// Risk score from the observed systolic reading
#[must_use]
pub fn observed_systolic_score(systolic: f64) -> u32 {
    if systolic >= 180.0 {
        90
    } else if systolic >= 160.0 {
        70
    } else if systolic >= 140.0 {
        50
    } else if systolic >= 130.0 {
        30
    } else {
        10
    }
}

/// Round to the nearest integer, halves towards positive infinity; NaN stays NaN
fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Recommendation text for a blood pressure risk tier
#[must_use]
pub const fn recommendation(level: RiskLevel) -> &'static str {
    match level {
        RiskLevel::Low => {
            "Blood pressure within normal limits. Continue lifestyle measures and annual monitoring."
        }
        RiskLevel::Moderate => {
            "Elevated blood pressure detected. Recommend lifestyle modifications: DASH diet, sodium restriction, regular exercise. Recheck in 3 months."
        }
        RiskLevel::High => {
            "Stage 1-2 hypertension. Initiate or intensify antihypertensive therapy. Target BP < 130/80. Home BP monitoring recommended."
        }
        RiskLevel::VeryHigh => {
            "Severe hypertension requiring urgent intervention. Consider hypertensive emergency workup if symptomatic. Immediate medication adjustment needed."
        }
    }
}

/// Predict blood pressure with the default configuration
#[must_use]
pub fn predict_blood_pressure(patient: &Patient) -> BloodPressurePrediction {
    BloodPressureModel.evaluate(patient, &ScoringConfig::default())
}
