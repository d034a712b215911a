//! Patient entity model
//!
//! A `Patient` is the immutable snapshot every scoring call consumes: demographics,
//! vitals, lab values and history flags as delivered by the backend.

use crate::algorithm::risk::tiers::ClusterRiskLevel;
use crate::error::{Result, ScoringError};
use crate::models::types::{Gender, PatientStatus};
use chrono::{Datelike, NaiveDate};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Patient record as exchanged with the backend
///
/// Numeric fields missing from the JSON default to zero.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Patient {
    /// Backend identifier
    pub id: String,
    /// Medical record number
    pub mrn: String,
    pub first_name: String,
    pub last_name: String,
    /// `None` when the export omits it; age-dependent terms then see no age
    pub date_of_birth: Option<NaiveDate>,
    pub gender: Gender,
    pub email: String,
    pub phone: String,
    pub address: String,

    // Vitals
    /// Systolic blood pressure (mmHg)
    pub blood_pressure_systolic: f64,
    /// Diastolic blood pressure (mmHg)
    pub blood_pressure_diastolic: f64,
    /// Heart rate (bpm)
    pub heart_rate: f64,
    /// Weight (kg)
    pub weight: f64,
    /// Height (cm)
    pub height: f64,
    /// Body mass index as recorded (kg/m²)
    pub bmi: f64,

    // Lab values
    /// Glycated hemoglobin (%)
    pub hba1c: f64,
    /// Fasting glucose (mg/dL)
    pub fasting_glucose: f64,
    /// Total cholesterol (mg/dL)
    pub total_cholesterol: f64,
    /// LDL cholesterol (mg/dL)
    pub ldl_cholesterol: f64,
    /// HDL cholesterol (mg/dL)
    pub hdl_cholesterol: f64,
    /// Triglycerides (mg/dL)
    pub triglycerides: f64,
    /// Serum creatinine (mg/dL)
    pub creatinine: f64,
    /// Estimated glomerular filtration rate (mL/min/1.73m²)
    pub egfr: f64,
    /// Urine albumin (mg/L)
    pub albumin: f64,

    // History flags
    pub smoker: bool,
    pub diabetes_history: bool,
    pub hypertension_history: bool,
    pub family_history_cardiac: bool,

    // Metadata
    pub last_visit: Option<NaiveDate>,
    pub status: PatientStatus,
    /// Stored triage level (see `algorithm::risk::triage`)
    #[serde(rename = "riskLevel")]
    pub triage_level: ClusterRiskLevel,
}

impl Patient {
    /// Create a patient with the given identity and all clinical values zeroed
    #[must_use]
    pub fn new(id: impl Into<String>, gender: Gender, date_of_birth: NaiveDate) -> Self {
        Self {
            id: id.into(),
            gender,
            date_of_birth: Some(date_of_birth),
            ..Self::default()
        }
    }

    /// Display name, "First Last"
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Age as the difference between `year` and the birth year
    ///
    /// Birthdays within the year are ignored, matching the scoring models.
    #[must_use]
    pub fn age_in_year(&self, year: i32) -> Option<i32> {
        self.date_of_birth.map(|dob| year - dob.year())
    }

    /// BMI computed from weight and height, falling back to the recorded BMI
    /// when no height is available
    #[must_use]
    pub fn calculated_bmi(&self) -> f64 {
        if self.height > 0.0 {
            let height_m = self.height / 100.0;
            self.weight / (height_m * height_m)
        } else {
            self.bmi
        }
    }

    /// All numeric clinical fields with their JSON names
    #[must_use]
    pub fn numeric_fields(&self) -> [(&'static str, f64); 15] {
        [
            ("bloodPressureSystolic", self.blood_pressure_systolic),
            ("bloodPressureDiastolic", self.blood_pressure_diastolic),
            ("heartRate", self.heart_rate),
            ("weight", self.weight),
            ("height", self.height),
            ("bmi", self.bmi),
            ("hba1c", self.hba1c),
            ("fastingGlucose", self.fasting_glucose),
            ("totalCholesterol", self.total_cholesterol),
            ("ldlCholesterol", self.ldl_cholesterol),
            ("hdlCholesterol", self.hdl_cholesterol),
            ("triglycerides", self.triglycerides),
            ("creatinine", self.creatinine),
            ("egfr", self.egfr),
            ("albumin", self.albumin),
        ]
    }

    /// Reject records carrying NaN or infinite numeric values
    pub fn validate(&self) -> Result<()> {
        match self
            .numeric_fields()
            .into_iter()
            .find(|(_, value)| !value.is_finite())
        {
            Some((field, value)) => Err(ScoringError::NonFiniteField {
                patient_id: self.id.clone(),
                field,
                value,
            }),
            None => Ok(()),
        }
    }
}

/// Generate a medical record number of the form `MRN-123456`
pub fn generate_mrn<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!("MRN-{}", rng.random_range(100_000..1_000_000))
}
