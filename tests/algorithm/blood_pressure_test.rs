use crate::utils::{assert_close, mock_patient};
use ehr_cds::algorithm::risk::blood_pressure::{
    bmi_contribution, linear_prediction, observed_systolic_score,
};
use ehr_cds::algorithm::risk::{BloodPressureModel, Impact, RiskModel};
use ehr_cds::utils::test::{date, deterministic_config};
use ehr_cds::{Gender, Patient, RiskLevel};
use pretty_assertions::assert_eq;

#[test]
fn test_prediction_for_high_risk_male() {
    let result = BloodPressureModel.evaluate(&mock_patient("1"), &deterministic_config());

    assert_eq!(result.predicted_systolic, 157.0);
    assert_eq!(result.predicted_diastolic, 86.0);
    // Observed 142 mmHg
    assert_eq!(result.prediction.score, 50);
    assert_eq!(result.prediction.risk_level, RiskLevel::High);

    let names: Vec<&str> = result
        .prediction
        .factors
        .iter()
        .map(|f| f.name.as_str())
        .collect();
    assert_eq!(names, vec!["Age", "BMI", "Triglycerides", "Diabetes"]);
}

#[test]
fn test_prediction_for_healthy_female() {
    let result = BloodPressureModel.evaluate(&mock_patient("6"), &deterministic_config());

    assert_eq!(result.predicted_systolic, 121.0);
    assert_eq!(result.predicted_diastolic, 73.0);
    assert_eq!(result.prediction.score, 10);
    assert_eq!(result.prediction.risk_level, RiskLevel::Low);

    let age = result.prediction.factor("Age").unwrap();
    assert_eq!(age.impact, Impact::Neutral);
    assert_close(age.weight, 21.0);
    assert_eq!(result.prediction.factor("BMI").unwrap().impact, Impact::Positive);
}

#[test]
fn test_predicted_values_round_half_up() {
    let patient = Patient {
        bmi: 22.0,
        ..Patient::new("r", Gender::Female, date(2023, 1, 1))
    };
    let result = BloodPressureModel.evaluate(&patient, &deterministic_config());
    // 100.5 and 65.2
    assert_eq!(result.predicted_systolic, 101.0);
    assert_eq!(result.predicted_diastolic, 65.0);
}

#[test]
fn test_linear_model_terms() {
    let base = Patient {
        bmi: 22.0,
        ..Patient::new("l", Gender::Female, date(1980, 1, 1))
    };
    let baseline = linear_prediction(&base, Some(0));
    assert_close(baseline.systolic, 100.0);
    assert_close(baseline.diastolic, 65.0);

    let male = Patient {
        gender: Gender::Male,
        ..base.clone()
    };
    assert_close(linear_prediction(&male, Some(0)).systolic, 104.0);
    assert_close(linear_prediction(&male, Some(0)).diastolic, 65.0);

    let smoker = Patient {
        smoker: true,
        ..base.clone()
    };
    assert_close(linear_prediction(&smoker, Some(0)).systolic, 106.0);

    let diabetic = Patient {
        hba1c: 6.5,
        ..base.clone()
    };
    let predicted = linear_prediction(&diabetic, Some(0));
    assert_close(predicted.systolic, 108.0);
    assert_close(predicted.diastolic, 69.0);

    assert_close(bmi_contribution(32.0), 8.0);
    assert_close(bmi_contribution(17.0), -4.0);
}

#[test]
fn test_risk_depends_only_on_observed_systolic() {
    let config = deterministic_config();
    let lean = Patient {
        bmi: 20.0,
        blood_pressure_systolic: 165.0,
        ..Patient::new("a", Gender::Female, date(1995, 1, 1))
    };
    let heavy = Patient {
        bmi: 40.0,
        triglycerides: 400.0,
        hba1c: 9.0,
        smoker: true,
        gender: Gender::Male,
        date_of_birth: Some(date(1940, 1, 1)),
        ..lean.clone()
    };

    let a = BloodPressureModel.evaluate(&lean, &config);
    let b = BloodPressureModel.evaluate(&heavy, &config);
    assert_ne!(a.predicted_systolic, b.predicted_systolic);
    assert_eq!(a.prediction.score, 70);
    assert_eq!(a.prediction.score, b.prediction.score);
    assert_eq!(a.prediction.risk_level, RiskLevel::VeryHigh);
}

#[test]
fn test_observed_systolic_bands() {
    assert_eq!(observed_systolic_score(185.0), 90);
    assert_eq!(observed_systolic_score(180.0), 90);
    assert_eq!(observed_systolic_score(160.0), 70);
    assert_eq!(observed_systolic_score(140.0), 50);
    assert_eq!(observed_systolic_score(130.0), 30);
    assert_eq!(observed_systolic_score(129.9), 10);
    assert_eq!(observed_systolic_score(0.0), 10);
}

#[test]
fn test_serialized_shape_is_flat() -> ehr_cds::Result<()> {
    let result = BloodPressureModel.evaluate(&mock_patient("1"), &deterministic_config());
    let json = serde_json::to_value(&result)?;
    assert_eq!(json["predictedSystolic"].as_f64(), Some(157.0));
    assert_eq!(json["riskLevel"], "high");
    assert_eq!(json["score"], 50);
    assert!(json.get("prediction").is_none());
    Ok(())
}

#[test]
fn test_nan_input_propagates_to_prediction() {
    let patient = Patient {
        bmi: f64::NAN,
        ..mock_patient("6")
    };
    let result = BloodPressureModel.evaluate(&patient, &deterministic_config());
    assert!(result.predicted_systolic.is_nan());
    assert!(result.predicted_diastolic.is_nan());
    // Risk still comes from the observed reading
    assert_eq!(result.prediction.score, 10);
}

#[test]
fn test_unknown_age_propagates_to_prediction() {
    let patient = Patient {
        date_of_birth: None,
        ..mock_patient("1")
    };
    let result = BloodPressureModel.evaluate(&patient, &deterministic_config());
    assert!(result.predicted_systolic.is_nan());
    assert!(result.predicted_diastolic.is_nan());
    assert_eq!(result.prediction.score, 50);

    let age = result.prediction.factor("Age").unwrap();
    assert_eq!(age.value.to_string(), "Unknown");
    assert_eq!(age.impact, Impact::Neutral);
}
