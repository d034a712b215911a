use crate::utils::{assert_close, mock_patient};
use ehr_cds::algorithm::risk::triage::triage_points;
use ehr_cds::algorithm::risk::apply_triage;
use ehr_cds::utils::test::healthy_female;
use ehr_cds::{ClusterRiskLevel, Patient, PatientStatus, triage_patient};

#[test]
fn test_high_risk_intake_is_critical() {
    let assessment = triage_patient(&mock_patient("1"));
    // HbA1c 2, eGFR 2, systolic 1, BMI 1, diabetes 1, family history 1
    assert_eq!(assessment.points, 8);
    assert_eq!(assessment.risk_level, ClusterRiskLevel::High);
    assert_eq!(assessment.status, PatientStatus::Critical);
}

#[test]
fn test_triage_thresholds() {
    let healthy = healthy_female();
    assert_eq!(triage_points(&healthy), 0);
    assert_eq!(triage_patient(&healthy).risk_level, ClusterRiskLevel::Low);

    let moderate = Patient {
        hba1c: 6.5,
        ..healthy.clone()
    };
    let assessment = triage_patient(&moderate);
    assert_eq!(assessment.points, 2);
    assert_eq!(assessment.risk_level, ClusterRiskLevel::Moderate);
    assert_eq!(assessment.status, PatientStatus::Active);

    let high = Patient {
        smoker: true,
        family_history_cardiac: true,
        ..moderate
    };
    assert_eq!(triage_patient(&high).risk_level, ClusterRiskLevel::High);
}

#[test]
fn test_triage_uses_calculated_bmi() {
    // Stored BMI says obese, height and weight say otherwise
    let patient = Patient {
        bmi: 35.0,
        weight: 60.0,
        height: 170.0,
        ..healthy_female()
    };
    assert_eq!(triage_points(&patient), 0);
}

#[test]
fn test_apply_triage_updates_record() {
    let mut patient = mock_patient("1");
    patient.status = PatientStatus::Active;
    patient.triage_level = ClusterRiskLevel::Low;

    let assessment = apply_triage(&mut patient);
    assert_eq!(patient.triage_level, assessment.risk_level);
    assert_eq!(patient.status, PatientStatus::Critical);
    assert_close(patient.bmi, 98.0 / (1.78 * 1.78));
}
