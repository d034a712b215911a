use crate::utils::mock_patient;
use ehr_cds::algorithm::risk::metabolic::{
    MetabolicCluster, MetabolicCriterion, NO_CRITERIA_MET, hdl_threshold,
};
use ehr_cds::utils::test::{healthy_female, severe_metabolic_male};
use ehr_cds::{ClusterRiskLevel, Gender, Patient, cluster_metabolic_syndrome};
use pretty_assertions::assert_eq;

#[test]
fn test_all_five_criteria_is_severe() {
    let result = cluster_metabolic_syndrome(&mock_patient("3"));
    assert_eq!(result.criteria_count, 5);
    assert_eq!(result.cluster, 4);
    assert_eq!(result.cluster_name, "Severe Metabolic Syndrome");
    assert_eq!(result.risk_level, ClusterRiskLevel::High);
    assert_eq!(
        result.characteristics,
        vec![
            "Elevated BMI (≥30)",
            "Elevated Triglycerides (≥150 mg/dL)",
            "Low HDL (<40 mg/dL)",
            "Elevated BP (≥130/85)",
            "Elevated Fasting Glucose (≥100 mg/dL)",
        ]
    );
}

#[test]
fn test_healthy_patient_is_cluster_one() {
    let result = cluster_metabolic_syndrome(&mock_patient("6"));
    assert_eq!(result.criteria_count, 0);
    assert_eq!(result.cluster, 1);
    assert_eq!(result.cluster_name, "Metabolically Healthy");
    assert_eq!(result.risk_level, ClusterRiskLevel::Low);
    assert_eq!(result.characteristics, vec![NO_CRITERIA_MET]);

    assert_eq!(cluster_metabolic_syndrome(&healthy_female()).cluster, 1);
    assert_eq!(cluster_metabolic_syndrome(&severe_metabolic_male()).cluster, 4);
}

#[test]
fn test_intermediate_clusters() {
    // Fasting glucose only
    let at_risk = cluster_metabolic_syndrome(&mock_patient("4"));
    assert_eq!(at_risk.criteria_count, 1);
    assert_eq!(at_risk.metabolic_cluster(), MetabolicCluster::AtRisk);
    assert_eq!(at_risk.risk_level, ClusterRiskLevel::Moderate);

    // Triglycerides, BP and glucose; HDL 42 clears the male threshold
    let syndrome = cluster_metabolic_syndrome(&mock_patient("5"));
    assert_eq!(syndrome.criteria_count, 3);
    assert_eq!(syndrome.cluster, 3);
    assert_eq!(syndrome.risk_level, ClusterRiskLevel::High);
}

#[test]
fn test_hdl_threshold_depends_on_gender() {
    assert_eq!(hdl_threshold(Gender::Male), 40.0);
    assert_eq!(hdl_threshold(Gender::Female), 50.0);
    assert_eq!(hdl_threshold(Gender::Other), 50.0);

    let female = Patient {
        hdl_cholesterol: 45.0,
        ..healthy_female()
    };
    assert!(MetabolicCriterion::LowHdl.is_met(&female));
    let result = cluster_metabolic_syndrome(&female);
    assert_eq!(result.characteristics, vec!["Low HDL (<50 mg/dL)"]);

    let male = Patient {
        gender: Gender::Male,
        ..female
    };
    assert!(!MetabolicCriterion::LowHdl.is_met(&male));
}

#[test]
fn test_blood_pressure_criterion_is_either_reading() {
    let diastolic_only = Patient {
        blood_pressure_systolic: 120.0,
        blood_pressure_diastolic: 85.0,
        ..healthy_female()
    };
    assert!(MetabolicCriterion::ElevatedBloodPressure.is_met(&diastolic_only));
}

#[test]
fn test_cluster_for_every_count() {
    let expected = [1, 2, 2, 3, 3, 4];
    for (count, id) in expected.into_iter().enumerate() {
        assert_eq!(MetabolicCluster::from_criteria_count(count).id(), id);
    }
}
