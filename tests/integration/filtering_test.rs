use ehr_cds::utils::test::mock_cohort;
use ehr_cds::{ClusterRiskLevel, PatientFilter, PatientPredicate, PatientStatus};
use pretty_assertions::assert_eq;

fn ids(filter: &PatientFilter) -> Vec<String> {
    let patients = mock_cohort();
    filter
        .apply(&patients)
        .into_iter()
        .map(|p| p.id.clone())
        .collect()
}

#[test]
fn test_search_by_last_name_fragment() {
    assert_eq!(ids(&PatientFilter::new().with_query("SON")), vec!["2", "6"]);
}

#[test]
fn test_search_by_mrn() {
    assert_eq!(ids(&PatientFilter::new().with_query("001236")), vec!["3"]);
}

#[test]
fn test_filter_by_status_and_risk() {
    assert_eq!(
        ids(&PatientFilter::new().with_status(PatientStatus::Critical)),
        vec!["3"]
    );
    assert_eq!(
        ids(&PatientFilter::new().with_risk_level(ClusterRiskLevel::High)),
        vec!["1", "3", "5"]
    );
    assert_eq!(
        ids(&PatientFilter::new()
            .with_risk_level(ClusterRiskLevel::High)
            .with_status(PatientStatus::Active)),
        vec!["1", "5"]
    );
}

#[test]
fn test_no_match() {
    assert!(ids(&PatientFilter::new().with_query("zzz")).is_empty());
}
