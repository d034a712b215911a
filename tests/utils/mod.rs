//! Shared helpers for integration tests

use ehr_cds::Patient;
use ehr_cds::utils::test::mock_cohort;

/// Look up a mock patient by id
pub fn mock_patient(id: &str) -> Patient {
    mock_cohort()
        .into_iter()
        .find(|p| p.id == id)
        .unwrap_or_else(|| panic!("no mock patient with id {id}"))
}

/// Assert two floats agree to within `1e-9`
pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}
