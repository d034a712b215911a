use crate::utils::{assert_close, mock_patient};
use ehr_cds::utils::test::{date, mock_cohort};
use ehr_cds::{Gender, Patient, ScoringError, generate_mrn};
use rand::SeedableRng;
use rand::rngs::StdRng;

#[test]
fn test_age_ignores_birthday_within_year() {
    let patient = mock_patient("1");
    assert_eq!(patient.date_of_birth, Some(date(1958, 3, 15)));
    assert_eq!(patient.age_in_year(2024), Some(66));
    assert_eq!(patient.age_in_year(1958), Some(0));
}

#[test]
fn test_calculated_bmi_from_weight_and_height() {
    let patient = mock_patient("1");
    assert_close(patient.calculated_bmi(), 98.0 / (1.78 * 1.78));

    let no_height = Patient {
        height: 0.0,
        bmi: 27.5,
        ..mock_patient("1")
    };
    assert_close(no_height.calculated_bmi(), 27.5);
}

#[test]
fn test_full_name() {
    assert_eq!(mock_patient("3").full_name(), "Michael Chen");
}

#[test]
fn test_mock_cohort_is_valid() -> ehr_cds::Result<()> {
    for patient in mock_cohort() {
        patient.validate()?;
    }
    Ok(())
}

#[test]
fn test_validate_reports_first_non_finite_field() {
    let patient = Patient {
        egfr: f64::INFINITY,
        albumin: f64::NAN,
        ..Patient::new("bad", Gender::Male, date(1970, 1, 1))
    };
    match patient.validate() {
        Err(ScoringError::NonFiniteField {
            patient_id, field, ..
        }) => {
            assert_eq!(patient_id, "bad");
            assert_eq!(field, "egfr");
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn test_generate_mrn_format() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..100 {
        let mrn = generate_mrn(&mut rng);
        let digits = mrn.strip_prefix("MRN-").expect("prefix");
        assert_eq!(digits.len(), 6);
        let number: u32 = digits.parse().expect("numeric");
        assert!((100_000..1_000_000).contains(&number));
    }
}
