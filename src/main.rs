use anyhow::{Context, bail};
use ehr_cds::algorithm::cohort::score_cohort_with_progress;
use ehr_cds::utils::logging::{create_main_progress_bar, create_spinner, finish_progress_bar};
use ehr_cds::{
    CohortStatistics, ConfidenceMode, ScoringConfig, generate_summary, load_patients,
};
use log::info;
use std::path::PathBuf;

fn main() -> anyhow::Result<()> {
    // Setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut path = None;
    let mut confidence = ConfidenceMode::Sampled;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--midpoint" => confidence = ConfidenceMode::Midpoint,
            flag if flag.starts_with("--") => bail!("Unknown option: {flag}"),
            _ => path = Some(PathBuf::from(arg)),
        }
    }
    let Some(path) = path else {
        bail!("Usage: ehr-cds <patients.json> [--midpoint]");
    };

    let spinner = create_spinner(Some("Loading patients"));
    let loaded = load_patients(&path);
    spinner.finish_and_clear();
    let patients =
        loaded.with_context(|| format!("Failed to load patients from {}", path.display()))?;

    let config = ScoringConfig::new().with_confidence(confidence);
    info!("{}", config.to_string().trim_end());

    let pb = create_main_progress_bar(patients.len() as u64, Some("Scoring patients"));
    let cohort = score_cohort_with_progress(&patients, &config, &pb);
    finish_progress_bar(&pb, Some("Scoring complete"));

    for patient in &patients {
        let Some(assessment) = cohort.get(&patient.id) else {
            continue;
        };
        println!(
            "{:>8} {:<24}  CKD {:>3} {:<9}  Diabetes {:>3} {:<9}  BP {:>3}/{:<3} {:<9}  Metabolic {}",
            assessment.patient_id,
            patient.full_name(),
            assessment.ckd.score,
            assessment.ckd.risk_level,
            assessment.diabetes.score,
            assessment.diabetes.risk_level,
            assessment.blood_pressure.predicted_systolic,
            assessment.blood_pressure.predicted_diastolic,
            assessment.blood_pressure.prediction.risk_level,
            assessment.metabolic.cluster_name,
        );
    }

    let stats = CohortStatistics::from_patients(&patients);
    println!("\n{}", generate_summary(&stats, &cohort));

    Ok(())
}
