//! Patient export loading utilities
//!
//! Reads the JSON array of patient records produced by the backend.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::time::Instant;

use crate::error::Result;
use crate::models::Patient;
use crate::utils::logging::{log_load_complete, log_load_start};

/// Read a JSON file holding an array of patient records
pub fn load_patients(path: &Path) -> Result<Vec<Patient>> {
    let start = Instant::now();
    log_load_start(path);

    let file = File::open(path)?;
    let patients: Vec<Patient> = serde_json::from_reader(BufReader::new(file))?;

    log_load_complete(path, patients.len(), start.elapsed());
    Ok(patients)
}

/// Parse patient records from a JSON string
pub fn parse_patients(json: &str) -> Result<Vec<Patient>> {
    Ok(serde_json::from_str(json)?)
}
