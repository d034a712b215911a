//! Domain models for the clinical dashboard
//!
//! The patient snapshot consumed by every risk model, plus the small enums it uses.

pub mod patient;
pub mod types;

// Re-export commonly used types
pub use patient::{Patient, generate_mrn};
pub use types::{Gender, PatientStatus};
