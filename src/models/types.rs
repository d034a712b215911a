//! Common domain type definitions
//!
//! Enum types shared by the patient record and the scoring results.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Gender of a patient
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    /// Male gender
    Male,
    /// Female gender
    Female,
    /// Other or not specified
    #[default]
    #[serde(other)]
    Other,
}

impl Gender {
    /// Whether the patient is recorded as male
    #[must_use]
    pub const fn is_male(self) -> bool {
        matches!(self, Self::Male)
    }
}

impl From<&str> for Gender {
    fn from(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "m" | "male" | "1" => Self::Male,
            "f" | "female" | "2" => Self::Female,
            _ => Self::Other,
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Male => write!(f, "male"),
            Self::Female => write!(f, "female"),
            Self::Other => write!(f, "other"),
        }
    }
}

/// Care status of a patient record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatientStatus {
    /// Under active care
    #[default]
    Active,
    /// No longer followed
    Inactive,
    /// Flagged for urgent attention
    Critical,
}

impl From<&str> for PatientStatus {
    fn from(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "inactive" => Self::Inactive,
            "critical" => Self::Critical,
            _ => Self::Active,
        }
    }
}

impl fmt::Display for PatientStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Active => write!(f, "active"),
            Self::Inactive => write!(f, "inactive"),
            Self::Critical => write!(f, "critical"),
        }
    }
}
