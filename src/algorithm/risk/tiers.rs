//! Risk tiers and score breakpoints
//!
//! Prediction models map a clamped score onto the four-tier `RiskLevel` through a
//! `Breakpoints` table. Metabolic clustering and intake triage use the three-tier
//! `ClusterRiskLevel`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Four ordered risk tiers for prediction models
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum RiskLevel {
    Low = 1,
    Moderate = 2,
    High = 3,
    VeryHigh = 4,
}

impl RiskLevel {
    /// Map a score onto a tier using the given breakpoints
    #[must_use]
    pub const fn from_score(score: u32, breakpoints: &Breakpoints) -> Self {
        if score >= breakpoints.very_high {
            Self::VeryHigh
        } else if score >= breakpoints.high {
            Self::High
        } else if score >= breakpoints.moderate {
            Self::Moderate
        } else {
            Self::Low
        }
    }

    /// Get a descriptive name for this tier
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Moderate => "Moderate",
            Self::High => "High",
            Self::VeryHigh => "Very High",
        }
    }

    /// All tiers in ascending order
    #[must_use]
    pub const fn all() -> [Self; 4] {
        [Self::Low, Self::Moderate, Self::High, Self::VeryHigh]
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.description())
    }
}

/// Three ordered risk tiers used by clustering and triage
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum ClusterRiskLevel {
    #[default]
    Low = 1,
    Moderate = 2,
    High = 3,
}

impl ClusterRiskLevel {
    /// Get a descriptive name for this tier
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Moderate => "Moderate",
            Self::High => "High",
        }
    }
}

impl From<&str> for ClusterRiskLevel {
    fn from(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "high" => Self::High,
            "moderate" => Self::Moderate,
            _ => Self::Low,
        }
    }
}

impl fmt::Display for ClusterRiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}

/// Lower score bounds (inclusive) for the upper three tiers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Breakpoints {
    pub very_high: u32,
    pub high: u32,
    pub moderate: u32,
}

/// Breakpoints shared by the CKD and diabetes models
pub const STANDARD_BREAKPOINTS: Breakpoints = Breakpoints {
    very_high: 60,
    high: 40,
    moderate: 20,
};

/// Breakpoints for the blood pressure model
pub const BLOOD_PRESSURE_BREAKPOINTS: Breakpoints = Breakpoints {
    very_high: 70,
    high: 50,
    moderate: 30,
};

/// Upper bound applied to every additive score
pub const MAX_SCORE: u32 = 100;
