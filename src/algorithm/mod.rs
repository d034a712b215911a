//! Algorithm implementations for clinical decision support
//!
//! This module contains the per-patient risk models and the cohort-level
//! scoring and statistics built on top of them.

pub mod cohort;
pub mod risk;
