//! Logging utilities for output and progress tracking
//!
//! This module provides standardized log messages and progress bars.

pub mod log;
pub mod progress;

// Re-export commonly used functions for convenience
pub use log::{log_cohort_complete, log_load_complete, log_load_start, log_rejected_patient};
pub use progress::{create_main_progress_bar, create_spinner, finish_progress_bar};
