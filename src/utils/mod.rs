//! Shared utilities: logging helpers, progress bars and test fixtures

pub mod logging;
