//! Logging utilities for diagnostics and console output
//!
//! This module provides utilities for logging and for printing a roster to
//! the console.

pub mod console;
pub mod log;

// Re-export commonly used functions for convenience
pub use log::{log_operation, log_operation_complete, log_warning};
