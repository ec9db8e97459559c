//! Logging utilities
//!
//! This module provides standardized logging functions for operations.

/// Log an operation with consistent format
///
/// # Arguments
/// * `operation` - Description of the operation
/// * `subject` - What the operation acts on
pub fn log_operation(operation: &str, subject: &str) {
    log::debug!("{operation} {subject}");
}

/// Log an operation completion with consistent format
///
/// # Arguments
/// * `operation` - Description of the operation
/// * `subject` - What the operation acted on
/// * `items` - Optional number of items affected
pub fn log_operation_complete(operation: &str, subject: &str, items: Option<usize>) {
    if let Some(items) = items {
        log::info!("Successfully {operation} {subject} ({items} items)");
    } else {
        log::info!("Successfully {operation} {subject}");
    }
}

/// Log a warning with consistent format
///
/// # Arguments
/// * `message` - Warning message
/// * `subject` - Optional name the warning is about
pub fn log_warning(message: &str, subject: Option<&str>) {
    if let Some(subject) = subject {
        log::warn!("{subject}: {message}");
    } else {
        log::warn!("{message}");
    }
}
