//! Utility functions for error handling
//!
//! This module provides file helpers that report failures with the path and
//! the purpose of the access.

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use crate::error::{GradebookError, Result};

/// Safely open a file with rich error information
///
/// # Arguments
/// * `path` - The path to the file to open
/// * `purpose` - Why the file is being opened (for error context)
pub fn safe_open_file(path: &Path, purpose: &str) -> Result<fs::File> {
    if !path.exists() {
        return Err(
            GradebookError::io_error(io::ErrorKind::NotFound, "File not found", path)
                .context(format!("needed for: {purpose}")),
        );
    }

    if !path.is_file() {
        return Err(
            GradebookError::io_error(io::ErrorKind::InvalidInput, "Path is not a file", path)
                .context(format!("expected a file for: {purpose}")),
        );
    }

    fs::File::open(path).map_err(|e| {
        let context = match e.kind() {
            io::ErrorKind::PermissionDenied => {
                "Permission denied - check file permissions".to_string()
            }
            _ => format!("Failed to open file for: {purpose}"),
        };
        GradebookError::io_error_with_source(format!("{context}: {}", path.display()), e)
    })
}

/// Safely read a file to string with rich error information
pub fn safe_read_to_string(path: &Path, purpose: &str) -> Result<String> {
    let mut file = safe_open_file(path, purpose)?;

    let mut content = String::new();
    match file.read_to_string(&mut content) {
        Ok(_) => Ok(content),
        Err(e) => {
            let context = match e.kind() {
                io::ErrorKind::InvalidData => {
                    "File contains invalid UTF-8 data - cannot read as text".to_string()
                }
                _ => format!("Failed to read file content for: {purpose}"),
            };
            Err(GradebookError::io_error_with_source(
                format!("{context}: {}", path.display()),
                e,
            ))
        }
    }
}
