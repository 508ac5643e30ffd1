//! Utility functions for error handling
//!
//! File helpers that attach the path and the reason the file was needed to
//! every failure, so a missing input aborts with a message naming it.

use std::fs;
use std::io;
use std::path::Path;

use crate::error::{ReportError, Result};

/// Safely open a file with rich error information
///
/// # Arguments
/// * `path` - The path to the file to open
/// * `purpose` - Why the file is being opened (for error context)
pub fn safe_open_file(path: &Path, purpose: &str) -> Result<fs::File> {
    if !path.exists() {
        return Err(ReportError::file(
            path,
            format!("File not found (needed for: {purpose})"),
        ));
    }

    if !path.is_file() {
        return Err(ReportError::file(
            path,
            format!("Path is not a file (expected a file for: {purpose})"),
        ));
    }

    match fs::File::open(path) {
        Ok(file) => Ok(file),
        Err(e) => {
            let context = match e.kind() {
                io::ErrorKind::PermissionDenied => {
                    "Permission denied - check file permissions".to_string()
                }
                io::ErrorKind::NotFound => {
                    "File not found - it may have been deleted during operation".to_string()
                }
                _ => format!("Failed to open file for: {purpose}"),
            };

            Err(ReportError::file_with_source(path, context, e))
        }
    }
}

/// Safely read a file to string with rich error information
pub fn safe_read_to_string(path: &Path, purpose: &str) -> Result<String> {
    let mut file = safe_open_file(path, purpose)?;

    let mut content = String::new();
    match io::Read::read_to_string(&mut file, &mut content) {
        Ok(_) => Ok(content),
        Err(e) => {
            let context = match e.kind() {
                io::ErrorKind::InvalidData => {
                    "File contains invalid UTF-8 data - cannot read as text".to_string()
                }
                _ => format!("Failed to read file content for: {purpose}"),
            };

            Err(ReportError::file_with_source(path, context, e))
        }
    }
}

/// Check that every path exists before any of them is read
///
/// Inputs are validated up front so a run never computes a partial report
/// when one of its files is absent.
pub fn require_files(files: &[(&Path, &str)]) -> Result<()> {
    for (path, purpose) in files {
        if !path.is_file() {
            return Err(ReportError::file(
                *path,
                format!("File not found (needed for: {purpose})"),
            ));
        }
    }
    Ok(())
}
