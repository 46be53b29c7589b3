//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs.

use super::config::{EXIT_NO_FILES, EXIT_OUTPUT_FAILED, EXIT_USAGE};
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a thread dump
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Failed to read {}: {source}", .path.display())]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors that end an analyze run before or while printing the report
#[derive(Error, Debug)]
pub enum AnalyzeError {
    #[error("no dump paths given")]
    NoInputs,

    #[error("No files found.")]
    NoFilesFound,

    #[error("Failed to write report: {0}")]
    Output(#[from] std::io::Error),
}

impl AnalyzeError {
    /// Process exit status for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            AnalyzeError::NoInputs => EXIT_USAGE,
            AnalyzeError::NoFilesFound => EXIT_NO_FILES,
            AnalyzeError::Output(_) => EXIT_OUTPUT_FAILED,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_are_distinct() {
        let usage = AnalyzeError::NoInputs.exit_code();
        let empty = AnalyzeError::NoFilesFound.exit_code();
        let output = AnalyzeError::Output(std::io::Error::other("closed")).exit_code();

        assert_eq!(usage, 1);
        assert_eq!(empty, 2);
        assert_ne!(output, usage);
        assert_ne!(output, empty);
        assert_ne!(output, 0);
    }

    #[test]
    fn test_no_files_message() {
        assert_eq!(AnalyzeError::NoFilesFound.to_string(), "No files found.");
    }
}
