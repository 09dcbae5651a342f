//! Error types for the test suite.
//!
//! [`AlignError`] is the only failure the diff engine can report;
//! [`SuiteError`] covers configuration loading.

use thiserror::Error;

/// Errors raised while building an LCS table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AlignError {
    /// The `rows x cols` table could not be allocated.
    #[error("cannot allocate a {rows}x{cols} LCS table")]
    Allocation { rows: usize, cols: usize },
}

/// Errors that can occur while setting up a test run.
#[derive(Debug, Error)]
pub enum SuiteError {
    /// Error reading a configuration file.
    #[error("failed to read config: {path}: {message}")]
    Load { path: String, message: String },

    /// Error parsing configuration contents.
    #[error("failed to parse config: {message}")]
    Parse { message: String },
}

/// Result type for suite operations.
pub type SuiteResult<T> = Result<T, SuiteError>;
