//! Error types for emprec
//!
//! Provides a unified error type for all operations.

use thiserror::Error;

/// Result type alias using EmprecError
pub type Result<T> = std::result::Result<T, EmprecError>;

/// Unified error type for emprec operations
#[derive(Debug, Error)]
pub enum EmprecError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Storage Format Errors
    // -------------------------------------------------------------------------
    #[error("Line {line}: invalid {field} value {value:?}")]
    Parse {
        line: usize,
        field: &'static str,
        value: String,
    },

    #[error("Line {line}: expected 5 fields, found {fields}")]
    MalformedLine { line: usize, fields: usize },

    // -------------------------------------------------------------------------
    // Input Errors
    // -------------------------------------------------------------------------
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}
