//! Error types for the calculator engine.
//!
//! The data paths (arithmetic, history parsing) are deliberately fail-soft
//! and never surface errors; `CalcError` covers operand/operator validation
//! and the CLI's file handling.

use thiserror::Error;

/// Result type alias for engine operations
pub type Result<T> = std::result::Result<T, CalcError>;

/// Errors that can occur while validating input or running the CLI.
#[derive(Error, Debug)]
pub enum CalcError {
    /// Failed to read or write the history file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Operand text is not a plain finite decimal
    #[error("Invalid operand '{input}': expected a finite decimal number")]
    InvalidOperand { input: String },

    /// Operator symbol outside the supported set
    #[error("Unknown operator '{input}': expected one of ^ / x - +")]
    UnknownOperator { input: String },

    /// Missing CLI arguments
    #[error("Missing arguments. Usage: calc-engine <value1> <operator> <value2> [history.csv]")]
    MissingArgument,
}
