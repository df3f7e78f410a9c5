//! Error types for co-occurrence validation and eigenvalue computation

use std::fmt;

/// Main error type for all texture operations
#[derive(Debug, Clone, PartialEq)]
pub enum TextureError {
    /// Matrix handed to a square-only operation has mismatched dimensions
    NotSquare {
        /// Number of rows supplied
        rows: usize,
        /// Number of columns supplied
        cols: usize,
    },

    /// Matrix contains a NaN or infinite entry
    NonFiniteEntry {
        /// Row of the offending entry
        row: usize,
        /// Column of the offending entry
        col: usize,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// QR iteration exhausted its shift budget on an undeflated block
    ///
    /// Recoverable: the maximal correlation coefficient degrades to zero
    /// while every other feature is still reported.
    NoConvergence {
        /// Order of the matrix being solved
        order: usize,
        /// Index of the trailing row of the block that failed to deflate
        block_end: usize,
        /// Shift iterations spent on that block
        iterations: usize,
    },

    /// Numerical computation produced invalid result
    Computation {
        /// Name of the computation that failed
        operation: &'static str,
        /// Description of the failure
        reason: String,
    },
}

impl fmt::Display for TextureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotSquare { rows, cols } => {
                write!(f, "Matrix must be square, got {rows}x{cols}")
            }
            Self::NonFiniteEntry { row, col } => {
                write!(f, "Matrix entry ({row}, {col}) is not finite")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::NoConvergence {
                order,
                block_end,
                iterations,
            } => {
                write!(
                    f,
                    "Eigenvalue iteration did not converge after {iterations} shifts \
                     (block ending at row {block_end} of order {order} matrix)"
                )
            }
            Self::Computation { operation, reason } => {
                write!(f, "Computation error in {operation}: {reason}")
            }
        }
    }
}

impl std::error::Error for TextureError {}

/// Convenience type alias for texture results
pub type Result<T> = std::result::Result<T, TextureError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> TextureError {
    TextureError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a computation error
pub fn computation_error(operation: &'static str, reason: &impl ToString) -> TextureError {
    TextureError::Computation {
        operation,
        reason: reason.to_string(),
    }
}

impl From<ndarray::ShapeError> for TextureError {
    fn from(err: ndarray::ShapeError) -> Self {
        computation_error("array shape", &err)
    }
}
