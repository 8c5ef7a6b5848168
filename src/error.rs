//! Error types for dense matrix operations.
//!
//! This module provides structured error handling for matrix parsing,
//! multiplication and the LU-based solvers, following the Microsoft Rust
//! Guidelines pattern of using `thiserror` for library error types with
//! helper methods for error categorization.

use thiserror::Error;

/// Errors that can occur during matrix construction and LU-based computation.
#[derive(Debug, Error)]
pub enum MatrixError {
    /// A square matrix was required but a rectangular one was supplied.
    #[error("matrix is not square: {rows} rows x {cols} cols")]
    NotSquare {
        /// Number of rows in the offending matrix
        rows: usize,
        /// Number of columns in the offending matrix
        cols: usize,
    },

    /// Element count does not match the requested shape.
    #[error("shape mismatch: expected {expected} values, got {got}")]
    ShapeMismatch {
        /// Number of values the shape requires
        expected: usize,
        /// Number of values actually supplied
        got: usize,
    },

    /// A literal failed to parse as a floating-point number.
    #[error("invalid float literal {token:?} at position {index}")]
    ParseFloat {
        /// The offending token, with surrounding whitespace trimmed
        token: String,
        /// Zero-based position of the token in the input
        index: usize,
    },

    /// Inner dimensions of a matrix product do not agree.
    #[error(
        "dimension mismatch: left matrix has {left_cols} cols, right matrix has {right_rows} rows"
    )]
    DimensionMismatch {
        /// Column count of the left operand
        left_cols: usize,
        /// Row count of the right operand
        right_rows: usize,
    },

    /// The matrix is singular or nearly singular and cannot be solved against.
    #[error("matrix is singular or nearly singular")]
    SingularMatrix,
}

/// A specialized `Result` type for matrix operations.
pub type Result<T> = std::result::Result<T, MatrixError>;

impl MatrixError {
    /// Returns `true` if this is a shape-related error.
    ///
    /// This includes `NotSquare`, `ShapeMismatch` and `DimensionMismatch`.
    pub fn is_shape_error(&self) -> bool {
        matches!(
            self,
            MatrixError::NotSquare { .. }
                | MatrixError::ShapeMismatch { .. }
                | MatrixError::DimensionMismatch { .. }
        )
    }

    /// Returns `true` if this is a parse error.
    pub fn is_parse_error(&self) -> bool {
        matches!(self, MatrixError::ParseFloat { .. })
    }

    /// Returns `true` if the matrix was detected as singular.
    pub fn is_singular(&self) -> bool {
        matches!(self, MatrixError::SingularMatrix)
    }
}
