//! Dense vector and matrix construction.
//!
//! Vectors and matrices are plain `ndarray` containers ([`Array1<f64>`] /
//! [`Array2<f64>`]); filled construction goes through `Array1::from_elem` and
//! `Array2::from_elem`. This module adds parsers for the comma-separated
//! literal format and a dimension-checked matrix product.

use crate::error::{MatrixError, Result};
use ndarray::{Array1, Array2};

/// Parse a vector from comma-separated floating-point literals.
///
/// Whitespace around each literal is ignored, so `"1.0, 2.5,3"` parses to a
/// vector of length 3. Fails with [`MatrixError::ParseFloat`] if a token is
/// not a valid float or parses to NaN.
pub fn parse_vector(s: &str) -> Result<Array1<f64>> {
    let mut values = Vec::new();
    for (index, token) in s.split(',').enumerate() {
        values.push(parse_literal(token, index)?);
    }
    Ok(Array1::from_vec(values))
}

/// Parse a `rows x cols` matrix from flattened comma-separated literals in
/// row-major order, e.g. `parse_matrix(2, 3, "1,2,3, 4,5,6")`.
///
/// The input must contain exactly `rows * cols` values; any other count
/// fails with [`MatrixError::ShapeMismatch`]. Invalid literals fail as in
/// [`parse_vector`].
pub fn parse_matrix(rows: usize, cols: usize, s: &str) -> Result<Array2<f64>> {
    let mut values = Vec::with_capacity(rows * cols);
    for (index, token) in s.split(',').enumerate() {
        values.push(parse_literal(token, index)?);
    }
    if values.len() != rows * cols {
        return Err(MatrixError::ShapeMismatch {
            expected: rows * cols,
            got: values.len(),
        });
    }
    let matrix = Array2::from_shape_vec((rows, cols), values)
        .expect("element count was checked against the shape");
    Ok(matrix)
}

/// Dimension-checked matrix product.
///
/// Fails with [`MatrixError::DimensionMismatch`] when the operands are not
/// conformable (`a.cols != b.rows`); the product itself is delegated to
/// [`ndarray::Array2::dot`].
pub fn multiply(a: &Array2<f64>, b: &Array2<f64>) -> Result<Array2<f64>> {
    if a.ncols() != b.nrows() {
        return Err(MatrixError::DimensionMismatch {
            left_cols: a.ncols(),
            right_rows: b.nrows(),
        });
    }
    Ok(a.dot(b))
}

fn parse_literal(token: &str, index: usize) -> Result<f64> {
    let trimmed = token.trim();
    match trimmed.parse::<f64>() {
        Ok(value) if !value.is_nan() => Ok(value),
        _ => Err(MatrixError::ParseFloat {
            token: trimmed.to_string(),
            index,
        }),
    }
}
