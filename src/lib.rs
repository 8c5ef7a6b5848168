//! Dense LU decomposition toolkit
//!
//! This crate provides a small dense linear-algebra kernel built around LU
//! decomposition with partial pivoting:
//!
//! - **Factorization**: Crout-style combined L/U storage with row
//!   permutation and swap-parity tracking
//! - **Solves**: forward/backward substitution, reusable across many
//!   right-hand sides
//! - **Determinant and inverse**: computed from a single factorization
//! - **Parsing and display**: comma-separated literal parsing and
//!   fixed-width right-aligned rendering for quick inspection
//!
//! Vectors and matrices are ordinary `ndarray` containers: build filled ones
//! with `Array1::from_elem` / `Array2::from_elem`, parse literal strings with
//! [`parse_vector`] / [`parse_matrix`].
//!
//! # Example
//!
//! ```
//! use math_matrix::{determinant, inverse, multiply, parse_matrix};
//!
//! let m = parse_matrix(2, 2, "3,7, 4,0")?;
//! assert!((determinant(&m)? - (-28.0)).abs() < 1e-12);
//!
//! let inv = inverse(&m)?;
//! let product = multiply(&m, &inv)?;
//! assert!((product[[0, 0]] - 1.0).abs() < 1e-12);
//! # Ok::<(), math_matrix::MatrixError>(())
//! ```

pub mod dense;
pub mod direct;
pub mod display;
pub mod error;

// Re-export construction and multiplication
pub use dense::{multiply, parse_matrix, parse_vector};

// Re-export the direct solver surface
pub use direct::{determinant, inverse, lu_factorize, lu_solve, LuFactorization, PIVOT_TOLERANCE};

// Re-export text rendering
pub use display::{format_matrix, format_vector};

// Re-export error types
pub use error::{MatrixError, Result};
