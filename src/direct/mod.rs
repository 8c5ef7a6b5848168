//! Direct solvers for dense linear systems
//!
//! This module provides the direct (non-iterative) machinery:
//! - [`lu_factorize`]: Crout LU decomposition with partial pivoting
//! - [`lu_solve`]: factorize-and-solve convenience
//! - [`determinant`] / [`inverse`]: computed from one factorization

mod lu;

pub use lu::{determinant, inverse, lu_factorize, lu_solve, LuFactorization, PIVOT_TOLERANCE};
