//! LU decomposition with partial pivoting
//!
//! Crout-style factorization that stores the combined lower and upper factors
//! in a single buffer, tracking the row permutation and swap parity chosen
//! during pivoting. The factorization backs [`determinant`] and [`inverse`]
//! as well as the usual linear solve.

use crate::error::{MatrixError, Result};
use ndarray::{Array1, Array2};

/// Pivot magnitudes at or below this threshold are treated as zero.
///
/// Used both when deciding whether a column can be eliminated during
/// factorization and for the diagonal divisors in backward substitution.
pub const PIVOT_TOLERANCE: f64 = 1e-30;

/// LU factorization result
///
/// Stores the combined L and U factors along with the row permutation and
/// the parity of the swaps that produced it.
#[derive(Debug, Clone)]
pub struct LuFactorization {
    /// Combined L and U factors. L is unit lower triangular and occupies the
    /// strict lower part as multipliers; the diagonal and upper part hold U.
    pub lum: Array2<f64>,
    /// Row permutation: `perm[i]` is the original index of the row that ended
    /// up in slot `i` after pivoting. Always a bijection on `0..n`.
    pub perm: Vec<usize>,
    /// Swap parity: `+1` after an even number of row swaps, `-1` after odd
    pub sign: i32,
    /// Matrix dimension
    pub n: usize,
}

impl LuFactorization {
    /// Solve `A x = b` using the pre-computed factorization.
    ///
    /// Applies the row permutation to `b`, then runs the two triangular
    /// phases. Fails with [`MatrixError::ShapeMismatch`] if `b` has the wrong
    /// length and with [`MatrixError::SingularMatrix`] if a diagonal divisor
    /// vanishes.
    pub fn solve(&self, b: &Array1<f64>) -> Result<Array1<f64>> {
        if b.len() != self.n {
            return Err(MatrixError::ShapeMismatch {
                expected: self.n,
                got: b.len(),
            });
        }
        let permuted = Array1::from_shape_fn(self.n, |i| b[self.perm[i]]);
        self.solve_permuted(&permuted)
    }

    /// Solve against a right-hand side that is already permuted to match
    /// [`perm`](Self::perm).
    ///
    /// Forward substitution over the implicit-unit lower factor, then
    /// backward substitution dividing by the stored upper diagonal. A divisor
    /// within [`PIVOT_TOLERANCE`] of zero signals a singular system.
    pub fn solve_permuted(&self, b: &Array1<f64>) -> Result<Array1<f64>> {
        let n = self.n;
        if b.len() != n {
            return Err(MatrixError::ShapeMismatch {
                expected: n,
                got: b.len(),
            });
        }

        let mut x = b.clone();

        // Forward phase: L y = b. Unit diagonal, so row 0 is already solved.
        for i in 1..n {
            let mut sum = x[i];
            for j in 0..i {
                sum -= self.lum[[i, j]] * x[j];
            }
            x[i] = sum;
        }

        // Backward phase: U x = y.
        for i in (0..n).rev() {
            let mut sum = x[i];
            for j in (i + 1)..n {
                sum -= self.lum[[i, j]] * x[j];
            }
            let divisor = self.lum[[i, i]];
            if divisor.abs() <= PIVOT_TOLERANCE {
                return Err(MatrixError::SingularMatrix);
            }
            x[i] = sum / divisor;
        }

        Ok(x)
    }

    /// Determinant of the factored matrix: the swap parity times the product
    /// of the upper-diagonal entries.
    pub fn determinant(&self) -> f64 {
        let diag_product: f64 = (0..self.n).map(|i| self.lum[[i, i]]).product();
        f64::from(self.sign) * diag_product
    }
}

/// Compute the Crout LU factorization of a square matrix with partial
/// pivoting.
///
/// The input is copied; the caller's matrix is left untouched. Row swaps are
/// applied to the copy and recorded in the permutation and sign. A degenerate
/// pivot column (magnitude at or below [`PIVOT_TOLERANCE`]) is skipped rather
/// than eliminated, so factorization of a singular matrix still succeeds and
/// reports a zero determinant; only the solve paths reject it.
pub fn lu_factorize(a: &Array2<f64>) -> Result<LuFactorization> {
    let n = a.nrows();
    if n != a.ncols() {
        return Err(MatrixError::NotSquare {
            rows: n,
            cols: a.ncols(),
        });
    }

    let mut lum = a.clone();
    let mut perm: Vec<usize> = (0..n).collect();
    let mut sign = 1;

    for j in 0..n.saturating_sub(1) {
        // Scan column j from the pivot row down. Strict comparison, so the
        // first-seen maximum wins ties.
        let mut max = lum[[j, j]].abs();
        let mut piv = j;
        for i in (j + 1)..n {
            let x = lum[[i, j]].abs();
            if x > max {
                max = x;
                piv = i;
            }
        }

        if piv != j {
            for k in 0..n {
                lum.swap([piv, k], [j, k]);
            }
            perm.swap(piv, j);
            sign = -sign;
        }

        let pivot = lum[[j, j]];
        if pivot.abs() <= PIVOT_TOLERANCE {
            log::warn!(
                "degenerate pivot {:e} in column {}, skipping elimination",
                pivot,
                j
            );
            continue;
        }

        for i in (j + 1)..n {
            let mult = lum[[i, j]] / pivot;
            lum[[i, j]] = mult;
            for k in (j + 1)..n {
                lum[[i, k]] -= mult * lum[[j, k]];
            }
        }
    }

    Ok(LuFactorization { lum, perm, sign, n })
}

/// Solve `A x = b` using LU decomposition.
///
/// This is a convenience function that combines factorization and solve.
pub fn lu_solve(a: &Array2<f64>, b: &Array1<f64>) -> Result<Array1<f64>> {
    let factorization = lu_factorize(a)?;
    factorization.solve(b)
}

/// Determinant of a square matrix via LU decomposition.
///
/// A singular matrix yields `0.0`; only a non-square input is an error.
pub fn determinant(a: &Array2<f64>) -> Result<f64> {
    Ok(lu_factorize(a)?.determinant())
}

/// Inverse of a square matrix via LU decomposition.
///
/// Factorizes once, then solves against the permuted unit basis vectors, one
/// per output column. Fails with [`MatrixError::SingularMatrix`] when the
/// matrix is not invertible.
pub fn inverse(a: &Array2<f64>) -> Result<Array2<f64>> {
    let factorization = lu_factorize(a)?;
    let n = factorization.n;

    let mut result = Array2::zeros((n, n));
    let mut b = Array1::zeros(n);
    for i in 0..n {
        // Basis vector for column i, permuted to match the factorization.
        for j in 0..n {
            b[j] = if factorization.perm[j] == i { 1.0 } else { 0.0 };
        }
        let x = factorization.solve_permuted(&b)?;
        for j in 0..n {
            result[[j, i]] = x[j];
        }
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use ndarray::array;

    #[test]
    fn test_determinant_2x2() {
        let a = array![[3.0_f64, 7.0], [4.0, 0.0]];
        let det = determinant(&a).expect("determinant should succeed");
        assert_relative_eq!(det, -28.0, epsilon = 1e-12);
    }

    #[test]
    fn test_determinant_1x1() {
        let a = array![[5.0_f64]];
        let det = determinant(&a).expect("determinant should succeed");
        assert_relative_eq!(det, 5.0);
    }

    #[test]
    fn test_pivot_sign_parity() {
        // Column 0 swaps rows 0 and 2, column 1 swaps rows 1 and 2: two
        // swaps, so the parity is even.
        let a = array![[1.0_f64, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 10.0]];
        let factorization = lu_factorize(&a).expect("factorization should succeed");

        assert_eq!(factorization.sign, 1);
        assert_eq!(factorization.perm, vec![2, 0, 1]);
        assert_relative_eq!(factorization.determinant(), -3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_pivot_rows_moved() {
        // The largest entry of column 0 must end up on the diagonal.
        let a = array![[1.0_f64, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 10.0]];
        let factorization = lu_factorize(&a).expect("factorization should succeed");
        assert_relative_eq!(factorization.lum[[0, 0]], 7.0);
    }

    #[test]
    fn test_solve() {
        let a = array![[4.0_f64, 1.0], [1.0, 3.0]];
        let b = array![1.0_f64, 2.0];

        let x = lu_solve(&a, &b).expect("solve should succeed");

        // Verify: Ax = b
        let ax = a.dot(&x);
        for i in 0..2 {
            assert_relative_eq!(ax[i], b[i], epsilon = 1e-10);
        }
    }

    #[test]
    fn test_solve_multiple_rhs() {
        let a = array![[4.0_f64, 1.0, 0.0], [1.0, 3.0, 1.0], [0.0, 1.0, 2.0]];
        let factorization = lu_factorize(&a).expect("factorization should succeed");

        let b1 = array![1.0_f64, 2.0, 3.0];
        let x1 = factorization.solve(&b1).expect("solve should succeed");
        let ax1 = a.dot(&x1);
        for i in 0..3 {
            assert_relative_eq!(ax1[i], b1[i], epsilon = 1e-10);
        }

        let b2 = array![4.0_f64, 5.0, 6.0];
        let x2 = factorization.solve(&b2).expect("solve should succeed");
        let ax2 = a.dot(&x2);
        for i in 0..3 {
            assert_relative_eq!(ax2[i], b2[i], epsilon = 1e-10);
        }
    }

    #[test]
    fn test_solve_length_mismatch() {
        let a = array![[4.0_f64, 1.0], [1.0, 3.0]];
        let factorization = lu_factorize(&a).expect("factorization should succeed");
        let b = array![1.0_f64, 2.0, 3.0];

        let err = factorization.solve(&b).unwrap_err();
        assert!(err.is_shape_error());
    }

    #[test]
    fn test_identity_inverse() {
        let n = 5;
        let a = Array2::from_diag(&Array1::from_elem(n, 1.0_f64));
        let inv = inverse(&a).expect("inverse should succeed");

        for i in 0..n {
            for j in 0..n {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert_abs_diff_eq!(inv[[i, j]], expected, epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn test_inverse_1x1() {
        let a = array![[5.0_f64]];
        let inv = inverse(&a).expect("inverse should succeed");
        assert_relative_eq!(inv[[0, 0]], 0.2, epsilon = 1e-12);
    }

    #[test]
    fn test_singular_determinant_is_zero() {
        let a = array![[1.0_f64, 2.0], [2.0, 4.0]];
        let det = determinant(&a).expect("determinant of singular matrix is still defined");
        assert_abs_diff_eq!(det, 0.0);
    }

    #[test]
    fn test_degenerate_middle_column_skipped() {
        // Column 1 collapses to zeros after the first elimination step, so
        // its elimination is skipped and the zero stays on the diagonal.
        let a = array![[2.0_f64, 4.0, 1.0], [1.0, 2.0, 7.0], [3.0, 6.0, 5.0]];
        let factorization = lu_factorize(&a).expect("factorization still succeeds");

        assert_abs_diff_eq!(factorization.lum[[1, 1]], 0.0);
        assert_abs_diff_eq!(factorization.determinant(), 0.0);

        let b = array![1.0_f64, 2.0, 3.0];
        let err = factorization.solve(&b).unwrap_err();
        assert!(err.is_singular());
    }

    #[test]
    fn test_singular_solve_fails() {
        let a = array![[1.0_f64, 2.0], [2.0, 4.0]];
        let b = array![1.0_f64, 2.0];

        let err = lu_solve(&a, &b).unwrap_err();
        assert!(err.is_singular());
    }

    #[test]
    fn test_singular_inverse_fails() {
        let a = array![[1.0_f64, 2.0], [2.0, 4.0]];
        let err = inverse(&a).unwrap_err();
        assert!(err.is_singular());
    }

    #[test]
    fn test_not_square() {
        let a = array![[1.0_f64, 2.0, 3.0], [4.0, 5.0, 6.0]];
        let err = lu_factorize(&a).unwrap_err();
        match err {
            MatrixError::NotSquare { rows, cols } => {
                assert_eq!(rows, 2);
                assert_eq!(cols, 3);
            }
            other => panic!("expected NotSquare, got {other:?}"),
        }
    }
}
