use num_traits::Float;

use crate::error::LinalgError;
use crate::matrix::{LowerTriangular, UpperTriangular};

fn check_rhs_len(n: usize, len: usize) -> Result<(), LinalgError> {
    if n != len {
        return Err(LinalgError::DimensionMismatch {
            expected: n,
            actual: len,
        });
    }
    Ok(())
}

/// Solve `L * y = b` by forward substitution.
///
/// Computes `y[i] = (b[i] - sum_{j<i} L[i][j] * y[j]) / L[i][i]` for
/// increasing `i`.
///
/// # Arguments
///
/// * `lower` - The lower triangular matrix `L`.
/// * `b` - The right-hand side, one entry per row of `L`.
///
/// # Errors
///
/// * [`LinalgError::DimensionMismatch`] if `b.len()` differs from the size of `L`.
/// * [`LinalgError::ZeroDiagonal`] if a diagonal entry of `L` is exactly zero.
pub fn solve_lower_triangular<T: Float>(
    lower: &LowerTriangular<T>,
    b: &[T],
) -> Result<Vec<T>, LinalgError> {
    let n = lower.size();
    check_rhs_len(n, b.len())?;

    let l = lower.as_matrix();
    let mut y = vec![T::zero(); n];
    for i in 0..n {
        let diag = l[(i, i)];
        if diag.is_zero() {
            return Err(LinalgError::ZeroDiagonal { index: i });
        }
        let sum = l.row(i)[..i]
            .iter()
            .zip(y.iter())
            .fold(T::zero(), |acc, (&l_ij, &y_j)| acc + l_ij * y_j);
        y[i] = (b[i] - sum) / diag;
    }
    Ok(y)
}

/// Solve `U * x = y` by back substitution.
///
/// Computes `x[i] = (y[i] - sum_{j>i} U[i][j] * x[j]) / U[i][i]` for
/// decreasing `i`.
///
/// # Arguments
///
/// * `upper` - The upper triangular matrix `U`.
/// * `y` - The right-hand side, one entry per row of `U`.
///
/// # Errors
///
/// * [`LinalgError::DimensionMismatch`] if `y.len()` differs from the size of `U`.
/// * [`LinalgError::ZeroDiagonal`] if a diagonal entry of `U` is exactly zero.
pub fn solve_upper_triangular<T: Float>(
    upper: &UpperTriangular<T>,
    y: &[T],
) -> Result<Vec<T>, LinalgError> {
    let n = upper.size();
    check_rhs_len(n, y.len())?;

    let u = upper.as_matrix();
    let mut x = vec![T::zero(); n];
    for i in (0..n).rev() {
        let diag = u[(i, i)];
        if diag.is_zero() {
            return Err(LinalgError::ZeroDiagonal { index: i });
        }
        let sum = u.row(i)[i + 1..]
            .iter()
            .zip(x[i + 1..].iter())
            .fold(T::zero(), |acc, (&u_ij, &x_j)| acc + u_ij * x_j);
        x[i] = (y[i] - sum) / diag;
    }
    Ok(x)
}
