use num_traits::Float;

use crate::error::LinalgError;
use crate::factors::TriangularFactors;
use crate::matrix::{LowerTriangular, Matrix, UpperTriangular};

/// Cholesky factors `A = L * Lᵗ` of a symmetric positive-definite matrix.
///
/// The upper factor is stored as the transpose of `L` so the factorization
/// solves through the same [`TriangularFactors`] path as the LU variants.
#[derive(Debug, Clone, PartialEq)]
pub struct Cholesky<T> {
    lower: LowerTriangular<T>,
    upper: UpperTriangular<T>,
}

impl<T: Float> TriangularFactors<T> for Cholesky<T> {
    fn lower(&self) -> &LowerTriangular<T> {
        &self.lower
    }

    fn upper(&self) -> &UpperTriangular<T> {
        &self.upper
    }
}

impl<T> Cholesky<T> {
    /// Consume the factorization and return `(L, Lᵗ)`.
    pub fn into_factors(self) -> (LowerTriangular<T>, UpperTriangular<T>) {
        (self.lower, self.upper)
    }
}

/// Compute the Cholesky factorization of a symmetric positive-definite matrix.
///
/// Only the lower triangle of `matrix` is read, symmetry must be checked by
/// the caller (see [`crate::checks::is_symmetric`]). Positive-definiteness is
/// verified while factoring: every diagonal radicand
/// `a[j][j] - sum_{k<j} L[j][k]^2` must be strictly positive.
///
/// # Errors
///
/// Returns [`LinalgError::NotPositiveDefinite`] at the first non-positive
/// radicand. No partially filled factor is returned.
///
/// # Example
///
/// ```
/// use trisolve::{cholesky_decompose, Matrix, TriangularFactors};
///
/// let a = Matrix::from_rows(vec![
///     vec![4.0, 12.0, -16.0],
///     vec![12.0, 37.0, -43.0],
///     vec![-16.0, -43.0, 98.0],
/// ])
/// .unwrap();
/// let chol = cholesky_decompose(&a).unwrap();
/// assert_eq!(chol.lower().as_matrix().row(2), &[-8.0, 5.0, 3.0]);
/// ```
pub fn cholesky_decompose<T: Float>(matrix: &Matrix<T>) -> Result<Cholesky<T>, LinalgError> {
    let n = matrix.size();
    let mut l = Matrix::zeros_like(n);

    for i in 0..n {
        for j in 0..=i {
            if i == j {
                let sum = (0..j).fold(T::zero(), |acc, k| acc + l[(j, k)] * l[(j, k)]);
                let radicand = matrix[(j, j)] - sum;
                if radicand <= T::zero() || radicand.is_nan() {
                    log::debug!("cholesky: non-positive radicand at diagonal {j}");
                    return Err(LinalgError::NotPositiveDefinite { index: j });
                }
                l[(j, j)] = radicand.sqrt();
            } else {
                let sum = (0..j).fold(T::zero(), |acc, k| acc + l[(i, k)] * l[(j, k)]);
                l[(i, j)] = (matrix[(i, j)] - sum) / l[(j, j)];
            }
        }
    }

    let lower = LowerTriangular::from_matrix_unchecked(l);
    let upper = lower.transpose();
    Ok(Cholesky { lower, upper })
}
