use num_traits::Float;

use crate::error::LinalgError;
use crate::factors::TriangularFactors;
use crate::matrix::{LowerTriangular, Matrix, UpperTriangular};

/// Doolittle factors `A = L * U` with a unit lower triangular `L`.
#[derive(Debug, Clone, PartialEq)]
pub struct Doolittle<T> {
    lower: LowerTriangular<T>,
    upper: UpperTriangular<T>,
}

impl<T: Float> TriangularFactors<T> for Doolittle<T> {
    fn lower(&self) -> &LowerTriangular<T> {
        &self.lower
    }

    fn upper(&self) -> &UpperTriangular<T> {
        &self.upper
    }
}

impl<T> Doolittle<T> {
    /// Consume the factorization and return `(L, U)`.
    pub fn into_factors(self) -> (LowerTriangular<T>, UpperTriangular<T>) {
        (self.lower, self.upper)
    }
}

/// Compute the Doolittle LU factorization without pivoting.
///
/// Row `i` of `U` is computed first, `U[i][j] = a[i][j] - sum_{k<i} L[i][k] * U[k][j]`
/// for `j >= i`, then column `i` of `L`,
/// `L[j][i] = (a[j][i] - sum_{k<i} L[j][k] * U[k][i]) / U[i][i]` for `j > i`.
/// The diagonal of `L` is fixed to one.
///
/// Callers are expected to reject singular matrices first (see
/// [`crate::checks::is_singular`]). A non-singular matrix with a zero leading
/// principal minor still cannot be factored without row exchanges; use
/// [`crate::lu_decompose_pivoted`] for those.
///
/// # Errors
///
/// Returns [`LinalgError::ZeroPivot`] when a division by an exactly zero
/// `U[i][i]` would be required.
pub fn doolittle_decompose<T: Float>(matrix: &Matrix<T>) -> Result<Doolittle<T>, LinalgError> {
    let n = matrix.size();
    let mut l = Matrix::zeros_like(n);
    let mut u = Matrix::zeros_like(n);

    for i in 0..n {
        for j in i..n {
            let sum = (0..i).fold(T::zero(), |acc, k| acc + l[(i, k)] * u[(k, j)]);
            u[(i, j)] = matrix[(i, j)] - sum;
        }

        l[(i, i)] = T::one();

        if i + 1 < n && u[(i, i)].is_zero() {
            log::debug!("doolittle: zero pivot at U[{i}][{i}]");
            return Err(LinalgError::ZeroPivot { index: i });
        }

        for j in i + 1..n {
            let sum = (0..i).fold(T::zero(), |acc, k| acc + l[(j, k)] * u[(k, i)]);
            l[(j, i)] = (matrix[(j, i)] - sum) / u[(i, i)];
        }
    }

    Ok(Doolittle {
        lower: LowerTriangular::from_matrix_unchecked(l),
        upper: UpperTriangular::from_matrix_unchecked(u),
    })
}
