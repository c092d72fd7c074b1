use num_traits::Float;

use crate::error::LinalgError;
use crate::factors::{Solution, TriangularFactors};
use crate::matrix::{LowerTriangular, Matrix, UpperTriangular};
use crate::triangular::{solve_lower_triangular, solve_upper_triangular};

/// LU factors with partial pivoting, `P * A = L * U`.
///
/// `permutation()[i]` is the row of `A` that ends up in row `i` of `P * A`.
#[derive(Debug, Clone, PartialEq)]
pub struct PivotedLu<T> {
    lower: LowerTriangular<T>,
    upper: UpperTriangular<T>,
    permutation: Vec<usize>,
    swaps: usize,
}

impl<T> PivotedLu<T> {
    /// The row permutation applied to the input matrix.
    pub fn permutation(&self) -> &[usize] {
        &self.permutation
    }

    /// Number of row exchanges performed while factoring.
    pub fn num_swaps(&self) -> usize {
        self.swaps
    }
}

impl<T: Float> TriangularFactors<T> for PivotedLu<T> {
    fn lower(&self) -> &LowerTriangular<T> {
        &self.lower
    }

    fn upper(&self) -> &UpperTriangular<T> {
        &self.upper
    }

    /// Permute `b`, then run forward and back substitution.
    fn solve_steps(&self, b: &[T]) -> Result<Solution<T>, LinalgError> {
        if b.len() != self.permutation.len() {
            return Err(LinalgError::DimensionMismatch {
                expected: self.permutation.len(),
                actual: b.len(),
            });
        }
        let pb: Vec<T> = self.permutation.iter().map(|&p| b[p]).collect();
        let y = solve_lower_triangular(&self.lower, &pb)?;
        let x = solve_upper_triangular(&self.upper, &y)?;
        Ok(Solution { y, x })
    }

    /// Note that `L * U` equals `P * A`, not `A`.
    fn reconstruct(&self) -> Matrix<T> {
        self.lower.as_matrix().product(self.upper.as_matrix())
    }

    fn determinant(&self) -> T {
        let det = self
            .upper
            .as_matrix()
            .diagonal()
            .fold(T::one(), |acc, d| acc * d);
        if self.swaps % 2 == 1 {
            -det
        } else {
            det
        }
    }
}

/// Compute the LU factorization with partial (row) pivoting.
///
/// At every column the entry of largest magnitude on or below the diagonal is
/// moved into the pivot position. This handles non-singular matrices with a
/// zero leading principal minor, which [`crate::doolittle_decompose`] rejects.
///
/// # Errors
///
/// Returns [`LinalgError::Singular`] if a pivot column is entirely zero.
///
/// # Example
///
/// ```
/// use trisolve::{lu_decompose_pivoted, Matrix, TriangularFactors};
///
/// let a = Matrix::from_rows(vec![vec![0.0, 1.0], vec![1.0, 0.0]]).unwrap();
/// let lu = lu_decompose_pivoted(&a).unwrap();
/// assert_eq!(lu.permutation(), &[1, 0]);
/// assert_eq!(lu.solve(&[2.0, 3.0]).unwrap(), vec![3.0, 2.0]);
/// ```
pub fn lu_decompose_pivoted<T: Float>(matrix: &Matrix<T>) -> Result<PivotedLu<T>, LinalgError> {
    let n = matrix.size();
    let mut a = matrix.clone();
    let mut permutation: Vec<usize> = (0..n).collect();
    let mut swaps = 0;

    for k in 0..n {
        let (pivot_row, max_val) = (k..n)
            .map(|i| (i, a[(i, k)].abs()))
            .fold((k, T::zero()), |best, cur| if cur.1 > best.1 { cur } else { best });

        if max_val.is_zero() {
            log::debug!("lu: column {k} has no non-zero pivot");
            return Err(LinalgError::Singular);
        }

        if pivot_row != k {
            log::trace!("lu: swapping rows {k} and {pivot_row}");
            a.swap_rows(k, pivot_row);
            permutation.swap(k, pivot_row);
            swaps += 1;
        }

        let pivot = a[(k, k)];
        for i in k + 1..n {
            let factor = a[(i, k)] / pivot;
            a[(i, k)] = factor;
            for j in k + 1..n {
                a[(i, j)] = a[(i, j)] - factor * a[(k, j)];
            }
        }
    }

    let mut l = Matrix::zeros_like(n);
    let mut u = Matrix::zeros_like(n);
    for i in 0..n {
        for j in 0..n {
            match i.cmp(&j) {
                std::cmp::Ordering::Greater => l[(i, j)] = a[(i, j)],
                std::cmp::Ordering::Equal => {
                    l[(i, j)] = T::one();
                    u[(i, j)] = a[(i, j)];
                }
                std::cmp::Ordering::Less => u[(i, j)] = a[(i, j)],
            }
        }
    }

    Ok(PivotedLu {
        lower: LowerTriangular::from_matrix_unchecked(l),
        upper: UpperTriangular::from_matrix_unchecked(u),
        permutation,
        swaps,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::determinant::determinant;
    use approx::assert_relative_eq;

    #[test]
    fn test_pivoted_lu_zero_leading_minor() -> Result<(), LinalgError> {
        let a = Matrix::from_rows(vec![
            vec![0.0, 2.0, 1.0],
            vec![3.0, 1.0, 4.0],
            vec![1.0, 5.0, 9.0],
        ])?;
        let lu = lu_decompose_pivoted(&a)?;
        assert_eq!(lu.permutation()[0], 1);

        // L * U == P * A
        let rec = lu.reconstruct();
        for (i, &p) in lu.permutation().iter().enumerate() {
            for (&r, &e) in rec.row(i).iter().zip(a.row(p)) {
                assert_relative_eq!(r, e, epsilon = 1e-12);
            }
        }
        assert_relative_eq!(lu.determinant(), determinant(&a), epsilon = 1e-12);

        let b = [3.0, 8.0, 15.0];
        let x = lu.solve(&b)?;
        let ax = a.mul_vec(&x)?;
        for (&v, &e) in ax.iter().zip(b.iter()) {
            assert_relative_eq!(v, e, epsilon = 1e-12);
        }
        Ok(())
    }

    #[test]
    fn test_pivoted_lu_singular() -> Result<(), LinalgError> {
        let a = Matrix::from_rows(vec![
            vec![1.0, 2.0, 3.0],
            vec![2.0, 4.0, 6.0],
            vec![0.0, 0.0, 0.0],
        ])?;
        assert_eq!(lu_decompose_pivoted(&a), Err(LinalgError::Singular));
        Ok(())
    }

    #[test]
    fn test_pivoted_lu_rhs_mismatch() -> Result<(), LinalgError> {
        let lu = lu_decompose_pivoted(&Matrix::<f64>::identity(3)?)?;
        assert_eq!(lu.num_swaps(), 0);
        assert_eq!(
            lu.solve(&[1.0]),
            Err(LinalgError::DimensionMismatch {
                expected: 3,
                actual: 1
            })
        );
        Ok(())
    }
}
