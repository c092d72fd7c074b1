use num_traits::Float;

use crate::matrix::Matrix;

/// Compute the determinant by Gaussian elimination to upper triangular form.
///
/// The elimination runs on a private copy of `matrix`. When the current
/// pivot is exactly zero, the first row below it with a non-zero entry in
/// the pivot column is swapped in and the sign of the result flips. If no
/// such row exists the matrix is singular and `0` is returned immediately.
///
/// An exact zero is both a legitimate determinant and the singularity signal
/// used by [`crate::checks::is_singular`]. Near-singular matrices produce
/// small non-zero values.
///
/// # Example
///
/// ```
/// use trisolve::{determinant, Matrix};
///
/// let m = Matrix::from_rows(vec![vec![0.0, 1.0], vec![2.0, 3.0]]).unwrap();
/// assert_eq!(determinant(&m), -2.0);
/// ```
pub fn determinant<T: Float>(matrix: &Matrix<T>) -> T {
    let n = matrix.size();
    let mut a = matrix.clone();
    let mut det = T::one();

    for i in 0..n {
        if a[(i, i)].is_zero() {
            let Some(j) = (i + 1..n).find(|&j| !a[(j, i)].is_zero()) else {
                log::trace!("determinant: column {i} has no non-zero pivot, matrix is singular");
                return T::zero();
            };
            log::trace!("determinant: swapping rows {i} and {j}");
            a.swap_rows(i, j);
            det = -det;
        }

        let pivot = a[(i, i)];
        for j in i + 1..n {
            let factor = a[(j, i)] / pivot;
            for k in i..n {
                a[(j, k)] = a[(j, k)] - factor * a[(i, k)];
            }
        }
        det = det * pivot;
    }

    det
}
