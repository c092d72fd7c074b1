use num_traits::Float;

use crate::determinant::determinant;
use crate::matrix::Matrix;

/// Check that nested rows form a non-empty square matrix.
///
/// Returns `true` iff there is at least one row and every row has as many
/// elements as there are rows.
///
/// # Example
///
/// ```
/// use trisolve::checks::is_square;
///
/// assert!(is_square(&[vec![1.0]]));
/// assert!(!is_square(&[vec![1.0, 2.0], vec![3.0]]));
/// ```
pub fn is_square<T>(rows: &[Vec<T>]) -> bool {
    let n = rows.len();
    n > 0 && rows.iter().all(|row| row.len() == n)
}

/// Check that `m[i][j] == m[j][i]` for every pair of indices, diagonal included.
///
/// The comparison is exact, so matching infinities are symmetric and any NaN
/// entry is not. Use [`is_symmetric_with_tol`] to accept small rounding
/// differences.
pub fn is_symmetric<T: Float>(matrix: &Matrix<T>) -> bool {
    let n = matrix.size();
    (0..n).all(|i| (0..n).all(|j| matrix[(i, j)] == matrix[(j, i)]))
}

/// Check that `m[i][j] == m[j][i]` or `|m[i][j] - m[j][i]| <= eps` for every
/// pair of indices.
///
/// With `eps == 0` this accepts exactly the matrices [`is_symmetric`] accepts.
pub fn is_symmetric_with_tol<T: Float>(matrix: &Matrix<T>, eps: T) -> bool {
    let n = matrix.size();
    (0..n).all(|i| {
        (0..n).all(|j| {
            let (a, b) = (matrix[(i, j)], matrix[(j, i)]);
            a == b || (a - b).abs() <= eps
        })
    })
}

/// Check whether the determinant is exactly zero.
pub fn is_singular<T: Float>(matrix: &Matrix<T>) -> bool {
    determinant(matrix) == T::zero()
}

/// Check whether `|det| <= eps`.
///
/// With `eps == 0` this is the exact check done by [`is_singular`].
pub fn is_singular_with_tol<T: Float>(matrix: &Matrix<T>, eps: T) -> bool {
    determinant(matrix).abs() <= eps
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LinalgError;

    #[test]
    fn test_is_square() {
        assert!(is_square(&[vec![5.0]]));
        assert!(is_square(&[vec![1.0, 2.0], vec![3.0, 4.0]]));
        assert!(is_square(&vec![vec![0.0f32; 7]; 7]));
        assert!(!is_square::<f64>(&[]));
        assert!(!is_square::<f64>(&[vec![]]));
        assert!(!is_square(&[vec![1.0, 2.0], vec![]]));
        assert!(!is_square(&[vec![1.0, 2.0], vec![3.0, 4.0, 5.0]]));
        assert!(!is_square(&[vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]));
    }

    #[test]
    fn test_is_symmetric() -> Result<(), LinalgError> {
        let sym = Matrix::from_rows(vec![
            vec![4.0, 12.0, -16.0],
            vec![12.0, 37.0, -43.0],
            vec![-16.0, -43.0, 98.0],
        ])?;
        assert!(is_symmetric(&sym));

        let asym = Matrix::from_rows(vec![vec![1.0, 2.0], vec![2.000001, 1.0]])?;
        assert!(!is_symmetric(&asym));
        assert!(is_symmetric_with_tol(&asym, 1e-5));

        let single = Matrix::from_rows(vec![vec![3.0]])?;
        assert!(is_symmetric(&single));
        Ok(())
    }

    #[test]
    fn test_is_symmetric_non_finite() -> Result<(), LinalgError> {
        let inf = Matrix::from_rows(vec![
            vec![1.0, f64::INFINITY],
            vec![f64::INFINITY, 1.0],
        ])?;
        assert!(is_symmetric(&inf));
        assert!(is_symmetric_with_tol(&inf, 0.0));
        assert!(is_symmetric_with_tol(&inf, 1e-6));

        let mixed = Matrix::from_rows(vec![
            vec![1.0, f64::INFINITY],
            vec![f64::NEG_INFINITY, 1.0],
        ])?;
        assert!(!is_symmetric(&mixed));
        assert!(!is_symmetric_with_tol(&mixed, 1e-6));

        let nan_diagonal = Matrix::from_rows(vec![vec![f64::NAN, 0.0], vec![0.0, 1.0]])?;
        assert!(!is_symmetric(&nan_diagonal));
        assert!(!is_symmetric_with_tol(&nan_diagonal, 0.0));
        assert!(!is_symmetric_with_tol(&nan_diagonal, 1e-6));
        Ok(())
    }

    #[test]
    fn test_is_singular() -> Result<(), LinalgError> {
        let repeated = Matrix::from_rows(vec![
            vec![1.0, 2.0, 3.0],
            vec![1.0, 2.0, 3.0],
            vec![4.0, 5.0, 6.0],
        ])?;
        assert!(is_singular(&repeated));

        let identity = Matrix::<f64>::identity(4)?;
        assert!(!is_singular(&identity));

        let tiny = Matrix::from_rows(vec![vec![1e-12, 0.0], vec![0.0, 1.0]])?;
        assert!(!is_singular(&tiny));
        assert!(is_singular_with_tol(&tiny, 1e-9));
        Ok(())
    }
}
