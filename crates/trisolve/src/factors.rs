use num_traits::Float;

use crate::error::LinalgError;
use crate::matrix::{LowerTriangular, Matrix, UpperTriangular};
use crate::triangular::{solve_lower_triangular, solve_upper_triangular};

/// Intermediate and final vectors of a two-step triangular solve.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution<T> {
    /// Solution of `L * y = b`.
    pub y: Vec<T>,
    /// Solution of `U * x = y`, i.e. of the original system.
    pub x: Vec<T>,
}

/// A factorization of a square matrix into a lower and an upper triangular factor.
///
/// Implementors only provide the factors. Solving, reconstruction and the
/// determinant follow from them.
pub trait TriangularFactors<T: Float> {
    /// The lower triangular factor `L`.
    fn lower(&self) -> &LowerTriangular<T>;

    /// The upper triangular factor `U`.
    fn upper(&self) -> &UpperTriangular<T>;

    /// Solve the factored system for `b`, keeping the forward substitution result.
    ///
    /// # Errors
    ///
    /// Propagates the errors of [`solve_lower_triangular`] and [`solve_upper_triangular`].
    fn solve_steps(&self, b: &[T]) -> Result<Solution<T>, LinalgError> {
        let y = solve_lower_triangular(self.lower(), b)?;
        let x = solve_upper_triangular(self.upper(), &y)?;
        Ok(Solution { y, x })
    }

    /// Solve the factored system for `b`.
    fn solve(&self, b: &[T]) -> Result<Vec<T>, LinalgError> {
        Ok(self.solve_steps(b)?.x)
    }

    /// The product `L * U`.
    fn reconstruct(&self) -> Matrix<T> {
        self.lower().as_matrix().product(self.upper().as_matrix())
    }

    /// The determinant of `L * U`, the product of both diagonals.
    fn determinant(&self) -> T {
        let l = self.lower().as_matrix().diagonal();
        let u = self.upper().as_matrix().diagonal();
        l.zip(u).fold(T::one(), |acc, (a, b)| acc * a * b)
    }
}
