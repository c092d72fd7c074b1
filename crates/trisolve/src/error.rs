use thiserror::Error;

/// Error type for matrix checks, factorizations and substitution solves.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LinalgError {
    /// The input rows do not form a non-empty square matrix.
    ///
    /// Raised when the row list is empty, a row is empty, or any row length
    /// differs from the number of rows.
    #[error("Matrix is not square")]
    NotSquare,

    /// The flat data does not match the requested matrix size.
    #[error("Shape mismatch: expected {expected} elements, but got {actual} elements in data")]
    InvalidShape {
        /// Expected number of elements (`n * n`).
        expected: usize,
        /// Actual number of elements in the data.
        actual: usize,
    },

    /// Cholesky was requested for a matrix that is not symmetric.
    #[error("Matrix is not symmetric, Cholesky decomposition cannot be applied")]
    NotSymmetric,

    /// The matrix has a zero determinant.
    #[error("Matrix is singular")]
    Singular,

    /// A Cholesky radicand was not strictly positive.
    #[error("Matrix is not positive definite (non-positive radicand at diagonal {index})")]
    NotPositiveDefinite {
        /// Diagonal index at which the decomposition stopped.
        index: usize,
    },

    /// Doolittle elimination hit an exactly zero pivot in `U`.
    ///
    /// The unpivoted factorization cannot continue past a zero leading
    /// principal minor. Use the pivoted LU for such matrices.
    #[error("Zero pivot at U[{index}][{index}], the matrix needs row pivoting")]
    ZeroPivot {
        /// Diagonal index of the zero pivot.
        index: usize,
    },

    /// A triangular factor has an exactly zero diagonal entry.
    #[error("Triangular matrix has a zero diagonal entry at index {index}")]
    ZeroDiagonal {
        /// Diagonal index of the zero entry.
        index: usize,
    },

    /// A vector length does not match the matrix size.
    #[error("Dimension mismatch: expected a vector of length {expected}, got {actual}")]
    DimensionMismatch {
        /// Matrix size.
        expected: usize,
        /// Provided vector length.
        actual: usize,
    },

    /// A matrix passed as triangular has a non-zero entry on the wrong side of the diagonal.
    #[error("Matrix is not triangular: non-zero entry at ({row}, {col})")]
    NotTriangular {
        /// Row of the offending entry.
        row: usize,
        /// Column of the offending entry.
        col: usize,
    },
}
