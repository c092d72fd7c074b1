use num_traits::Float;

/// Tolerances used by the dispatcher to gate factorizations.
///
/// The default is exact comparison: a matrix is symmetric only when
/// `m[i][j] == m[j][i]` bit for bit (up to signed zero) and singular only when
/// the computed determinant is exactly zero. Raising a tolerance changes
/// which matrices are accepted.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolverParams<T> {
    /// Maximum accepted `|m[i][j] - m[j][i]|` for Cholesky.
    pub symmetry_tol: T,
    /// Maximum `|det|` below which Doolittle treats the matrix as singular.
    pub singular_tol: T,
}

impl<T: Float> Default for SolverParams<T> {
    fn default() -> Self {
        Self {
            symmetry_tol: T::zero(),
            singular_tol: T::zero(),
        }
    }
}

impl<T: Float> SolverParams<T> {
    /// Use the same tolerance for both checks.
    pub fn with_tolerance(eps: T) -> Self {
        Self {
            symmetry_tol: eps,
            singular_tol: eps,
        }
    }
}
