//! Stateless request dispatcher.
//!
//! A [`Request`] names a method, carries the raw matrix rows and an optional
//! right-hand side. [`dispatch`] validates it, runs the method and returns an
//! [`Outcome`]. Nothing is retained between calls.

use num_traits::Float;

use crate::checks::{is_singular_with_tol, is_square, is_symmetric_with_tol};
use crate::cholesky::cholesky_decompose;
use crate::determinant::determinant;
use crate::doolittle::doolittle_decompose;
use crate::error::LinalgError;
use crate::factors::{Solution, TriangularFactors};
use crate::lu::lu_decompose_pivoted;
use crate::matrix::Matrix;
use crate::params::SolverParams;

/// The operation requested from the dispatcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum Method {
    /// Cholesky factorization, requires a symmetric positive-definite matrix.
    Cholesky,
    /// Doolittle LU factorization, requires a non-singular matrix.
    Doolittle,
    /// LU factorization with partial pivoting.
    PivotedLu,
    /// Determinant only.
    Determinant,
}

/// A parsed request: a method, a matrix and an optional right-hand side.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Request<T> {
    /// Operation to run.
    pub method: Method,
    /// Matrix rows as supplied by the caller, not yet checked for squareness.
    pub matrix: Vec<Vec<T>>,
    /// Right-hand side `b` of `A * x = b`. Ignored by [`Method::Determinant`].
    #[cfg_attr(feature = "serde", serde(default))]
    pub rhs: Option<Vec<T>>,
}

impl<T> Request<T> {
    /// Create a request without a right-hand side.
    pub fn new(method: Method, matrix: Vec<Vec<T>>) -> Self {
        Self {
            method,
            matrix,
            rhs: None,
        }
    }

    /// Attach a right-hand side to solve for.
    pub fn with_rhs(mut self, rhs: Vec<T>) -> Self {
        self.rhs = Some(rhs);
        self
    }
}

/// The result of a dispatched request.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum Outcome<T> {
    /// The determinant of the matrix.
    Determinant(T),
    /// Triangular factors and, when a right-hand side was given, the solution.
    Factorized {
        /// The lower triangular factor `L`.
        lower: Matrix<T>,
        /// The upper triangular factor `U`.
        upper: Matrix<T>,
        /// Row permutation, only for [`Method::PivotedLu`].
        permutation: Option<Vec<usize>>,
        /// `y` and `x` of the two substitution steps.
        solution: Option<Solution<T>>,
    },
}

/// Validate and run a request.
///
/// The checks mirror the preconditions of each factorization: the matrix must
/// be square, Cholesky needs a symmetric matrix and Doolittle a non-singular
/// one. Tolerances for those checks come from `params`.
///
/// # Errors
///
/// * [`LinalgError::NotSquare`] for empty or ragged rows.
/// * [`LinalgError::NotSymmetric`] for Cholesky on a non-symmetric matrix.
/// * [`LinalgError::Singular`] for Doolittle on a singular matrix.
/// * Any error of the chosen factorization or of the triangular solves.
///
/// # Example
///
/// ```
/// use trisolve::dispatch::{dispatch, Method, Outcome, Request};
/// use trisolve::SolverParams;
///
/// let request = Request::new(Method::Determinant, vec![vec![2.0, 0.0], vec![0.0, 3.0]]);
/// let outcome = dispatch(&request, &SolverParams::default()).unwrap();
/// assert_eq!(outcome, Outcome::Determinant(6.0));
/// ```
pub fn dispatch<T: Float>(
    request: &Request<T>,
    params: &SolverParams<T>,
) -> Result<Outcome<T>, LinalgError> {
    if !is_square(&request.matrix) {
        return Err(LinalgError::NotSquare);
    }
    let matrix = Matrix::from_rows(request.matrix.clone())?;
    let rhs = request.rhs.as_deref();

    log::debug!(
        "dispatch: {:?} on a {n}x{n} matrix",
        request.method,
        n = matrix.size()
    );

    match request.method {
        Method::Determinant => Ok(Outcome::Determinant(determinant(&matrix))),
        Method::Cholesky => {
            if !is_symmetric_with_tol(&matrix, params.symmetry_tol) {
                return Err(LinalgError::NotSymmetric);
            }
            factorized(&cholesky_decompose(&matrix)?, None, rhs)
        }
        Method::Doolittle => {
            if is_singular_with_tol(&matrix, params.singular_tol) {
                return Err(LinalgError::Singular);
            }
            factorized(&doolittle_decompose(&matrix)?, None, rhs)
        }
        Method::PivotedLu => {
            let lu = lu_decompose_pivoted(&matrix)?;
            factorized(&lu, Some(lu.permutation().to_vec()), rhs)
        }
    }
}

fn factorized<T, F>(
    factors: &F,
    permutation: Option<Vec<usize>>,
    rhs: Option<&[T]>,
) -> Result<Outcome<T>, LinalgError>
where
    T: Float,
    F: TriangularFactors<T>,
{
    let solution = rhs.map(|b| factors.solve_steps(b)).transpose()?;
    Ok(Outcome::Factorized {
        lower: factors.lower().as_matrix().clone(),
        upper: factors.upper().as_matrix().clone(),
        permutation,
        solution,
    })
}
