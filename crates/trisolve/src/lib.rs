#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]
//!
//! # Overview
//!
//! `trisolve` works on dense square matrices of `f32` or `f64`. It offers
//! structural checks, a determinant by Gaussian elimination, Cholesky and
//! Doolittle factorizations, an LU factorization with partial pivoting and
//! the forward/back substitution needed to solve `A * x = b` from the factors.
//!
//! # Quick Start
//!
//! ```rust
//! use trisolve::{cholesky_decompose, checks, Matrix, TriangularFactors};
//!
//! let a = Matrix::from_rows(vec![
//!     vec![4.0, 12.0, -16.0],
//!     vec![12.0, 37.0, -43.0],
//!     vec![-16.0, -43.0, 98.0],
//! ])
//! .unwrap();
//! assert!(checks::is_symmetric(&a));
//!
//! let chol = cholesky_decompose(&a).unwrap();
//! let x = chol.solve(&[1.0, 2.0, 3.0]).unwrap();
//! assert_eq!(x.len(), 3);
//! ```

/// Structural and numeric predicates: square, symmetric, singular.
pub mod checks;

/// Cholesky factorization of symmetric positive-definite matrices.
pub mod cholesky;

/// Determinant by Gaussian elimination.
pub mod determinant;

pub mod dispatch;

/// Doolittle LU factorization without pivoting.
pub mod doolittle;

/// Error types for the crate.
pub mod error;

/// The common interface of the triangular factorizations.
pub mod factors;

/// LU factorization with partial pivoting.
pub mod lu;

/// Square matrix and triangular matrix types.
pub mod matrix;

/// Tolerance configuration for the dispatcher checks.
pub mod params;

#[cfg(feature = "serde")]
mod serde;

/// Forward and back substitution.
pub mod triangular;

pub use crate::checks::{is_singular, is_square, is_symmetric};
pub use crate::cholesky::{cholesky_decompose, Cholesky};
pub use crate::determinant::determinant;
pub use crate::dispatch::{dispatch, Method, Outcome, Request};
pub use crate::doolittle::{doolittle_decompose, Doolittle};
pub use crate::error::LinalgError;
pub use crate::factors::{Solution, TriangularFactors};
pub use crate::lu::{lu_decompose_pivoted, PivotedLu};
pub use crate::matrix::{LowerTriangular, Matrix, UpperTriangular};
pub use crate::params::SolverParams;
pub use crate::triangular::{solve_lower_triangular, solve_upper_triangular};
