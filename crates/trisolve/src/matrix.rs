use std::fmt;
use std::ops::{Index, IndexMut};

use num_traits::Float;

use crate::checks::is_square;
use crate::error::LinalgError;

/// A dense square matrix stored in row-major order.
///
/// The matrix always has at least one row and exactly `size * size` elements.
/// Algorithms in this crate take matrices by reference and work on owned
/// copies, so a caller's matrix is never observed as mutated.
///
/// # Example
///
/// ```
/// use trisolve::Matrix;
///
/// let m = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
/// assert_eq!(m.size(), 2);
/// assert_eq!(m[(1, 0)], 3.0);
/// assert_eq!(m.row(0), &[1.0, 2.0]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<T> {
    pub(crate) data: Vec<T>,
    pub(crate) size: usize,
}

// Element count of a `size x size` matrix, rejecting empty and overflowing sizes.
fn num_elements(size: usize, actual: usize) -> Result<usize, LinalgError> {
    if size == 0 {
        return Err(LinalgError::NotSquare);
    }
    size.checked_mul(size).ok_or(LinalgError::InvalidShape {
        expected: usize::MAX,
        actual,
    })
}

impl<T> Matrix<T> {
    /// Create a matrix of size `size x size` from row-major data.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::NotSquare`] for `size == 0` and
    /// [`LinalgError::InvalidShape`] when `data.len() != size * size` or
    /// `size * size` does not fit in a `usize`.
    pub fn from_shape_vec(size: usize, data: Vec<T>) -> Result<Self, LinalgError> {
        let numel = num_elements(size, data.len())?;
        if data.len() != numel {
            return Err(LinalgError::InvalidShape {
                expected: numel,
                actual: data.len(),
            });
        }
        Ok(Self { data, size })
    }

    /// Create a matrix from nested rows.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::NotSquare`] if the rows are empty, ragged or
    /// do not match the row count.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self, LinalgError> {
        if !is_square(&rows) {
            return Err(LinalgError::NotSquare);
        }
        let size = rows.len();
        let data = rows.into_iter().flatten().collect();
        Ok(Self { data, size })
    }

    /// Create a matrix by evaluating `f(row, col)` for every element.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::NotSquare`] for `size == 0` and
    /// [`LinalgError::InvalidShape`] if `size * size` overflows.
    pub fn from_fn<F>(size: usize, mut f: F) -> Result<Self, LinalgError>
    where
        F: FnMut(usize, usize) -> T,
    {
        let numel = num_elements(size, 0)?;
        let data = (0..numel).map(|i| f(i / size, i % size)).collect();
        Ok(Self { data, size })
    }

    /// Number of rows (and columns).
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Get a reference to the element at `(row, col)`, or `None` when out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        if row >= self.size || col >= self.size {
            return None;
        }
        self.data.get(row * self.size + col)
    }

    /// The elements of row `row`.
    ///
    /// # Panics
    ///
    /// Panics if `row >= self.size()`.
    pub fn row(&self, row: usize) -> &[T] {
        let start = row * self.size;
        &self.data[start..start + self.size]
    }

    /// Iterate over the rows of the matrix.
    pub fn rows(&self) -> impl Iterator<Item = &[T]> + '_ {
        self.data.chunks_exact(self.size)
    }

    /// Swap two rows in place.
    ///
    /// # Panics
    ///
    /// Panics if `a` or `b` is not less than `self.size()`.
    pub fn swap_rows(&mut self, a: usize, b: usize) {
        assert!(
            a < self.size && b < self.size,
            "Rows ({a}, {b}) out of bounds for matrix of size {}",
            self.size
        );
        if a == b {
            return;
        }
        let (lo, hi) = if a < b { (a, b) } else { (b, a) };
        let (head, tail) = self.data.split_at_mut(hi * self.size);
        head[lo * self.size..(lo + 1) * self.size].swap_with_slice(&mut tail[..self.size]);
    }

    /// The underlying row-major data.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }
}

impl<T: Clone> Matrix<T> {
    /// Copy the matrix out as nested rows.
    pub fn to_rows(&self) -> Vec<Vec<T>> {
        self.rows().map(|r| r.to_vec()).collect()
    }

    /// The transposed matrix.
    pub fn transpose(&self) -> Self {
        let n = self.size;
        let data = (0..n * n)
            .map(|i| self.data[(i % n) * n + i / n].clone())
            .collect();
        Self { data, size: n }
    }
}

impl<T: Float> Matrix<T> {
    /// A matrix filled with zeros.
    pub fn zeros(size: usize) -> Result<Self, LinalgError> {
        Self::from_fn(size, |_, _| T::zero())
    }

    /// The identity matrix.
    pub fn identity(size: usize) -> Result<Self, LinalgError> {
        Self::from_fn(size, |i, j| if i == j { T::one() } else { T::zero() })
    }

    /// Zero matrix for sizes already known to be valid.
    pub(crate) fn zeros_like(size: usize) -> Self {
        Self {
            data: vec![T::zero(); size * size],
            size,
        }
    }

    /// Iterate over the diagonal elements.
    pub fn diagonal(&self) -> impl Iterator<Item = T> + '_ {
        (0..self.size).map(move |i| self.data[i * self.size + i])
    }

    /// Matrix product `self * rhs`.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::DimensionMismatch`] if the sizes differ.
    pub fn matmul(&self, rhs: &Matrix<T>) -> Result<Matrix<T>, LinalgError> {
        if rhs.size != self.size {
            return Err(LinalgError::DimensionMismatch {
                expected: self.size,
                actual: rhs.size,
            });
        }
        Ok(self.product(rhs))
    }

    /// Product of two matrices already known to have the same size.
    pub(crate) fn product(&self, rhs: &Matrix<T>) -> Matrix<T> {
        let n = self.size;
        let mut out = Self::zeros_like(n);
        for i in 0..n {
            for k in 0..n {
                let a_ik = self.data[i * n + k];
                if a_ik.is_zero() {
                    continue;
                }
                for j in 0..n {
                    out.data[i * n + j] = out.data[i * n + j] + a_ik * rhs.data[k * n + j];
                }
            }
        }
        out
    }

    /// Matrix-vector product `self * v`.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::DimensionMismatch`] if `v.len() != self.size()`.
    pub fn mul_vec(&self, v: &[T]) -> Result<Vec<T>, LinalgError> {
        if v.len() != self.size {
            return Err(LinalgError::DimensionMismatch {
                expected: self.size,
                actual: v.len(),
            });
        }
        Ok(self
            .rows()
            .map(|row| {
                row.iter()
                    .zip(v.iter())
                    .fold(T::zero(), |acc, (&a, &b)| acc + a * b)
            })
            .collect())
    }
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        assert!(
            row < self.size && col < self.size,
            "Index ({row}, {col}) out of bounds for matrix of size {}",
            self.size
        );
        &self.data[row * self.size + col]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        assert!(
            row < self.size && col < self.size,
            "Index ({row}, {col}) out of bounds for matrix of size {}",
            self.size
        );
        &mut self.data[row * self.size + col]
    }
}

// Fixed-width columns, one row per line. A precision, if given, applies to every element.
impl<T: fmt::Display> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for val in row {
                match f.precision() {
                    Some(p) => write!(f, "{val:>8.p$} ")?,
                    None => write!(f, "{val:>8} ")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// A square matrix whose entries strictly above the diagonal are zero.
#[derive(Debug, Clone, PartialEq)]
pub struct LowerTriangular<T>(Matrix<T>);

/// A square matrix whose entries strictly below the diagonal are zero.
#[derive(Debug, Clone, PartialEq)]
pub struct UpperTriangular<T>(Matrix<T>);

impl<T: Float> LowerTriangular<T> {
    /// Wrap a matrix after checking that it is lower triangular.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::NotTriangular`] with the first non-zero entry above the diagonal.
    pub fn new(matrix: Matrix<T>) -> Result<Self, LinalgError> {
        let n = matrix.size();
        for row in 0..n {
            for col in row + 1..n {
                if !matrix[(row, col)].is_zero() {
                    return Err(LinalgError::NotTriangular { row, col });
                }
            }
        }
        Ok(Self(matrix))
    }

    /// The transpose, an upper triangular matrix.
    pub fn transpose(&self) -> UpperTriangular<T> {
        UpperTriangular(self.0.transpose())
    }
}

impl<T: Float> UpperTriangular<T> {
    /// Wrap a matrix after checking that it is upper triangular.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::NotTriangular`] with the first non-zero entry below the diagonal.
    pub fn new(matrix: Matrix<T>) -> Result<Self, LinalgError> {
        let n = matrix.size();
        for row in 1..n {
            for col in 0..row {
                if !matrix[(row, col)].is_zero() {
                    return Err(LinalgError::NotTriangular { row, col });
                }
            }
        }
        Ok(Self(matrix))
    }

    /// The transpose, a lower triangular matrix.
    pub fn transpose(&self) -> LowerTriangular<T> {
        LowerTriangular(self.0.transpose())
    }
}

macro_rules! impl_triangular_common {
    ($name:ident) => {
        impl<T> $name<T> {
            /// Wrap a matrix produced by a factorization that fills only one triangle.
            pub(crate) fn from_matrix_unchecked(matrix: Matrix<T>) -> Self {
                Self(matrix)
            }

            /// Number of rows (and columns).
            pub fn size(&self) -> usize {
                self.0.size()
            }

            /// Borrow the underlying matrix.
            pub fn as_matrix(&self) -> &Matrix<T> {
                &self.0
            }
        }

        impl<T> Index<(usize, usize)> for $name<T> {
            type Output = T;

            fn index(&self, index: (usize, usize)) -> &Self::Output {
                &self.0[index]
            }
        }

        impl<T: fmt::Display> fmt::Display for $name<T> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Display::fmt(&self.0, f)
            }
        }
    };
}

impl_triangular_common!(LowerTriangular);
impl_triangular_common!(UpperTriangular);
