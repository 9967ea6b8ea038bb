//! Row-major storage for per-trial series.
//!
//! Simulation output is stored as one contiguous buffer in row-major order:
//! `data[trial_idx * n_steps + step_idx]`. Rows are trials, columns are time
//! steps, so a single trial's path is a contiguous slice.

use thiserror::Error;

/// Errors raised by [`PathMatrix`] construction.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum MatrixError {
    /// One of the dimensions is zero.
    #[error("matrix dimensions must be non-zero, got {rows}x{cols}")]
    EmptyDimension {
        /// Requested row count.
        rows: usize,
        /// Requested column count.
        cols: usize,
    },

    /// Backing buffer length does not match the dimensions.
    #[error("buffer of length {len} does not fit a {rows}x{cols} matrix")]
    LengthMismatch {
        /// Provided buffer length.
        len: usize,
        /// Requested row count.
        rows: usize,
        /// Requested column count.
        cols: usize,
    },
}

/// Dense trials-by-steps matrix of `f64` values.
///
/// # Examples
///
/// ```
/// use abs_core::PathMatrix;
///
/// let mut m = PathMatrix::zeros(3, 4).unwrap();
/// m.row_mut(1)[2] = 0.5;
/// assert_eq!(m.get(1, 2), 0.5);
/// assert_eq!(m.row(0), &[0.0; 4]);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathMatrix {
    data: Vec<f64>,
    n_rows: usize,
    n_cols: usize,
}

impl PathMatrix {
    /// Creates a zero-filled matrix.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::EmptyDimension`] if either dimension is zero.
    pub fn zeros(n_rows: usize, n_cols: usize) -> Result<Self, MatrixError> {
        if n_rows == 0 || n_cols == 0 {
            return Err(MatrixError::EmptyDimension {
                rows: n_rows,
                cols: n_cols,
            });
        }
        Ok(Self {
            data: vec![0.0; n_rows * n_cols],
            n_rows,
            n_cols,
        })
    }

    /// Wraps an existing row-major buffer.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::LengthMismatch`] if `data.len()` is not
    /// `n_rows * n_cols`, or [`MatrixError::EmptyDimension`] for zero
    /// dimensions.
    pub fn from_vec(data: Vec<f64>, n_rows: usize, n_cols: usize) -> Result<Self, MatrixError> {
        if n_rows == 0 || n_cols == 0 {
            return Err(MatrixError::EmptyDimension {
                rows: n_rows,
                cols: n_cols,
            });
        }
        if data.len() != n_rows * n_cols {
            return Err(MatrixError::LengthMismatch {
                len: data.len(),
                rows: n_rows,
                cols: n_cols,
            });
        }
        Ok(Self {
            data,
            n_rows,
            n_cols,
        })
    }

    /// Returns the number of rows (trials).
    #[inline]
    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    /// Returns the number of columns (time steps).
    #[inline]
    pub fn n_cols(&self) -> usize {
        self.n_cols
    }

    /// Returns one row as a contiguous slice.
    ///
    /// # Panics
    ///
    /// Panics if `row >= n_rows`.
    #[inline]
    pub fn row(&self, row: usize) -> &[f64] {
        let offset = row * self.n_cols;
        &self.data[offset..offset + self.n_cols]
    }

    /// Returns one row as a mutable slice.
    ///
    /// # Panics
    ///
    /// Panics if `row >= n_rows`.
    #[inline]
    pub fn row_mut(&mut self, row: usize) -> &mut [f64] {
        let offset = row * self.n_cols;
        &mut self.data[offset..offset + self.n_cols]
    }

    /// Returns a single element.
    ///
    /// # Panics
    ///
    /// Panics if the indices are out of bounds.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.data[row * self.n_cols + col]
    }

    /// Returns the whole backing buffer in row-major order.
    #[inline]
    pub fn data(&self) -> &[f64] {
        &self.data
    }

    /// Iterates over rows in order.
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        self.data.chunks_exact(self.n_cols)
    }

    /// Returns the per-column mean across all rows.
    ///
    /// This is the cross-trial average: element `j` of the result is the
    /// mean of column `j` over every trial.
    pub fn column_means(&self) -> Vec<f64> {
        let mut means = vec![0.0; self.n_cols];
        for row in self.rows() {
            for (acc, &v) in means.iter_mut().zip(row) {
                *acc += v;
            }
        }
        let denom = self.n_rows as f64;
        for acc in &mut means {
            *acc /= denom;
        }
        means
    }

    /// True if every element is finite.
    pub fn is_finite(&self) -> bool {
        self.data.iter().all(|v| v.is_finite())
    }
}
