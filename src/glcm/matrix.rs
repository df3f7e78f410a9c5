//! Validated co-occurrence probability matrix
//!
//! The matrix is stored as a single contiguous `Array2` and is read-only once
//! constructed. Row and column sums are not checked: the caller is responsible
//! for supplying a normalized joint distribution, or for using
//! [`CooccurrenceMatrix::from_counts`] to normalize raw counts.

use ndarray::{Array2, ArrayView2};

use crate::common::error::{Result, TextureError, invalid_parameter};

/// Square gray-tone co-occurrence probability matrix of order `Ng`
#[derive(Debug, Clone, PartialEq)]
pub struct CooccurrenceMatrix {
    probabilities: Array2<f64>,
}

impl CooccurrenceMatrix {
    /// Wrap an existing probability array
    ///
    /// # Errors
    ///
    /// Returns an error if the array is not square or contains a non-finite entry
    pub fn from_array(probabilities: Array2<f64>) -> Result<Self> {
        let (rows, cols) = probabilities.dim();
        if rows != cols {
            return Err(TextureError::NotSquare { rows, cols });
        }

        if let Some(((row, col), _)) = probabilities
            .indexed_iter()
            .find(|(_, value)| !value.is_finite())
        {
            return Err(TextureError::NonFiniteEntry { row, col });
        }

        Ok(Self { probabilities })
    }

    /// Build from nested rows of probabilities
    ///
    /// # Errors
    ///
    /// Returns an error if the rows are ragged, the matrix is not square,
    /// or an entry is non-finite
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self> {
        let order = rows.len();
        if let Some(ragged) = rows.iter().position(|row| row.len() != order) {
            return Err(invalid_parameter(
                "rows",
                &ragged,
                &format!("row length must equal the number of rows ({order})"),
            ));
        }

        let flat: Vec<f64> = rows.iter().flatten().copied().collect();
        let probabilities = Array2::from_shape_vec((order, order), flat)?;
        Self::from_array(probabilities)
    }

    /// Normalize a matrix of raw co-occurrence counts into probabilities
    ///
    /// A matrix whose counts sum to zero stays all-zero.
    ///
    /// # Errors
    ///
    /// Returns an error if the counts are not square, contain a non-finite
    /// entry, or contain a negative count
    pub fn from_counts(counts: Array2<f64>) -> Result<Self> {
        let matrix = Self::from_array(counts)?;

        if let Some(((row, col), &value)) = matrix
            .probabilities
            .indexed_iter()
            .find(|(_, value)| **value < 0.0)
        {
            return Err(invalid_parameter(
                "counts",
                &value,
                &format!("count at ({row}, {col}) is negative"),
            ));
        }

        let total = matrix.total();
        if total <= 0.0 {
            return Ok(matrix);
        }

        Ok(Self {
            probabilities: matrix.probabilities / total,
        })
    }

    /// Number of gray tones `Ng`
    pub fn order(&self) -> usize {
        self.probabilities.nrows()
    }

    /// True for the degenerate `Ng = 0` matrix
    pub fn is_empty(&self) -> bool {
        self.order() == 0
    }

    /// Probability of tone pair `(i, j)`, zero outside the matrix
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.probabilities.get((i, j)).copied().unwrap_or(0.0)
    }

    /// Sum of every cell
    pub fn total(&self) -> f64 {
        self.probabilities.sum()
    }

    /// Read-only view of the underlying probabilities
    pub fn view(&self) -> ArrayView2<'_, f64> {
        self.probabilities.view()
    }

    /// Iterate over `(i, j, P[i][j])` in row-major order
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, f64)> + '_ {
        self.probabilities
            .indexed_iter()
            .map(|((i, j), &value)| (i, j, value))
    }
}
