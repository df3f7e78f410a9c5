//! Radix-2 balancing
//!
//! Rescales row `i` by `1/f` and column `i` by `f`, with `f` a power of two,
//! until the off-diagonal row and column norms are within a factor of the
//! radix of each other. Powers of the radix keep the similarity transform
//! exact in floating point.

use ndarray::Array2;

use crate::common::configuration::{BALANCE_RADIX, BALANCE_TOLERANCE};
use crate::eigen::{Real, constant};

/// Balance a square matrix in place
///
/// Repeats full passes until one completes without rescaling any row/column
/// pair, and returns the number of passes made. A pair is only rescaled when
/// doing so shrinks its combined norm below the tolerance fraction.
pub fn balance<T: Real>(matrix: &mut Array2<T>) -> usize {
    let radix = constant::<T>(BALANCE_RADIX);
    let radix_squared = radix * radix;
    let tolerance = constant::<T>(BALANCE_TOLERANCE);
    let order = matrix.nrows();

    let mut passes = 0;
    loop {
        passes += 1;
        let mut converged = true;

        for index in 0..order {
            let (mut column_norm, row_norm) = off_diagonal_norms(matrix, index);
            if column_norm.is_zero() || row_norm.is_zero() {
                continue;
            }

            let original = column_norm + row_norm;
            if !original.is_finite() {
                continue;
            }
            let mut factor = T::one();

            let lower = row_norm / radix;
            while column_norm < lower {
                factor *= radix;
                column_norm *= radix_squared;
            }

            let upper = row_norm * radix;
            while column_norm > upper {
                factor /= radix;
                column_norm /= radix_squared;
            }

            if (column_norm + row_norm) / factor < tolerance * original {
                converged = false;
                let inverse = T::one() / factor;
                matrix.row_mut(index).mapv_inplace(|value| value * inverse);
                matrix.column_mut(index).mapv_inplace(|value| value * factor);
            }
        }

        if converged {
            return passes;
        }
    }
}

/// Absolute column and row sums of `index`, excluding the diagonal
fn off_diagonal_norms<T: Real>(matrix: &Array2<T>, index: usize) -> (T, T) {
    let mut column_norm = T::zero();
    let mut row_norm = T::zero();

    for (j, (&column_value, &row_value)) in matrix
        .column(index)
        .iter()
        .zip(matrix.row(index).iter())
        .enumerate()
    {
        if j != index {
            column_norm += column_value.abs();
            row_norm += row_value.abs();
        }
    }

    (column_norm, row_norm)
}
