//! Reduction to upper Hessenberg form by Gaussian elimination with pivoting
//!
//! For each column the largest subdiagonal entry is swapped into the pivot
//! position (a permutation similarity), then every entry below it is
//! eliminated with an elementary similarity transform. Entries below the
//! first subdiagonal are written as exact zeros.

// Every index is bounded by the matrix order read on entry
#![allow(clippy::indexing_slicing)]

use ndarray::Array2;

use crate::eigen::Real;

/// Reduce a square matrix to upper Hessenberg form in place
///
/// A matrix already in Hessenberg form is left unchanged.
pub fn reduce_to_hessenberg<T: Real>(matrix: &mut Array2<T>) {
    let order = matrix.nrows();

    for m in 1..order.saturating_sub(1) {
        let column = m - 1;

        let mut pivot = T::zero();
        let mut pivot_row = m;
        for row in m..order {
            let candidate = matrix[[row, column]];
            if candidate.abs() > pivot.abs() {
                pivot = candidate;
                pivot_row = row;
            }
        }

        if pivot_row != m {
            for j in column..order {
                matrix.swap([pivot_row, j], [m, j]);
            }
            for j in 0..order {
                matrix.swap([j, pivot_row], [j, m]);
            }
        }

        if pivot.is_zero() {
            continue;
        }

        for i in (m + 1)..order {
            let entry = matrix[[i, column]];
            if entry.is_zero() {
                continue;
            }

            let multiplier = entry / pivot;
            matrix[[i, column]] = T::zero();
            for j in m..order {
                let pivot_value = matrix[[m, j]];
                matrix[[i, j]] -= multiplier * pivot_value;
            }
            for j in 0..order {
                let eliminated_value = matrix[[j, i]];
                matrix[[j, m]] += multiplier * eliminated_value;
            }
        }
    }
}

/// True when every entry below the first subdiagonal is zero
pub fn is_hessenberg<T: Real>(matrix: &Array2<T>) -> bool {
    matrix
        .indexed_iter()
        .all(|((i, j), value)| i <= j + 1 || value.is_zero())
}
