//! One-dimensional projections of a co-occurrence matrix
//!
//! Every distribution is freshly allocated and zero-filled on each call, so
//! features never observe residue from one another.

use crate::glcm::matrix::CooccurrenceMatrix;

/// Row and column marginal distributions
#[derive(Debug, Clone, PartialEq)]
pub struct Marginals {
    /// `px[i] = Σ_j P[i][j]`
    pub px: Vec<f64>,
    /// `py[j] = Σ_i P[i][j]`
    pub py: Vec<f64>,
}

impl Marginals {
    /// Project the matrix onto its rows and columns
    pub fn from_matrix(matrix: &CooccurrenceMatrix) -> Self {
        let view = matrix.view();
        let px = view.rows().into_iter().map(|row| row.sum()).collect();
        let py = view.columns().into_iter().map(|col| col.sum()).collect();
        Self { px, py }
    }

    /// Mean tone index under the row marginal
    pub fn row_mean(&self) -> f64 {
        self.px
            .iter()
            .enumerate()
            .map(|(i, &p)| i as f64 * p)
            .sum()
    }

    /// Second raw moment of the tone index under the row marginal
    pub fn row_second_moment(&self) -> f64 {
        self.px
            .iter()
            .enumerate()
            .map(|(i, &p)| (i * i) as f64 * p)
            .sum()
    }
}

/// Distribution of `i + j`, indexed `0..=2Ng-2`
pub fn sum_distribution(matrix: &CooccurrenceMatrix) -> Vec<f64> {
    let len = (2 * matrix.order()).saturating_sub(1);
    let mut distribution = vec![0.0; len];
    for (i, j, p) in matrix.cells() {
        if let Some(slot) = distribution.get_mut(i + j) {
            *slot += p;
        }
    }
    distribution
}

/// Distribution of `|i - j|`, indexed `0..Ng`
pub fn difference_distribution(matrix: &CooccurrenceMatrix) -> Vec<f64> {
    let mut distribution = vec![0.0; matrix.order()];
    for (i, j, p) in matrix.cells() {
        if let Some(slot) = distribution.get_mut(i.abs_diff(j)) {
            *slot += p;
        }
    }
    distribution
}
