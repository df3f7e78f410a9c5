//! Closed-form Haralick features
//!
//! Each function reads the co-occurrence matrix and allocates whatever
//! scratch distribution it needs, so features can be computed in any order
//! and from any thread. Logarithms are base 2 with an epsilon guard; see
//! [`crate::math::information`].

use tracing::debug;

use crate::glcm::distributions::{Marginals, difference_distribution, sum_distribution};
use crate::glcm::matrix::CooccurrenceMatrix;
use crate::math::information::{cross_entropy, entropy as shannon_entropy};

/// Angular second moment `Σ P[i][j]²`
pub fn angular_second_moment(matrix: &CooccurrenceMatrix) -> f64 {
    matrix.view().iter().map(|p| p * p).sum()
}

/// Contrast `Σ_n n² · Σ_{|i-j|=n} P[i][j]`
pub fn contrast(matrix: &CooccurrenceMatrix) -> f64 {
    difference_distribution(matrix)
        .iter()
        .enumerate()
        .map(|(n, &mass)| (n * n) as f64 * mass)
        .sum()
}

/// Correlation `(Σ i·j·P[i][j] - μ²) / σ²`
///
/// `μ` and `σ²` come from the row marginal; the matrix is assumed close to
/// symmetric so the column moments are taken to be the same. Returns NaN when
/// the variance is not positive, since correlation is undefined there.
pub fn correlation(matrix: &CooccurrenceMatrix) -> f64 {
    let marginals = Marginals::from_matrix(matrix);
    let mean = marginals.row_mean();
    let variance = mean.mul_add(-mean, marginals.row_second_moment());

    if variance.is_nan() || variance <= 0.0 {
        debug!(order = matrix.order(), variance, "correlation undefined");
        return f64::NAN;
    }

    let cross_moment: f64 = matrix
        .cells()
        .map(|(i, j, p)| (i * j) as f64 * p)
        .sum();

    mean.mul_add(-mean, cross_moment) / variance
}

/// Sum of squares `Σ (i - μ)² · P[i][j]` with `μ = Σ i · P[i][j]`
pub fn variance(matrix: &CooccurrenceMatrix) -> f64 {
    let mean: f64 = matrix.cells().map(|(i, _, p)| i as f64 * p).sum();

    matrix
        .cells()
        .map(|(i, _, p)| {
            let deviation = i as f64 - mean;
            deviation * deviation * p
        })
        .sum()
}

/// Inverse difference moment `Σ P[i][j] / (1 + (i - j)²)`
pub fn inverse_difference_moment(matrix: &CooccurrenceMatrix) -> f64 {
    matrix
        .cells()
        .map(|(i, j, p)| {
            let difference = i.abs_diff(j);
            p / (1 + difference * difference) as f64
        })
        .sum()
}

/// Sum average `Σ_k k · S[k]`
pub fn sum_average(matrix: &CooccurrenceMatrix) -> f64 {
    sum_distribution(matrix)
        .iter()
        .enumerate()
        .map(|(k, &mass)| k as f64 * mass)
        .sum()
}

/// Sum variance `Σ_k (k - E)² · S[k]` where `E` is the sum entropy
pub fn sum_variance(matrix: &CooccurrenceMatrix) -> f64 {
    let centre = sum_entropy(matrix);

    sum_distribution(matrix)
        .iter()
        .enumerate()
        .map(|(k, &mass)| {
            let deviation = k as f64 - centre;
            deviation * deviation * mass
        })
        .sum()
}

/// Sum entropy `-Σ_k S[k] · log2(S[k] + ε)`
pub fn sum_entropy(matrix: &CooccurrenceMatrix) -> f64 {
    shannon_entropy(sum_distribution(matrix))
}

/// Entropy `-Σ P[i][j] · log2(P[i][j] + ε)`
pub fn entropy(matrix: &CooccurrenceMatrix) -> f64 {
    shannon_entropy(matrix.view().iter().copied())
}

/// Difference variance `Σ k² · D[k] - (Σ k · D[k])²`
pub fn difference_variance(matrix: &CooccurrenceMatrix) -> f64 {
    let (first, second) = difference_distribution(matrix).iter().enumerate().fold(
        (0.0, 0.0),
        |(first, second), (k, &mass)| {
            let k = k as f64;
            (k.mul_add(mass, first), (k * k).mul_add(mass, second))
        },
    );

    first.mul_add(-first, second)
}

/// Difference entropy `-Σ_k D[k] · log2(D[k] + ε)`
pub fn difference_entropy(matrix: &CooccurrenceMatrix) -> f64 {
    shannon_entropy(difference_distribution(matrix))
}

/// Entropies underlying the two information measures of correlation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InformationEntropies {
    /// Entropy of the row marginal
    pub hx: f64,
    /// Entropy of the column marginal
    pub hy: f64,
    /// Joint entropy of the matrix
    pub hxy: f64,
    /// Cross entropy of the matrix against the product of marginals
    pub hxy1: f64,
    /// Entropy of the product of marginals
    pub hxy2: f64,
}

impl InformationEntropies {
    /// Compute every entropy from one marginal projection
    pub fn from_matrix(matrix: &CooccurrenceMatrix) -> Self {
        let Marginals { px, py } = Marginals::from_matrix(matrix);

        let independent = |i: usize, j: usize| {
            px.get(i).copied().unwrap_or(0.0) * py.get(j).copied().unwrap_or(0.0)
        };

        let hxy1 = cross_entropy(matrix.cells().map(|(i, j, p)| (p, independent(i, j))));
        let hxy2 = cross_entropy(matrix.cells().map(|(i, j, _)| {
            let product = independent(i, j);
            (product, product)
        }));

        Self {
            hx: shannon_entropy(px.iter().copied()),
            hy: shannon_entropy(py.iter().copied()),
            hxy: entropy(matrix),
            hxy1,
            hxy2,
        }
    }
}

/// First information measure of correlation `(HXY - HXY1) / max(HX, HY)`
///
/// Zero when both marginal entropies vanish (a single occupied tone).
pub fn information_correlation_1(matrix: &CooccurrenceMatrix) -> f64 {
    let h = InformationEntropies::from_matrix(matrix);
    let denominator = h.hx.max(h.hy);

    if denominator <= 0.0 {
        return 0.0;
    }

    (h.hxy - h.hxy1) / denominator
}

/// Second information measure of correlation `sqrt(|1 - exp(-2 (HXY2 - HXY))|)`
pub fn information_correlation_2(matrix: &CooccurrenceMatrix) -> f64 {
    let h = InformationEntropies::from_matrix(matrix);
    (1.0 - (-2.0 * (h.hxy2 - h.hxy)).exp()).abs().sqrt()
}
