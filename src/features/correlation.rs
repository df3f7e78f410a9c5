//! Maximal correlation coefficient
//!
//! Builds the derived matrix `Q[i][j] = Σ_k P[i][k]·P[j][k] / (px[i]·py[k])`
//! and takes the square root of its second largest eigenvalue. `Q` has no
//! closed-form spectrum, so this is the only feature that runs the
//! eigenvalue engine.

use ndarray::Array2;

use crate::common::configuration::EigenConfig;
use crate::common::error::{Result, computation_error};
use crate::eigen::EigenSystem;
use crate::glcm::distributions::Marginals;
use crate::glcm::matrix::CooccurrenceMatrix;

/// Derived correlation matrix `Q`
///
/// Terms whose marginal denominator is zero contribute nothing.
pub fn derived_correlation_matrix(matrix: &CooccurrenceMatrix) -> Array2<f64> {
    let Marginals { px, py } = Marginals::from_matrix(matrix);
    let view = matrix.view();
    let order = matrix.order();

    Array2::from_shape_fn((order, order), |(i, j)| {
        let row_mass = px.get(i).copied().unwrap_or(0.0);
        if row_mass <= 0.0 {
            return 0.0;
        }

        view.row(i)
            .iter()
            .zip(view.row(j).iter())
            .zip(&py)
            .filter(|&(_, &column_mass)| column_mass > 0.0)
            .map(|((&p_ik, &p_jk), &column_mass)| p_ik * p_jk / (row_mass * column_mass))
            .sum()
    })
}

/// Square root of the second largest real eigenvalue of `Q`
///
/// Eigenvalues are sorted by real part before ranking. Matrices of order
/// below two have no second eigenvalue and yield zero. The eigenvalue is
/// clamped to `[0, 1]` to absorb rounding around the theoretical bounds.
///
/// # Errors
///
/// Returns an error if the eigenvalue engine does not converge or produces
/// a NaN eigenvalue
pub fn maximal_correlation_coefficient(
    matrix: &CooccurrenceMatrix,
    config: EigenConfig,
) -> Result<f64> {
    if matrix.order() < 2 {
        return Ok(0.0);
    }

    let q = derived_correlation_matrix(matrix);
    let spectrum = EigenSystem::with_config(q, config)?.solve()?;

    let Some(second) = spectrum.second_largest_real() else {
        return Ok(0.0);
    };

    if second.is_nan() {
        return Err(computation_error(
            "maximal correlation coefficient",
            &"second largest eigenvalue is NaN",
        ));
    }

    Ok(second.clamp(0.0, 1.0).sqrt())
}
