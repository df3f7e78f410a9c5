//! Francis double-shift QR iteration on an upper Hessenberg matrix
//!
//! The active block shrinks from the bottom: once the last subdiagonal entry
//! is negligible a 1x1 block deflates to a real eigenvalue, and once the one
//! above it is negligible a 2x2 block deflates to a real pair or a complex
//! conjugate pair. Between deflations an implicit double-shift QR step is
//! chased down the unreduced part of the block.

// Every index is bounded by the matrix order read on entry
#![allow(clippy::indexing_slicing)]
// Convergence is detected when adding a magnitude no longer changes a sum
#![allow(clippy::float_cmp)]

use ndarray::Array2;
use tracing::trace;

use crate::common::configuration::{
    EXCEPTIONAL_SHIFT_ITERATIONS, EXCEPTIONAL_SHIFT_PRODUCT, EXCEPTIONAL_SHIFT_SCALE,
};
use crate::common::error::{Result, TextureError};
use crate::eigen::{Eigenvalue, Real, constant};

/// Shift parameters for one double-shift step
///
/// `x` and `y` are the trailing diagonal entries, `w` the product of the
/// trailing off-diagonal pair.
#[derive(Debug, Clone, Copy)]
struct Shift<T> {
    x: T,
    y: T,
    w: T,
}

/// Compute every eigenvalue of an upper Hessenberg matrix
///
/// The matrix is overwritten. Eigenvalue `k` occupies the slot of the
/// diagonal position it deflated from. The shift iteration counter restarts
/// after every deflation.
///
/// # Errors
///
/// Returns [`TextureError::NoConvergence`] if a block needs more than
/// `max_shift_iterations` steps without deflating
pub fn hessenberg_eigenvalues<T: Real>(
    matrix: &mut Array2<T>,
    max_shift_iterations: usize,
) -> Result<Vec<Eigenvalue<T>>> {
    let order = matrix.nrows();
    let mut values = vec![Eigenvalue::real(T::zero()); order];

    let norm = hessenberg_norm(matrix);
    let half = constant::<T>(0.5);
    let exceptional_scale = constant::<T>(EXCEPTIONAL_SHIFT_SCALE);
    let exceptional_product = constant::<T>(EXCEPTIONAL_SHIFT_PRODUCT);

    // Accumulated exceptional shifts, added back to every deflated eigenvalue
    let mut shift_total = T::zero();
    let mut end = order;

    while end > 0 {
        let last = end - 1;
        let mut iterations = 0;

        loop {
            let start = find_small_subdiagonal(matrix, last, norm);
            let x = matrix[[last, last]];

            if start == last {
                values[last] = Eigenvalue::real(x + shift_total);
                trace!(row = last, iterations, "deflated real eigenvalue");
                end = last;
                break;
            }

            let y = matrix[[last - 1, last - 1]];
            let w = matrix[[last, last - 1]] * matrix[[last - 1, last]];

            if start + 1 == last {
                let p = half * (y - x);
                let q = p * p + w;
                let root = q.abs().sqrt();
                let centre = x + shift_total;

                if q >= T::zero() {
                    let z = p + sign(root, p);
                    values[last - 1] = Eigenvalue::real(centre + z);
                    values[last] = if z.is_zero() {
                        Eigenvalue::real(centre + z)
                    } else {
                        Eigenvalue::real(centre - w / z)
                    };
                } else {
                    values[last - 1] = Eigenvalue {
                        re: centre + p,
                        im: -root,
                    };
                    values[last] = Eigenvalue {
                        re: centre + p,
                        im: root,
                    };
                }

                trace!(row = last, iterations, "deflated 2x2 block");
                end = last - 1;
                break;
            }

            if iterations >= max_shift_iterations {
                return Err(TextureError::NoConvergence {
                    order,
                    block_end: last,
                    iterations,
                });
            }

            let shift = if EXCEPTIONAL_SHIFT_ITERATIONS.contains(&iterations) {
                trace!(row = last, iterations, "exceptional shift");
                shift_total += x;
                for i in 0..=last {
                    matrix[[i, i]] -= x;
                }
                let magnitude =
                    matrix[[last, last - 1]].abs() + matrix[[last - 1, last - 2]].abs();
                let diagonal = exceptional_scale * magnitude;
                Shift {
                    x: diagonal,
                    y: diagonal,
                    w: exceptional_product * magnitude * magnitude,
                }
            } else {
                Shift { x, y, w }
            };

            iterations += 1;
            double_shift_step(matrix, start, last, shift);
        }
    }

    Ok(values)
}

/// Sum of magnitudes over the Hessenberg band
fn hessenberg_norm<T: Real>(matrix: &Array2<T>) -> T {
    matrix
        .indexed_iter()
        .filter(|((i, j), _)| *i <= j + 1)
        .fold(T::zero(), |acc, (_, value)| acc + value.abs())
}

/// Lowest row `l <= last` whose subdiagonal entry is negligible, or 0
fn find_small_subdiagonal<T: Real>(matrix: &Array2<T>, last: usize, norm: T) -> usize {
    (1..=last)
        .rev()
        .find(|&l| {
            let mut scale = matrix[[l - 1, l - 1]].abs() + matrix[[l, l]].abs();
            if scale.is_zero() {
                scale = norm;
            }
            matrix[[l, l - 1]].abs() + scale == scale
        })
        .unwrap_or(0)
}

/// `|magnitude|` carrying the sign of `sign_source`
fn sign<T: Real>(magnitude: T, sign_source: T) -> T {
    if sign_source < T::zero() {
        -magnitude.abs()
    } else {
        magnitude.abs()
    }
}

/// One implicit double-shift QR step on rows `start..=last`
///
/// `last - start` is at least 2.
fn double_shift_step<T: Real>(matrix: &mut Array2<T>, start: usize, last: usize, shift: Shift<T>) {
    let Shift { x, y, w } = shift;

    // Look for two consecutive small subdiagonal elements
    let mut m = last - 2;
    let (mut p, mut q, mut r);
    loop {
        let z = matrix[[m, m]];
        let rx = x - z;
        let sy = y - z;
        p = (rx * sy - w) / matrix[[m + 1, m]] + matrix[[m, m + 1]];
        q = matrix[[m + 1, m + 1]] - z - rx - sy;
        r = matrix[[m + 2, m + 1]];

        let scale = p.abs() + q.abs() + r.abs();
        p /= scale;
        q /= scale;
        r /= scale;

        if m == start {
            break;
        }

        let u = matrix[[m, m - 1]].abs() * (q.abs() + r.abs());
        let v = p.abs()
            * (matrix[[m - 1, m - 1]].abs() + z.abs() + matrix[[m + 1, m + 1]].abs());
        if u + v == v {
            break;
        }
        m -= 1;
    }

    for i in (m + 2)..=last {
        matrix[[i, i - 2]] = T::zero();
        if i != m + 2 {
            matrix[[i, i - 3]] = T::zero();
        }
    }

    // Chase the bulge with 3x3 Householder reflections
    for k in m..last {
        let mut norm = T::zero();
        if k != m {
            p = matrix[[k, k - 1]];
            q = matrix[[k + 1, k - 1]];
            r = if k == last - 1 {
                T::zero()
            } else {
                matrix[[k + 2, k - 1]]
            };
            norm = p.abs() + q.abs() + r.abs();
            if !norm.is_zero() {
                p /= norm;
                q /= norm;
                r /= norm;
            }
        }

        let s = sign((p * p + q * q + r * r).sqrt(), p);
        if s.is_zero() {
            continue;
        }

        if k == m {
            if start != m {
                matrix[[k, k - 1]] = -matrix[[k, k - 1]];
            }
        } else {
            matrix[[k, k - 1]] = -s * norm;
        }

        p += s;
        let hx = p / s;
        let hy = q / s;
        let hz = r / s;
        q /= p;
        r /= p;

        for j in k..=last {
            let mut dot = matrix[[k, j]] + q * matrix[[k + 1, j]];
            if k != last - 1 {
                dot += r * matrix[[k + 2, j]];
                matrix[[k + 2, j]] -= dot * hz;
            }
            matrix[[k + 1, j]] -= dot * hy;
            matrix[[k, j]] -= dot * hx;
        }

        for i in start..=last.min(k + 3) {
            let mut dot = hx * matrix[[i, k]] + hy * matrix[[i, k + 1]];
            if k != last - 1 {
                dot += hz * matrix[[i, k + 2]];
                matrix[[i, k + 2]] -= dot * r;
            }
            matrix[[i, k + 1]] -= dot * q;
            matrix[[i, k]] -= dot;
        }
    }
}
