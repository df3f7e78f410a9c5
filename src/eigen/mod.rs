//! Eigenvalues of general real square matrices
//!
//! The engine runs three stages on an owned working copy of the matrix:
//! radix-2 balancing, reduction to upper Hessenberg form by stabilized
//! elementary similarity transforms, and Francis double-shift QR iteration
//! with deflation of trailing 1x1 and 2x2 blocks. Every stage preserves the
//! eigenvalues of the input.
//!
//! The engine is generic over [`Real`], so it runs in `f32` as well as `f64`.
//! Convergence tests compare magnitudes in the element type itself, which
//! makes the deflation criterion precision-aware.

/// Diagonal similarity scaling
pub mod balance;
/// Reduction to upper Hessenberg form
pub mod hessenberg;
/// Shifted QR iteration on a Hessenberg matrix
pub mod qr;

use std::cmp::Ordering;

use ndarray::{Array2, ArrayView2};
use num_traits::{Float, NumAssign};
use tracing::debug;

use crate::common::configuration::EigenConfig;
use crate::common::error::{Result, TextureError};

/// Floating-point element type accepted by the eigenvalue engine
pub trait Real: Float + NumAssign {}

impl<T: Float + NumAssign> Real for T {}

/// Convert an `f64` constant into the working element type
pub(crate) fn constant<T: Real>(value: f64) -> T {
    T::from(value).unwrap_or_else(T::nan)
}

/// A single eigenvalue split into real and imaginary parts
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Eigenvalue<T> {
    /// Real part
    pub re: T,
    /// Imaginary part (zero for real eigenvalues)
    pub im: T,
}

impl<T: Real> Eigenvalue<T> {
    /// Purely real eigenvalue
    pub fn real(re: T) -> Self {
        Self { re, im: T::zero() }
    }

    /// True when the imaginary part is exactly zero
    pub fn is_real(&self) -> bool {
        self.im.is_zero()
    }
}

/// All eigenvalues of one matrix
///
/// Values are stored in the slot order the QR iteration deflated them into,
/// which depends on the input and is not sorted.
#[derive(Debug, Clone, PartialEq)]
pub struct Spectrum<T> {
    values: Vec<Eigenvalue<T>>,
}

impl<T: Real> Spectrum<T> {
    /// Number of eigenvalues (equal to the matrix order)
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True for the spectrum of an empty matrix
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Eigenvalues in deflation slot order
    pub fn values(&self) -> &[Eigenvalue<T>] {
        &self.values
    }

    /// Real parts in deflation slot order
    pub fn real_parts(&self) -> Vec<T> {
        self.values.iter().map(|value| value.re).collect()
    }

    /// Imaginary parts in deflation slot order
    pub fn imaginary_parts(&self) -> Vec<T> {
        self.values.iter().map(|value| value.im).collect()
    }

    /// Real parts sorted ascending, NaN last
    pub fn sorted_real_parts(&self) -> Vec<T> {
        let mut parts = self.real_parts();
        parts.sort_by(|a, b| match (a.is_nan(), b.is_nan()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            (false, false) => a.partial_cmp(b).unwrap_or(Ordering::Equal),
        });
        parts
    }

    /// Second largest real part, if the matrix has order two or more
    pub fn second_largest_real(&self) -> Option<T> {
        let sorted = self.sorted_real_parts();
        let index = sorted.len().checked_sub(2)?;
        sorted.get(index).copied()
    }
}

/// Working state for a single eigenvalue computation
///
/// Owns its matrix exclusively; the matrix is consumed by [`EigenSystem::solve`].
#[derive(Debug, Clone)]
pub struct EigenSystem<T> {
    matrix: Array2<T>,
    config: EigenConfig,
}

impl<T: Real> EigenSystem<T> {
    /// Create a system with the default configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the matrix is not square or has a non-finite entry
    pub fn new(matrix: Array2<T>) -> Result<Self> {
        Self::with_config(matrix, EigenConfig::default())
    }

    /// Create a system with an explicit configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the matrix is not square or has a non-finite entry
    pub fn with_config(matrix: Array2<T>, config: EigenConfig) -> Result<Self> {
        let (rows, cols) = matrix.dim();
        if rows != cols {
            return Err(TextureError::NotSquare { rows, cols });
        }

        if let Some(((row, col), _)) = matrix.indexed_iter().find(|(_, value)| !value.is_finite())
        {
            return Err(TextureError::NonFiniteEntry { row, col });
        }

        Ok(Self { matrix, config })
    }

    /// Matrix order
    pub fn order(&self) -> usize {
        self.matrix.nrows()
    }

    /// Current state of the working matrix
    pub fn matrix(&self) -> ArrayView2<'_, T> {
        self.matrix.view()
    }

    /// Balance the working matrix in place, returning the number of passes
    pub fn balance(&mut self) -> usize {
        balance::balance(&mut self.matrix)
    }

    /// Reduce the working matrix to upper Hessenberg form in place
    pub fn reduce(&mut self) {
        hessenberg::reduce_to_hessenberg(&mut self.matrix);
    }

    /// Run every stage and return all eigenvalues
    ///
    /// # Errors
    ///
    /// Returns [`TextureError::NoConvergence`] if a block exceeds the configured
    /// shift iteration budget without deflating
    pub fn solve(mut self) -> Result<Spectrum<T>> {
        if self.config.balance {
            let passes = self.balance();
            debug!(order = self.order(), passes, "balanced matrix");
        }
        self.reduce();

        let values = qr::hessenberg_eigenvalues(&mut self.matrix, self.config.max_shift_iterations)?;
        Ok(Spectrum { values })
    }
}

/// Compute all eigenvalues of a square matrix with the default configuration
///
/// # Errors
///
/// Returns an error if the matrix is not square, has a non-finite entry,
/// or the QR iteration fails to converge
pub fn eigenvalues<T: Real>(matrix: Array2<T>) -> Result<Spectrum<T>> {
    EigenSystem::new(matrix)?.solve()
}
