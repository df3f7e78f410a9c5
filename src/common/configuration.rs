//! Numeric constants and runtime configuration defaults

// Guards log2(0) in every entropy term
/// Offset added to every logarithm argument
pub const LOG_EPSILON: f64 = 1e-9;

/// Number of Haralick features in a record
pub const FEATURE_COUNT: usize = 14;

// Balancing scales by powers of the floating-point radix so no rounding is introduced
/// Radix used for balancing scale factors
pub const BALANCE_RADIX: f64 = 2.0;

/// A row/column pair is rescaled only if its norm sum drops below this fraction
pub const BALANCE_TOLERANCE: f64 = 0.95;

/// Shift iterations allowed on a single block before giving up
pub const DEFAULT_MAX_SHIFT_ITERATIONS: usize = 30;

/// Iteration counts at which an exceptional shift replaces the Wilkinson-style shift
pub const EXCEPTIONAL_SHIFT_ITERATIONS: [usize; 2] = [10, 20];

/// Scale applied to the trailing subdiagonal magnitude for an exceptional shift
pub const EXCEPTIONAL_SHIFT_SCALE: f64 = 0.75;

/// Coefficient of the squared magnitude forming the exceptional shift product
pub const EXCEPTIONAL_SHIFT_PRODUCT: f64 = -0.4375;

/// Configuration for the eigenvalue engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EigenConfig {
    /// Shift iterations allowed per block before reporting non-convergence
    pub max_shift_iterations: usize,
    /// Whether to balance the matrix before reduction
    pub balance: bool,
}

impl Default for EigenConfig {
    fn default() -> Self {
        Self {
            max_shift_iterations: DEFAULT_MAX_SHIFT_ITERATIONS,
            balance: true,
        }
    }
}

/// Configuration for feature extraction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ExtractorConfig {
    /// Eigenvalue engine settings used by the maximal correlation coefficient
    pub eigen: EigenConfig,
}
