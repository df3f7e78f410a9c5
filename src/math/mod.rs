//! Mathematical utilities for the feature computations

/// Epsilon-guarded logarithms and entropy sums
pub mod information;
