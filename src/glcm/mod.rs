//! Co-occurrence matrix input and its derived distributions

/// Marginal, sum and difference distributions
pub mod distributions;
/// Validated co-occurrence probability matrix
pub mod matrix;

pub use matrix::CooccurrenceMatrix;
