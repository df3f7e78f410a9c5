//! Information-theoretic helpers shared by the entropy-based features
//!
//! Every logarithm is base 2 and offsets its argument by [`LOG_EPSILON`] so that
//! zero-probability cells contribute nothing instead of producing `-inf`.

use crate::common::configuration::LOG_EPSILON;

/// Base-2 logarithm of `x + LOG_EPSILON`
pub fn guarded_log2(x: f64) -> f64 {
    (x + LOG_EPSILON).log2()
}

/// Shannon entropy `-Σ p·log2(p + ε)` of a probability sequence
pub fn entropy<I>(probabilities: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    -probabilities
        .into_iter()
        .map(|p| p * guarded_log2(p))
        .sum::<f64>()
}

/// Cross entropy `-Σ w·log2(q + ε)` of weights `w` against reference probabilities `q`
pub fn cross_entropy<I>(pairs: I) -> f64
where
    I: IntoIterator<Item = (f64, f64)>,
{
    -pairs
        .into_iter()
        .map(|(weight, reference)| weight * guarded_log2(reference))
        .sum::<f64>()
}
