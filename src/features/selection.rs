//! Feature identifiers and the caller's selection mask

use bitvec::array::BitArray;
use std::fmt;

use crate::common::configuration::FEATURE_COUNT;

/// The fourteen Haralick texture features, in canonical order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Feature {
    /// Sum of squared probabilities; high for homogeneous textures
    AngularSecondMoment,
    /// Probability mass weighted by squared tone difference
    Contrast,
    /// Linear dependency of gray tones between neighbours
    Correlation,
    /// Sum of squares about the mean tone
    Variance,
    /// Probability mass weighted by inverse squared tone difference
    InverseDifferenceMoment,
    /// Mean of the tone-sum distribution
    SumAverage,
    /// Spread of the tone-sum distribution about its entropy
    SumVariance,
    /// Entropy of the tone-sum distribution
    SumEntropy,
    /// Joint entropy of the co-occurrence matrix
    Entropy,
    /// Variance of the tone-difference distribution
    DifferenceVariance,
    /// Entropy of the tone-difference distribution
    DifferenceEntropy,
    /// First information measure of correlation
    InformationCorrelation1,
    /// Second information measure of correlation
    InformationCorrelation2,
    /// Square root of the second largest eigenvalue of the derived correlation matrix
    MaximalCorrelationCoefficient,
}

impl Feature {
    /// Every feature in canonical order
    pub const ALL: [Self; FEATURE_COUNT] = [
        Self::AngularSecondMoment,
        Self::Contrast,
        Self::Correlation,
        Self::Variance,
        Self::InverseDifferenceMoment,
        Self::SumAverage,
        Self::SumVariance,
        Self::SumEntropy,
        Self::Entropy,
        Self::DifferenceVariance,
        Self::DifferenceEntropy,
        Self::InformationCorrelation1,
        Self::InformationCorrelation2,
        Self::MaximalCorrelationCoefficient,
    ];

    /// Zero-based position in canonical order
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Look up a feature by canonical position
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Human-readable name
    pub const fn label(self) -> &'static str {
        match self {
            Self::AngularSecondMoment => "Angular Second Moment",
            Self::Contrast => "Contrast",
            Self::Correlation => "Correlation",
            Self::Variance => "Variance",
            Self::InverseDifferenceMoment => "Inverse Diff Moment",
            Self::SumAverage => "Sum Average",
            Self::SumVariance => "Sum Variance",
            Self::SumEntropy => "Sum Entropy",
            Self::Entropy => "Entropy",
            Self::DifferenceVariance => "Difference Variance",
            Self::DifferenceEntropy => "Difference Entropy",
            Self::InformationCorrelation1 => "Meas of Correlation-1",
            Self::InformationCorrelation2 => "Meas of Correlation-2",
            Self::MaximalCorrelationCoefficient => "Max Correlation Coeff",
        }
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Set of features the caller wants computed
///
/// One bit per [`Feature`], indexed by canonical position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FeatureSelection {
    flags: BitArray<[u16; 1]>,
}

impl FeatureSelection {
    /// Select nothing
    pub fn none() -> Self {
        Self::default()
    }

    /// Select every feature
    pub fn all() -> Self {
        Feature::ALL.into_iter().collect()
    }

    /// Build from one boolean per feature in canonical order
    pub fn from_flags(flags: [bool; FEATURE_COUNT]) -> Self {
        Feature::ALL
            .into_iter()
            .zip(flags)
            .filter_map(|(feature, enabled)| enabled.then_some(feature))
            .collect()
    }

    /// Add a feature to the selection
    pub fn insert(&mut self, feature: Feature) {
        self.flags.set(feature.index(), true);
    }

    /// Remove a feature from the selection
    pub fn remove(&mut self, feature: Feature) {
        self.flags.set(feature.index(), false);
    }

    /// Copy of this selection with `feature` added
    #[must_use]
    pub fn with(mut self, feature: Feature) -> Self {
        self.insert(feature);
        self
    }

    /// Copy of this selection with `feature` removed
    #[must_use]
    pub fn without(mut self, feature: Feature) -> Self {
        self.remove(feature);
        self
    }

    /// Test feature membership
    pub fn contains(&self, feature: Feature) -> bool {
        self.flags.get(feature.index()).as_deref() == Some(&true)
    }

    /// Number of selected features
    pub fn count(&self) -> usize {
        self.flags.count_ones()
    }

    /// True when nothing is selected
    pub fn is_empty(&self) -> bool {
        self.flags.not_any()
    }

    /// Selected features in canonical order
    pub fn iter(&self) -> impl Iterator<Item = Feature> + '_ {
        self.flags.iter_ones().filter_map(Feature::from_index)
    }
}

impl FromIterator<Feature> for FeatureSelection {
    fn from_iter<I: IntoIterator<Item = Feature>>(iter: I) -> Self {
        let mut selection = Self::none();
        for feature in iter {
            selection.insert(feature);
        }
        selection
    }
}
