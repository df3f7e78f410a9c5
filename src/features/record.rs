//! Output record holding one value per feature

use crate::common::configuration::FEATURE_COUNT;
use crate::features::selection::Feature;

/// Values of the fourteen Haralick features
///
/// Features that were not selected are exactly zero.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FeatureRecord {
    /// Angular second moment
    pub angular_second_moment: f64,
    /// Contrast
    pub contrast: f64,
    /// Correlation (NaN when the row marginal has zero variance)
    pub correlation: f64,
    /// Sum of squares: variance
    pub variance: f64,
    /// Inverse difference moment
    pub inverse_difference_moment: f64,
    /// Sum average
    pub sum_average: f64,
    /// Sum variance
    pub sum_variance: f64,
    /// Sum entropy
    pub sum_entropy: f64,
    /// Entropy
    pub entropy: f64,
    /// Difference variance
    pub difference_variance: f64,
    /// Difference entropy
    pub difference_entropy: f64,
    /// First information measure of correlation
    pub information_correlation_1: f64,
    /// Second information measure of correlation
    pub information_correlation_2: f64,
    /// Maximal correlation coefficient
    pub maximal_correlation_coefficient: f64,
}

impl FeatureRecord {
    /// Value of one feature
    pub const fn get(&self, feature: Feature) -> f64 {
        match feature {
            Feature::AngularSecondMoment => self.angular_second_moment,
            Feature::Contrast => self.contrast,
            Feature::Correlation => self.correlation,
            Feature::Variance => self.variance,
            Feature::InverseDifferenceMoment => self.inverse_difference_moment,
            Feature::SumAverage => self.sum_average,
            Feature::SumVariance => self.sum_variance,
            Feature::SumEntropy => self.sum_entropy,
            Feature::Entropy => self.entropy,
            Feature::DifferenceVariance => self.difference_variance,
            Feature::DifferenceEntropy => self.difference_entropy,
            Feature::InformationCorrelation1 => self.information_correlation_1,
            Feature::InformationCorrelation2 => self.information_correlation_2,
            Feature::MaximalCorrelationCoefficient => self.maximal_correlation_coefficient,
        }
    }

    pub(crate) const fn set(&mut self, feature: Feature, value: f64) {
        let slot = match feature {
            Feature::AngularSecondMoment => &mut self.angular_second_moment,
            Feature::Contrast => &mut self.contrast,
            Feature::Correlation => &mut self.correlation,
            Feature::Variance => &mut self.variance,
            Feature::InverseDifferenceMoment => &mut self.inverse_difference_moment,
            Feature::SumAverage => &mut self.sum_average,
            Feature::SumVariance => &mut self.sum_variance,
            Feature::SumEntropy => &mut self.sum_entropy,
            Feature::Entropy => &mut self.entropy,
            Feature::DifferenceVariance => &mut self.difference_variance,
            Feature::DifferenceEntropy => &mut self.difference_entropy,
            Feature::InformationCorrelation1 => &mut self.information_correlation_1,
            Feature::InformationCorrelation2 => &mut self.information_correlation_2,
            Feature::MaximalCorrelationCoefficient => &mut self.maximal_correlation_coefficient,
        };
        *slot = value;
    }

    /// All values in canonical order
    pub fn to_array(&self) -> [f64; FEATURE_COUNT] {
        Feature::ALL.map(|feature| self.get(feature))
    }

    /// `(feature, value)` pairs in canonical order
    pub fn iter(&self) -> impl Iterator<Item = (Feature, f64)> + '_ {
        Feature::ALL
            .into_iter()
            .map(move |feature| (feature, self.get(feature)))
    }
}
