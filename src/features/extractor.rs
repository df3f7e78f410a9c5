//! Feature orchestration from a selection mask
//!
//! The extractor holds only configuration. Every call computes the selected
//! features from scratch and returns a fresh record, so repeated calls with
//! identical inputs produce bit-identical output.

use tracing::{debug, warn};

use crate::common::configuration::ExtractorConfig;
use crate::common::error::Result;
use crate::features::correlation::maximal_correlation_coefficient;
use crate::features::record::FeatureRecord;
use crate::features::selection::{Feature, FeatureSelection};
use crate::features::statistics;
use crate::features::summary::DirectionalSummary;
use crate::glcm::matrix::CooccurrenceMatrix;

/// Computes Haralick features for co-occurrence matrices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextureExtractor {
    config: ExtractorConfig,
}

impl TextureExtractor {
    /// Create an extractor with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an extractor with an explicit configuration
    pub const fn with_config(config: ExtractorConfig) -> Self {
        Self { config }
    }

    /// Active configuration
    pub const fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Compute every selected feature
    ///
    /// Unselected features are zero. An empty matrix, or one with no
    /// probability mass, yields the all-zero record.
    pub fn compute(
        &self,
        matrix: &CooccurrenceMatrix,
        selection: &FeatureSelection,
    ) -> FeatureRecord {
        let mut record = FeatureRecord::default();

        if matrix.is_empty() || matrix.total() <= 0.0 {
            debug!(order = matrix.order(), "no probability mass, all features zero");
            return record;
        }

        for feature in selection.iter() {
            record.set(feature, self.feature_value(matrix, feature));
        }

        record
    }

    /// Compute a single feature regardless of any selection
    ///
    /// A maximal correlation coefficient whose eigenvalue computation fails
    /// is reported as zero.
    pub fn feature_value(&self, matrix: &CooccurrenceMatrix, feature: Feature) -> f64 {
        match feature {
            Feature::AngularSecondMoment => statistics::angular_second_moment(matrix),
            Feature::Contrast => statistics::contrast(matrix),
            Feature::Correlation => statistics::correlation(matrix),
            Feature::Variance => statistics::variance(matrix),
            Feature::InverseDifferenceMoment => statistics::inverse_difference_moment(matrix),
            Feature::SumAverage => statistics::sum_average(matrix),
            Feature::SumVariance => statistics::sum_variance(matrix),
            Feature::SumEntropy => statistics::sum_entropy(matrix),
            Feature::Entropy => statistics::entropy(matrix),
            Feature::DifferenceVariance => statistics::difference_variance(matrix),
            Feature::DifferenceEntropy => statistics::difference_entropy(matrix),
            Feature::InformationCorrelation1 => statistics::information_correlation_1(matrix),
            Feature::InformationCorrelation2 => statistics::information_correlation_2(matrix),
            Feature::MaximalCorrelationCoefficient => {
                match maximal_correlation_coefficient(matrix, self.config.eigen) {
                    Ok(value) => value,
                    Err(error) => {
                        warn!(%error, "maximal correlation coefficient degraded to zero");
                        0.0
                    }
                }
            }
        }
    }

    /// Compute one record per directional matrix and summarize them
    ///
    /// # Errors
    ///
    /// Returns an error if `matrices` is empty
    pub fn compute_directional(
        &self,
        matrices: &[CooccurrenceMatrix],
        selection: &FeatureSelection,
    ) -> Result<DirectionalSummary> {
        let records: Vec<FeatureRecord> = matrices
            .iter()
            .map(|matrix| self.compute(matrix, selection))
            .collect();

        DirectionalSummary::from_records(&records)
    }
}

/// Compute the selected features with the default configuration
pub fn compute_texture_features(
    matrix: &CooccurrenceMatrix,
    selection: &FeatureSelection,
) -> FeatureRecord {
    TextureExtractor::default().compute(matrix, selection)
}
