//! Tests for selection-driven feature orchestration

#[cfg(test)]
mod tests {
    use haralick::common::configuration::{EigenConfig, ExtractorConfig};
    use haralick::common::error::TextureError;
    use haralick::features::extractor::{TextureExtractor, compute_texture_features};
    use haralick::features::record::FeatureRecord;
    use haralick::features::selection::{Feature, FeatureSelection};
    use haralick::glcm::matrix::CooccurrenceMatrix;
    use ndarray::{Array2, array};

    fn textbook() -> CooccurrenceMatrix {
        let counts = array![
            [4.0, 2.0, 1.0, 0.0],
            [2.0, 4.0, 0.0, 0.0],
            [1.0, 0.0, 6.0, 1.0],
            [0.0, 0.0, 1.0, 2.0]
        ];
        CooccurrenceMatrix::from_counts(counts).unwrap_or_else(|error| {
            unreachable!("Textbook counts are valid: {error}");
        })
    }

    #[test]
    fn test_full_selection_on_textbook_matrix() {
        let record = compute_texture_features(&textbook(), &FeatureSelection::all());

        let expected = [
            (Feature::AngularSecondMoment, 0.145_833_333_333_333),
            (Feature::Contrast, 0.583_333_333_333_333),
            (Feature::Correlation, 0.719_532_554_257_095),
            (Feature::Variance, 1.039_930_555_555_555),
            (Feature::InverseDifferenceMoment, 0.808_333_333_333_333),
            (Feature::SumAverage, 2.583_333_333_333_333),
            (Feature::SumVariance, 3.591_810_908_661_946),
            (Feature::SumEntropy, 2.459_147_908_371_074),
            (Feature::Entropy, 3.022_055_194_447_25),
            (Feature::DifferenceVariance, 0.409_722_222_222_222),
            (Feature::DifferenceEntropy, 1.188_721_871_212_782),
            (Feature::InformationCorrelation1, -0.427_478_719_334_704),
            (Feature::InformationCorrelation2, 0.898_114_907_774_128),
            (Feature::MaximalCorrelationCoefficient, 0.864_841_785_058_664),
        ];

        for (feature, value) in expected {
            let actual = record.get(feature);
            assert!(
                (actual - value).abs() < 1e-9,
                "{feature}: expected {value}, got {actual}"
            );
        }
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn test_unselected_features_are_zero() {
        let selection = FeatureSelection::none()
            .with(Feature::Contrast)
            .with(Feature::Entropy);

        let record = compute_texture_features(&textbook(), &selection);

        for (feature, value) in record.iter() {
            if selection.contains(feature) {
                assert!(value > 0.0, "{feature} should be computed");
            } else {
                assert_eq!(value, 0.0, "{feature} should be zero");
            }
        }
    }

    #[test]
    fn test_empty_selection_yields_default_record() {
        let record = compute_texture_features(&textbook(), &FeatureSelection::none());
        assert_eq!(record, FeatureRecord::default());
    }

    #[test]
    fn test_matrix_without_mass_yields_default_record() {
        let Ok(zeros) = CooccurrenceMatrix::from_array(Array2::zeros((3, 3))) else {
            unreachable!("Zero matrix should be accepted");
        };
        let Ok(empty) = CooccurrenceMatrix::from_array(Array2::zeros((0, 0))) else {
            unreachable!("Empty matrix should be accepted");
        };

        let extractor = TextureExtractor::new();
        assert_eq!(
            extractor.compute(&zeros, &FeatureSelection::all()),
            FeatureRecord::default()
        );
        assert_eq!(
            extractor.compute(&empty, &FeatureSelection::all()),
            FeatureRecord::default()
        );
    }

    #[test]
    fn test_selection_does_not_change_values() {
        let matrix = textbook();
        let full = compute_texture_features(&matrix, &FeatureSelection::all());

        for feature in Feature::ALL {
            let single = compute_texture_features(&matrix, &FeatureSelection::none().with(feature));
            assert_eq!(single.get(feature).to_bits(), full.get(feature).to_bits());
        }
    }

    #[test]
    fn test_failed_eigen_solve_degrades_to_zero() {
        let config = ExtractorConfig {
            eigen: EigenConfig {
                max_shift_iterations: 0,
                ..EigenConfig::default()
            },
        };
        let extractor = TextureExtractor::with_config(config);

        let record = extractor.compute(&textbook(), &FeatureSelection::all());

        assert!(record.maximal_correlation_coefficient.abs() < f64::EPSILON);
        assert!((record.contrast - 0.583_333_333_333_333).abs() < 1e-9);
        assert_eq!(extractor.config(), &config);
    }

    #[test]
    fn test_feature_value_ignores_selection() {
        let extractor = TextureExtractor::default();
        let value = extractor.feature_value(&textbook(), Feature::AngularSecondMoment);
        assert!((value - 0.145_833_333_333_333).abs() < 1e-9);
    }

    #[test]
    fn test_directional_summary() {
        let horizontal = textbook();
        let Ok(diagonal) = CooccurrenceMatrix::from_array(Array2::from_diag_elem(4, 0.25)) else {
            unreachable!("Diagonal matrix should be accepted");
        };

        let selection = FeatureSelection::none()
            .with(Feature::AngularSecondMoment)
            .with(Feature::Contrast);
        let Ok(summary) =
            TextureExtractor::new().compute_directional(&[horizontal, diagonal], &selection)
        else {
            unreachable!("Two directions should summarize");
        };

        assert_eq!(summary.directions, 2);
        let asm_mean = (0.145_833_333_333_333 + 0.25) / 2.0;
        assert!((summary.mean.angular_second_moment - asm_mean).abs() < 1e-9);
        assert!((summary.range.contrast - 0.583_333_333_333_333).abs() < 1e-9);
        assert!(summary.mean.entropy.abs() < f64::EPSILON);
    }

    #[test]
    fn test_directional_summary_requires_matrices() {
        let result = TextureExtractor::new().compute_directional(&[], &FeatureSelection::all());
        assert!(matches!(result, Err(TextureError::InvalidParameter { .. })));
    }
}
