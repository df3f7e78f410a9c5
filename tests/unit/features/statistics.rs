//! Tests for the closed-form Haralick features

#[cfg(test)]
mod tests {
    use haralick::features::statistics::{
        InformationEntropies, angular_second_moment, contrast, correlation, difference_entropy,
        difference_variance, entropy, information_correlation_1, information_correlation_2,
        inverse_difference_moment, sum_average, sum_entropy, sum_variance, variance,
    };
    use haralick::glcm::matrix::CooccurrenceMatrix;
    use ndarray::{Array2, array};

    // Horizontal symmetric co-occurrence counts of the 4x4, 4-tone image
    // from Haralick, Shanmugam and Dinstein (1973)
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

    fn uniform_diagonal(order: usize) -> CooccurrenceMatrix {
        let probabilities = Array2::from_diag_elem(order, 1.0 / order as f64);
        CooccurrenceMatrix::from_array(probabilities).unwrap_or_else(|error| {
            unreachable!("Diagonal matrix is valid: {error}");
        })
    }

    fn assert_close(actual: f64, expected: f64, name: &str) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "{name}: expected {expected}, got {actual}"
        );
    }

    // Reference values computed independently in double precision
    #[test]
    fn test_textbook_matrix_features() {
        let matrix = textbook();

        assert_close(angular_second_moment(&matrix), 0.145_833_333_333_333, "asm");
        assert_close(contrast(&matrix), 0.583_333_333_333_333, "contrast");
        assert_close(correlation(&matrix), 0.719_532_554_257_095, "correlation");
        assert_close(variance(&matrix), 1.039_930_555_555_555, "variance");
        assert_close(inverse_difference_moment(&matrix), 0.808_333_333_333_333, "idm");
        assert_close(sum_average(&matrix), 2.583_333_333_333_333, "sum average");
        assert_close(sum_entropy(&matrix), 2.459_147_908_371_074, "sum entropy");
        assert_close(sum_variance(&matrix), 3.591_810_908_661_946, "sum variance");
        assert_close(entropy(&matrix), 3.022_055_194_447_25, "entropy");
        assert_close(difference_variance(&matrix), 0.409_722_222_222_222, "difference variance");
        assert_close(difference_entropy(&matrix), 1.188_721_871_212_782, "difference entropy");
        assert_close(information_correlation_1(&matrix), -0.427_478_719_334_704, "imc1");
        assert_close(information_correlation_2(&matrix), 0.898_114_907_774_128, "imc2");
    }

    #[test]
    fn test_uniform_diagonal_identities() {
        for order in 1..=6 {
            let matrix = uniform_diagonal(order);

            assert_close(angular_second_moment(&matrix), 1.0 / order as f64, "asm");
            assert_close(contrast(&matrix), 0.0, "contrast");
            assert_close(inverse_difference_moment(&matrix), 1.0, "idm");
            assert_close(difference_variance(&matrix), 0.0, "difference variance");
        }
    }

    #[test]
    fn test_two_tone_diagonal_scenario() {
        let matrix = uniform_diagonal(2);

        assert_close(angular_second_moment(&matrix), 0.5, "asm");
        assert_close(contrast(&matrix), 0.0, "contrast");
        assert!((entropy(&matrix) - 1.0).abs() < 1e-8);
        assert_close(sum_average(&matrix), 1.0, "sum average");
        assert_close(variance(&matrix), 0.25, "variance");
    }

    // Perfectly dependent tones with spread along the diagonal
    #[test]
    fn test_diagonal_mass_is_perfectly_correlated() {
        assert_close(correlation(&uniform_diagonal(2)), 1.0, "correlation");
        assert_close(correlation(&uniform_diagonal(5)), 1.0, "correlation");
    }

    #[test]
    fn test_anti_diagonal_mass_is_anti_correlated() {
        let Ok(matrix) = CooccurrenceMatrix::from_array(array![[0.0, 0.5], [0.5, 0.0]]) else {
            unreachable!("Square finite matrix should be accepted");
        };

        assert_close(correlation(&matrix), -1.0, "correlation");
        assert_close(contrast(&matrix), 1.0, "contrast");
    }

    #[test]
    fn test_single_tone_correlation_is_undefined() {
        let Ok(matrix) = CooccurrenceMatrix::from_array(array![[0.0, 0.0], [0.0, 1.0]]) else {
            unreachable!("Square finite matrix should be accepted");
        };

        assert!(correlation(&matrix).is_nan());
    }

    #[test]
    fn test_sum_variance_is_centred_on_sum_entropy() {
        let matrix = textbook();
        let centre = sum_entropy(&matrix);

        let probabilities = [4.0, 4.0, 6.0, 0.0, 6.0, 2.0, 2.0].map(|count| count / 24.0);
        let expected: f64 = probabilities
            .iter()
            .enumerate()
            .map(|(k, p)| (k as f64 - centre).powi(2) * p)
            .sum();

        assert_close(sum_variance(&matrix), expected, "sum variance");
    }

    #[test]
    fn test_information_entropies_of_independent_tones() {
        // Product of two identical marginals: joint entropy equals HXY1 and HXY2
        let marginal = [0.2, 0.3, 0.5];
        let probabilities = Array2::from_shape_fn((3, 3), |(i, j)| marginal[i] * marginal[j]);
        let Ok(matrix) = CooccurrenceMatrix::from_array(probabilities) else {
            unreachable!("Square finite matrix should be accepted");
        };

        let h = InformationEntropies::from_matrix(&matrix);

        assert!((h.hx - h.hy).abs() < 1e-12);
        assert!((h.hxy - h.hxy1).abs() < 1e-8);
        assert!((h.hxy - h.hxy2).abs() < 1e-8);
        assert!(information_correlation_1(&matrix).abs() < 1e-8);
        assert!(information_correlation_2(&matrix) < 1e-3);
    }

    #[test]
    fn test_information_correlation_1_single_tone_is_zero() {
        let Ok(matrix) = CooccurrenceMatrix::from_array(array![[1.0]]) else {
            unreachable!("Scalar matrix should be accepted");
        };

        assert!(information_correlation_1(&matrix).abs() < f64::EPSILON);
    }

    #[test]
    fn test_entropy_is_non_negative_for_spread_mass() {
        let matrix = textbook();

        assert!(entropy(&matrix) > 0.0);
        assert!(sum_entropy(&matrix) > 0.0);
        assert!(difference_entropy(&matrix) > 0.0);
    }
}
