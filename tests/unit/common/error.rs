//! Tests for error formatting and helper constructors

#[cfg(test)]
mod tests {
    use haralick::common::error::{TextureError, computation_error, invalid_parameter};

    #[test]
    fn test_not_square_display() {
        let error = TextureError::NotSquare { rows: 3, cols: 4 };

        assert_eq!(error.to_string(), "Matrix must be square, got 3x4");
    }

    #[test]
    fn test_no_convergence_display_names_block() {
        let error = TextureError::NoConvergence {
            order: 5,
            block_end: 3,
            iterations: 30,
        };

        let message = error.to_string();
        assert!(message.contains("30 shifts"), "Unexpected message: {message}");
        assert!(message.contains("row 3"), "Unexpected message: {message}");
        assert!(message.contains("order 5"), "Unexpected message: {message}");
    }

    #[test]
    fn test_invalid_parameter_helper() {
        let error = invalid_parameter("rows", &2, &"row length must equal 3");

        assert_eq!(
            error,
            TextureError::InvalidParameter {
                parameter: "rows",
                value: "2".to_string(),
                reason: "row length must equal 3".to_string(),
            }
        );
        assert_eq!(
            error.to_string(),
            "Invalid parameter 'rows' = '2': row length must equal 3"
        );
    }

    #[test]
    fn test_computation_error_helper() {
        let error = computation_error("solve", &"diverged");

        assert_eq!(error.to_string(), "Computation error in solve: diverged");
    }

    #[test]
    fn test_shape_error_conversion() {
        let shape_error = ndarray::Array2::<f64>::from_shape_vec((2, 2), vec![1.0])
            .err()
            .map(TextureError::from);

        assert!(matches!(
            shape_error,
            Some(TextureError::Computation {
                operation: "array shape",
                ..
            })
        ));
    }

    #[test]
    fn test_error_is_std_error() {
        let error: Box<dyn std::error::Error> =
            Box::new(TextureError::NonFiniteEntry { row: 1, col: 2 });

        assert_eq!(error.to_string(), "Matrix entry (1, 2) is not finite");
    }
}
