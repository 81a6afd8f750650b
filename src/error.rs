//! Error types for lanewise operations.
//!
//! Out-of-range lane indices and wrong-arity constructors are programmer
//! errors and panic. The variants here cover the few places where a caller
//! explicitly asks for a recoverable result instead.

use std::fmt;

/// Errors that can occur during lanewise operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LaneError {
    /// A slice did not hold exactly one value per lane.
    LengthMismatch {
        /// The lane count of the target storage.
        expected: usize,
        /// The number of values that were provided.
        actual: usize,
    },
    /// A lane could not be represented exactly in the target element type.
    InexactConversion {
        /// Index of the first lane that failed to convert.
        lane: usize,
        /// The lane count of the target storage.
        lanes: usize,
    },
}

impl fmt::Display for LaneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LaneError::LengthMismatch { expected, actual } => write!(
                f,
                "Length mismatch: expected exactly {} lanes, got {}",
                expected, actual
            ),
            LaneError::InexactConversion { lane, lanes } => write!(
                f,
                "Inexact conversion: lane {} of {} is not representable in the target type",
                lane, lanes
            ),
        }
    }
}

impl std::error::Error for LaneError {}

/// Result type alias for lanewise operations.
pub type Result<T> = std::result::Result<T, LaneError>;

/// Creates a length mismatch error.
pub fn length_mismatch(expected: usize, actual: usize) -> LaneError {
    LaneError::LengthMismatch { expected, actual }
}

/// Creates an inexact conversion error.
pub fn inexact_conversion(lane: usize, lanes: usize) -> LaneError {
    LaneError::InexactConversion { lane, lanes }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_mismatch_display() {
        let error = length_mismatch(4, 3);
        let display = format!("{}", error);
        assert!(display.contains("Length mismatch"));
        assert!(display.contains("exactly 4 lanes"));
        assert!(display.contains("got 3"));
    }

    #[test]
    fn test_inexact_conversion_display() {
        let error = inexact_conversion(0, 2);
        let display = format!("{}", error);
        assert!(display.contains("Inexact conversion"));
        assert!(display.contains("lane 0 of 2"));
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(length_mismatch(2, 5), length_mismatch(2, 5));
        assert_ne!(length_mismatch(2, 5), length_mismatch(2, 1));
        assert_ne!(length_mismatch(2, 1), inexact_conversion(2, 1));
    }

    #[test]
    fn test_error_trait_implementation() {
        let error = inexact_conversion(1, 4);

        let _: &dyn std::error::Error = &error;

        assert!(std::error::Error::source(&error).is_none());
    }
}
