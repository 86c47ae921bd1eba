//! Error handling module for menagerie
//!
//! Provides centralized error handling with proper error types using thiserror.
//! The fixed exercise data never fails on its own; these errors cover the
//! output sink, the optional config file and the conversion helpers.

use thiserror::Error;

/// Failures of the numeric/text conversions and the random draw.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConversionError {
    /// Float is NaN, infinite or outside the integer range
    #[error("cannot convert {value} to an integer")]
    FloatOutOfRange { value: f64 },

    /// Text does not hold an integer literal
    #[error("invalid integer literal: {text:?}")]
    InvalidInt { text: String },

    /// Text does not hold a float literal
    #[error("invalid float literal: {text:?}")]
    InvalidFloat { text: String },

    /// Random draw requested from a range with no values
    #[error("empty range {low}..{high}")]
    EmptyRange { low: i64, high: i64 },
}

/// Main error type for menagerie
#[derive(Error, Debug)]
pub enum MenagerieError {
    /// IO errors (writing to the output sink, reading config files)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration errors (invalid values in a loaded config)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Conversion errors from the data-types tour
    #[error("Conversion error: {0}")]
    Conversion(#[from] ConversionError),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for menagerie operations
pub type Result<T> = std::result::Result<T, MenagerieError>;

impl MenagerieError {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MenagerieError::config("random_low must be below random_high");
        assert_eq!(
            err.to_string(),
            "Configuration error: random_low must be below random_high"
        );

        let err = MenagerieError::from(ConversionError::EmptyRange { low: 5, high: 5 });
        assert_eq!(err.to_string(), "Conversion error: empty range 5..5");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err: MenagerieError = io_err.into();
        assert!(matches!(err, MenagerieError::Io(_)));
    }

    #[test]
    fn test_conversion_error_messages() {
        let err = ConversionError::InvalidInt {
            text: "three".to_string(),
        };
        assert_eq!(err.to_string(), "invalid integer literal: \"three\"");

        let err = ConversionError::FloatOutOfRange { value: f64::INFINITY };
        assert_eq!(err.to_string(), "cannot convert inf to an integer");
    }
}
