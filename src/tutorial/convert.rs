//! Explicit conversions between numbers and text
//!
//! Float to integer truncates toward zero. Anything that would wrap, saturate
//! or silently lose the value is reported as a [`ConversionError`] instead.

use super::complex::Complex;
use crate::error::ConversionError;

/// `2.8 -> 2`, `-2.8 -> -2`
pub fn float_to_int(value: f64) -> Result<i64, ConversionError> {
    let truncated = value.trunc();
    // i64::MAX as f64 rounds up to 2^63, which is already out of range
    if !truncated.is_finite() || truncated < i64::MIN as f64 || truncated >= i64::MAX as f64 {
        return Err(ConversionError::FloatOutOfRange { value });
    }
    Ok(truncated as i64)
}

pub fn int_to_float(value: i64) -> f64 {
    value as f64
}

pub fn int_to_complex(value: i64) -> Complex {
    Complex::from(value)
}

/// Parses an integer literal, ignoring surrounding whitespace.
pub fn parse_int(text: &str) -> Result<i64, ConversionError> {
    text.trim()
        .parse()
        .map_err(|_| ConversionError::InvalidInt {
            text: text.to_string(),
        })
}

/// Parses a float literal, ignoring surrounding whitespace.
pub fn parse_float(text: &str) -> Result<f64, ConversionError> {
    text.trim()
        .parse()
        .map_err(|_| ConversionError::InvalidFloat {
            text: text.to_string(),
        })
}

pub fn int_to_text(value: i64) -> String {
    value.to_string()
}

/// Floats keep their fractional part (`3.0 -> "3.0"`). Exponents carry an
/// explicit sign and at least two digits (`1e16 -> "1e+16"`, `1e-5 -> "1e-05"`).
pub fn float_to_text(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    let shortest = format!("{value:?}");
    let Some((mantissa, exponent)) = shortest.split_once('e') else {
        return shortest;
    };
    let (sign, digits) = match exponent.strip_prefix('-') {
        Some(digits) => ('-', digits),
        None => ('+', exponent),
    };
    format!("{mantissa}e{sign}{digits:0>2}")
}
