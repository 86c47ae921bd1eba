//! Property-Based Tests for menagerie
//!
//! Uses proptest for testing invariants and edge cases
//!
//! These tests verify:
//! - The random draw always stays inside its half-open range
//! - Float to integer conversion truncates toward zero
//! - Engine status display agrees with is_running

use proptest::prelude::*;

use menagerie::tutorial::convert;
use menagerie::tutorial::random::{self, DEFAULT_RANGE};

// =============================================================================
// Random Draw Property Tests
// =============================================================================

proptest! {
    /// Default draw: always in [1, 10), never 10
    #[test]
    fn draw_stays_in_default_range(seed in any::<u64>()) {
        let mut rng = random::generator(Some(seed));
        for _ in 0..64 {
            let value = random::draw(&mut rng, DEFAULT_RANGE).expect("range is not empty");
            prop_assert!((1..10).contains(&value));
            prop_assert_ne!(value, 10);
        }
    }

    /// Arbitrary non-empty ranges: result respects both bounds
    #[test]
    fn draw_respects_custom_range(seed in any::<u64>(), low in -1000i64..1000, span in 1i64..1000) {
        let mut rng = random::generator(Some(seed));
        let value = random::draw(&mut rng, low..low + span).expect("range is not empty");
        prop_assert!(value >= low);
        prop_assert!(value < low + span);
    }

    /// Empty or inverted ranges are rejected, never panic
    #[test]
    fn draw_rejects_empty_range(seed in any::<u64>(), low in -1000i64..1000, back in 0i64..1000) {
        let mut rng = random::generator(Some(seed));
        prop_assert!(random::draw(&mut rng, low..low - back).is_err());
    }
}

// =============================================================================
// Conversion Property Tests
// =============================================================================

proptest! {
    /// float_to_int truncates: |result| <= |input| and the gap is below one
    #[test]
    fn float_to_int_truncates(value in -1.0e15f64..1.0e15) {
        let n = convert::float_to_int(value).expect("value is in range");
        prop_assert_eq!(n as f64, value.trunc());
        prop_assert!((value - n as f64).abs() < 1.0);
    }

    /// parse_int accepts whatever int_to_text produces
    #[test]
    fn int_text_roundtrip(n in any::<i64>()) {
        prop_assert_eq!(convert::parse_int(&convert::int_to_text(n)), Ok(n));
    }

    /// float_to_text always keeps a decimal point or exponent
    #[test]
    fn float_text_is_never_bare_integer(value in -1.0e12f64..1.0e12) {
        let text = convert::float_to_text(value);
        prop_assert!(text.contains('.') || text.contains('e'));
        prop_assert_eq!(convert::parse_float(&text), Ok(value));
    }
}

// =============================================================================
// Enum Property Tests
// =============================================================================

use menagerie::types::EngineStatus;

proptest! {
    /// EngineStatus: only "on" is running
    #[test]
    fn engine_status_running(status in prop_oneof![Just(EngineStatus::Off), Just(EngineStatus::On)]) {
        prop_assert_eq!(status.is_running(), status.to_string() == "on");
    }
}
