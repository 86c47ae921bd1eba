//! Random integer draw

use std::ops::Range;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::ConversionError;

/// Lower bound inclusive, upper bound exclusive
pub const DEFAULT_RANGE: Range<i64> = 1..10;

/// Draws a uniformly distributed integer from `range`.
pub fn draw<R: Rng + ?Sized>(rng: &mut R, range: Range<i64>) -> Result<i64, ConversionError> {
    if range.is_empty() {
        return Err(ConversionError::EmptyRange {
            low: range.start,
            high: range.end,
        });
    }
    Ok(rng.random_range(range))
}

/// Seeded generator when a seed is given, OS-seeded otherwise.
pub fn generator(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}
