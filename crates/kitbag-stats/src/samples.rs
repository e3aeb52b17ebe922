//! Built-in sequences for demonstrating the calculator.

use crate::error::StatsError;

const SAMPLES: &[&[f64]] = &[
    // odd length, simple
    &[1.0, 2.0, 3.0],
    // odd length, unsorted with duplicates
    &[3.0, 1.0, 4.0, 1.0, 5.0],
    // even length, includes a negative
    &[10.0, -5.0, 0.0, 7.0],
    // odd length, fractional
    &[2.5, 2.0, 3.5, 4.0, 1.0],
];

pub fn samples() -> &'static [&'static [f64]] {
    SAMPLES
}

/// Look up a sample by its 1-based menu index.
///
/// # Errors
///
/// Returns [`StatsError::SelectionOutOfRange`] for `0` or anything past the
/// last sample.
pub fn sample(index: usize) -> Result<&'static [f64], StatsError> {
    index
        .checked_sub(1)
        .and_then(|i| SAMPLES.get(i))
        .copied()
        .ok_or(StatsError::SelectionOutOfRange {
            index,
            available: SAMPLES.len(),
        })
}
