#[cfg(test)]
#[path = "../../tests/unit/utils/comparison_test.rs"]
mod comparison_test;

use crate::utils::Float;
use std::cmp::Ordering;

/// Compares floats using total ordering, so that NaN values do not break sorting.
#[inline]
pub fn compare_floats(a: Float, b: Float) -> Ordering {
    a.total_cmp(&b)
}

/// Checks whether two floats are equal within a small tolerance which is relative to their magnitude.
pub fn is_close(a: Float, b: Float) -> bool {
    let scale = a.abs().max(b.abs()).max(1.);

    (a - b).abs() <= Float::EPSILON * scale * 16.
}
