//! Small utility functions used across the core module
//!
//! Keep this light — if it grows, split further.

/// Map any integer (negative included) into `[0, bound)`
///
/// Negative values count back from `bound`, so `-1` is the last slot.
/// Returns `None` when `bound` is zero: there is nothing to index.
pub fn wrap_index(value: i64, bound: usize) -> Option<usize> {
    let bound = i64::try_from(bound).ok().filter(|b| *b > 0)?;
    usize::try_from(value.rem_euclid(bound)).ok()
}
