// tests/core/util.rs
use arlot_protect::core::wrap_index;

#[test]
fn test_wrap_index_in_range_is_identity() {
    assert_eq!(wrap_index(0, 1), Some(0));
    assert_eq!(wrap_index(3, 5), Some(3));
}

#[test]
fn test_wrap_index_negative_counts_from_end() {
    assert_eq!(wrap_index(-1, 5), Some(4));
    assert_eq!(wrap_index(-5, 5), Some(0));
    assert_eq!(wrap_index(-6, 5), Some(4));
    assert_eq!(wrap_index(-1, 1), Some(0));
}

#[test]
fn test_wrap_index_overflowing_wraps_around() {
    assert_eq!(wrap_index(5, 5), Some(0));
    assert_eq!(wrap_index(7, 5), Some(2));
    assert_eq!(wrap_index(i64::MAX, 80), Some((i64::MAX % 80) as usize));
}

#[test]
fn test_wrap_index_zero_bound_is_none() {
    assert_eq!(wrap_index(0, 0), None);
    assert_eq!(wrap_index(-1, 0), None);
}
