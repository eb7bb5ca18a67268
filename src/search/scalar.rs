//! Scalar search routines: the library baselines and the manual scan.

/// Library baseline for the linear family: `Iterator::position`.
pub fn std_find<T: PartialEq>(haystack: &[T], target: T) -> usize {
    haystack
        .iter()
        .position(|v| *v == target)
        .unwrap_or(haystack.len())
}

/// Manual sequential scan: one equality test per element.
pub fn linear_scan<T: PartialEq>(haystack: &[T], target: T) -> usize {
    for (i, v) in haystack.iter().enumerate() {
        if *v == target {
            return i;
        }
    }
    haystack.len()
}

/// Library baseline for the lower-bound family: `slice::partition_point`.
///
/// Returns the first position whose value is not less than `target`;
/// `haystack.len()` when every element compares less.
pub fn std_lower_bound<T: Ord>(haystack: &[T], target: T) -> usize {
    haystack.partition_point(|v| *v < target)
}
