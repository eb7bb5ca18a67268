//! Branch-lean quaternary lower-bound search.

/// Lower bound that narrows the interval by 4x per round.
///
/// While more than four candidates remain, three evenly spaced probes split
/// the interval into quarters. The three `>= target` predicates decide which
/// quarter holds the lower bound, so one round costs three comparisons for a
/// 4x reduction instead of the two comparisons a naive binary search spends
/// for a 2x reduction. A linear tail finishes intervals of length <= 4.
///
/// Returns the first position whose value is not less than `target`, or
/// `haystack.len()` when every element compares less.
pub fn quaternary_lower_bound<T: Ord>(haystack: &[T], target: T) -> usize {
    let mut first = 0usize;
    let mut len = haystack.len();

    while len > 4 {
        let quarter = len >> 2;
        let q1 = first + quarter;
        let q2 = q1 + quarter;
        let q3 = q2 + quarter;
        let ge1 = haystack[q1] >= target;
        let ge2 = haystack[q2] >= target;
        let ge3 = haystack[q3] >= target;
        if ge1 {
            len = quarter;
        } else if ge2 {
            first = q1;
            len = quarter;
        } else if ge3 {
            first = q2;
            len = quarter;
        } else {
            first = q3;
            len -= quarter * 3;
        }
    }

    let end = first + len;
    while first < end {
        if haystack[first] >= target {
            return first;
        }
        first += 1;
    }
    first
}
