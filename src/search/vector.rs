//! SIMD linear scans with safe runtime dispatch.
//!
//! Design goals:
//! - Always safe to run: never executes unsupported instructions (no SIGILL).
//! - One binary works across a wide range of CPUs: AVX2 when the CPU has it,
//!   otherwise the scalar scan.
//! - The group widths (8 lanes for u32, 4 lanes for u64) and the 4x unroll
//!   factor are the object of measurement and are preserved exactly.
//!
//! Each AVX2 kernel compares one 256-bit group against a broadcast of the
//! target, extracts the per-byte comparison mask with `movemask`, and reads
//! the matching lane out of the first set bit. A scalar tail handles the
//! remainder shorter than one group.

use crate::search::scalar::linear_scan;

/// Linear scan over `u32` elements, 8 per group.
#[inline]
pub fn vector_scan_u32(haystack: &[u32], target: u32) -> usize {
    #[cfg(target_arch = "x86_64")]
    {
        if std::is_x86_feature_detected!("avx2") {
            return unsafe { vector_scan_u32_avx2(haystack, target) };
        }
    }

    linear_scan(haystack, target)
}

/// Linear scan over `u64` elements, 4 per group.
#[inline]
pub fn vector_scan_u64(haystack: &[u64], target: u64) -> usize {
    #[cfg(target_arch = "x86_64")]
    {
        if std::is_x86_feature_detected!("avx2") {
            return unsafe { vector_scan_u64_avx2(haystack, target) };
        }
    }

    linear_scan(haystack, target)
}

/// Linear scan over `u32` elements, manually unrolled to 32 per iteration.
///
/// Semantically identical to [`vector_scan_u32`]; the unroll amortizes loop
/// overhead across four vector registers per iteration.
#[inline]
pub fn vector_scan_unrolled_u32(haystack: &[u32], target: u32) -> usize {
    #[cfg(target_arch = "x86_64")]
    {
        if std::is_x86_feature_detected!("avx2") {
            return unsafe { vector_scan_unrolled_u32_avx2(haystack, target) };
        }
    }

    linear_scan(haystack, target)
}

// ===== x86_64 AVX2 kernels =====

#[cfg(target_arch = "x86_64")]
#[target_feature(enable = "avx2")]
unsafe fn vector_scan_u32_avx2(haystack: &[u32], target: u32) -> usize {
    use std::arch::x86_64::*;

    let len = haystack.len();
    let mut i = 0usize;
    unsafe {
        let needle = _mm256_set1_epi32(target as i32);
        if len > 8 {
            while i + 8 < len {
                let group = _mm256_loadu_si256(haystack.as_ptr().add(i) as *const __m256i);
                let mask = _mm256_movemask_epi8(_mm256_cmpeq_epi32(needle, group)) as u32;
                if mask != 0 {
                    // Four mask bits per 32-bit lane.
                    return i + (mask.trailing_zeros() / 4) as usize;
                }
                i += 8;
            }
        }
    }
    for j in i..len {
        if haystack[j] == target {
            return j;
        }
    }
    len
}

#[cfg(target_arch = "x86_64")]
#[target_feature(enable = "avx2")]
unsafe fn vector_scan_u64_avx2(haystack: &[u64], target: u64) -> usize {
    use std::arch::x86_64::*;

    let len = haystack.len();
    let mut i = 0usize;
    unsafe {
        let needle = _mm256_set1_epi64x(target as i64);
        if len > 4 {
            while i + 4 < len {
                let group = _mm256_loadu_si256(haystack.as_ptr().add(i) as *const __m256i);
                let mask = _mm256_movemask_epi8(_mm256_cmpeq_epi64(needle, group)) as u32;
                if mask != 0 {
                    // Eight mask bits per 64-bit lane.
                    return i + (mask.trailing_zeros() / 8) as usize;
                }
                i += 4;
            }
        }
    }
    for j in i..len {
        if haystack[j] == target {
            return j;
        }
    }
    len
}

#[cfg(target_arch = "x86_64")]
#[target_feature(enable = "avx2")]
unsafe fn vector_scan_unrolled_u32_avx2(haystack: &[u32], target: u32) -> usize {
    use std::arch::x86_64::*;

    let len = haystack.len();
    let mut i = 0usize;
    unsafe {
        let needle = _mm256_set1_epi32(target as i32);
        if len > 8 {
            if len > 32 {
                // Selects the odd bytes of each 16-bit lane, used to fold the
                // second register pair into the combined mask.
                let lane_select = _mm256_set1_epi16(i16::MIN);
                while i + 32 < len {
                    let base = haystack.as_ptr().add(i);
                    let group1 =
                        _mm256_cmpeq_epi32(needle, _mm256_loadu_si256(base as *const __m256i));
                    let group2 = _mm256_cmpeq_epi32(
                        needle,
                        _mm256_loadu_si256(base.add(8) as *const __m256i),
                    );
                    let group3 = _mm256_cmpeq_epi32(
                        needle,
                        _mm256_loadu_si256(base.add(16) as *const __m256i),
                    );
                    let group4 = _mm256_cmpeq_epi32(
                        needle,
                        _mm256_loadu_si256(base.add(24) as *const __m256i),
                    );
                    // Interleave the four 32-bit comparison results so every
                    // element owns one byte of the combined mask: byte k of a
                    // lane comes from group k+1.
                    let blend13 = _mm256_blend_epi16::<0xAA>(group1, group3);
                    let blend24 = _mm256_blend_epi16::<0xAA>(group2, group4);
                    let mask =
                        _mm256_movemask_epi8(_mm256_blendv_epi8(blend13, blend24, lane_select))
                            as u32;
                    if mask != 0 {
                        let bit = mask.trailing_zeros();
                        let register = (bit % 4) as usize;
                        let lane = (bit / 4) as usize;
                        return i + register * 8 + lane;
                    }
                    i += 32;
                }
            }
            while i + 8 < len {
                let group = _mm256_loadu_si256(haystack.as_ptr().add(i) as *const __m256i);
                let mask = _mm256_movemask_epi8(_mm256_cmpeq_epi32(needle, group)) as u32;
                if mask != 0 {
                    return i + (mask.trailing_zeros() / 4) as usize;
                }
                i += 8;
            }
        }
    }
    for j in i..len {
        if haystack[j] == target {
            return j;
        }
    }
    len
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::ascending;

    #[test]
    fn test_matches_scalar_u32_all_small_lengths() {
        // Covers the sub-group, one-group, and multi-group cases.
        for len in 0..40usize {
            let haystack: Vec<u32> = ascending(len);
            for target in 0..len as u32 + 2 {
                let expected = linear_scan(&haystack, target);
                assert_eq!(
                    vector_scan_u32(&haystack, target),
                    expected,
                    "len={len} target={target}"
                );
                assert_eq!(
                    vector_scan_unrolled_u32(&haystack, target),
                    expected,
                    "unrolled len={len} target={target}"
                );
            }
        }
    }

    #[test]
    fn test_matches_scalar_u64_all_small_lengths() {
        for len in 0..40usize {
            let haystack: Vec<u64> = ascending(len);
            for target in 0..len as u64 + 2 {
                assert_eq!(
                    vector_scan_u64(&haystack, target),
                    linear_scan(&haystack, target),
                    "len={len} target={target}"
                );
            }
        }
    }

    #[test]
    fn test_unrolled_path_past_one_iteration() {
        // Targets beyond the first 32-element iteration exercise the step to
        // the next unrolled block and the fallthrough loops.
        let haystack: Vec<u32> = ascending(100);
        for target in [0u32, 31, 32, 33, 63, 64, 95, 96, 99, 100, 500] {
            assert_eq!(
                vector_scan_unrolled_u32(&haystack, target),
                linear_scan(&haystack, target),
                "target={target}"
            );
        }
    }

    #[test]
    fn test_scan_window_scenario() {
        // Sixteen-element window [100..116): target 107 sits at index 7,
        // target 200 is absent and yields the end position.
        let haystack: Vec<u32> = (100..116).collect();
        assert_eq!(linear_scan(&haystack, 107), 7);
        assert_eq!(vector_scan_u32(&haystack, 107), 7);
        assert_eq!(vector_scan_unrolled_u32(&haystack, 107), 7);

        assert_eq!(linear_scan(&haystack, 200), 16);
        assert_eq!(vector_scan_u32(&haystack, 200), 16);
        assert_eq!(vector_scan_unrolled_u32(&haystack, 200), 16);
    }

    #[test]
    fn test_unsorted_haystack_first_match_wins() {
        let haystack = [9u32, 2, 7, 2, 5, 2, 8, 1, 4, 3, 2];
        assert_eq!(vector_scan_u32(&haystack, 2), 1);
        assert_eq!(vector_scan_unrolled_u32(&haystack, 2), 1);
        assert_eq!(vector_scan_u64(&[9u64, 2, 7, 2, 5], 2), 1);
    }
}
