//! Synthetic data consumed by the cold-cache sweeps.
//!
//! Generators take an explicit random source so callers choose the seeding
//! policy: a fixed seed where query batches must be reproducible, OS entropy
//! where the point is to defeat prefetching (window starts).

use rand::Rng;
use rand::seq::SliceRandom;

use crate::element::Element;

/// Ascending identity sequence: the element at position `i` equals `i`.
///
/// Doubles as the cold-cache backing array and, in the find-style sweep, as
/// the source of sorted query values.
pub fn ascending<T: Element>(count: usize) -> Vec<T> {
    (0..count as u64).map(T::from_offset).collect()
}

/// `count` offsets drawn uniformly from `[0, max_offset]` inclusive.
pub fn random_offsets<T, R>(count: usize, max_offset: u64, rng: &mut R) -> Vec<T>
where
    T: Element,
    R: Rng,
{
    (0..count)
        .map(|_| T::from_offset(rng.random_range(0..=max_offset)))
        .collect()
}

/// The identity sequence `[0, count)` shuffled into a random visit order.
pub fn shuffled_offsets<T, R>(count: usize, rng: &mut R) -> Vec<T>
where
    T: Element,
    R: Rng,
{
    let mut offsets = ascending::<T>(count);
    offsets.shuffle(rng);
    offsets
}
