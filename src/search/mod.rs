//! Search strategies under measurement.
//!
//! Every strategy has the shape `fn(haystack: &[T], target: T) -> usize`. The
//! linear family returns `haystack.len()` when the target is absent; the
//! lower-bound family returns the insertion point that preserves sort order.

pub mod lower_bound;
pub mod scalar;
pub mod vector;

// Re-export the strategy entry points
pub use lower_bound::quaternary_lower_bound;
pub use scalar::{linear_scan, std_find, std_lower_bound};
pub use vector::{vector_scan_u32, vector_scan_u64, vector_scan_unrolled_u32};
