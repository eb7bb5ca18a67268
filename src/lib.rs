//! # Coldfind
//!
//! Cold-cache microbenchmarks for array search strategies.
//!
//! The harness measures the per-query latency of searching a window of a
//! large identity-valued backing array, comparing library baselines against
//! hand-tuned alternatives:
//!
//! - a scalar linear scan
//! - an AVX2 compare-and-movemask linear scan (plus a 4x unrolled variant)
//! - a branch-lean quaternary lower-bound search
//!
//! Windows start at a random offset into a backing array sized well past CPU
//! cache capacity, so every trial touches cold memory.

pub mod bench;
pub mod cli;
pub mod clock;
pub mod data;
pub mod element;
pub mod error;
pub mod search;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
