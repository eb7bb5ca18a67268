//! Cold-cache sweep driver.
//!
//! Both sweeps time batches of queries against a window of a large
//! identity-valued backing array. The window start is drawn from OS
//! randomness every trial so repeated trials never replay the same physical
//! access pattern, while query construction stays reproducible under fixed
//! seeds. Elapsed time is bracketed with [`raw_timestamp`] and averaged over
//! the trials of each configuration.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::bench::table::LatencyTable;
use crate::clock::raw_timestamp;
use crate::data::{ascending, random_offsets, shuffled_offsets};
use crate::element::Element;
use crate::error::{ColdfindError, Result};

/// Parameters shared by both sweep flavors.
#[derive(Debug, Clone)]
pub struct SweepConfig {
    /// Exclusive upper bound of the element-count doubling sweep.
    pub max_elements: usize,
    /// Trials averaged per configuration.
    pub trials: usize,
    /// Backing array length; must exceed every swept element count so a
    /// window never runs off the end.
    pub raw_size: usize,
}

impl SweepConfig {
    pub fn new(max_elements: usize) -> Self {
        SweepConfig {
            max_elements,
            trials: 10,
            raw_size: 1 << 27,
        }
    }

    pub fn with_trials(mut self, trials: usize) -> Self {
        self.trials = trials;
        self
    }

    pub fn with_raw_size(mut self, raw_size: usize) -> Self {
        self.raw_size = raw_size;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.trials == 0 {
            return Err(ColdfindError::invalid_argument("trials must be nonzero"));
        }
        if self.raw_size <= self.max_elements {
            return Err(ColdfindError::invalid_argument(format!(
                "backing array ({} elements) must be larger than max_elements ({})",
                self.raw_size, self.max_elements
            )));
        }
        Ok(())
    }
}

/// Sweep a linear-scan strategy under cold-cache conditions.
///
/// Element counts double from 8 up to `max_elements` (exclusive); query
/// counts double from 1 up to 8. The query batch is the identity sequence
/// shuffled under a fixed seed, so every query is present in the window and
/// the strategy's result can be checked against the identity oracle. A
/// mismatch is reported on stderr and measurement continues.
pub fn find_sweep<T, F>(config: &SweepConfig, find: F) -> Result<LatencyTable>
where
    T: Element,
    F: Fn(&[T], T) -> usize,
{
    config.validate()?;

    let raw: Vec<T> = ascending(config.raw_size);
    let mut window_rng = StdRng::from_os_rng();
    let mut query_rng = StdRng::seed_from_u64(0);
    let mut table = LatencyTable::new();

    let mut element_count = 8usize;
    while element_count < config.max_elements {
        let queries: Vec<T> = shuffled_offsets(element_count, &mut query_rng);

        let mut query_count = 1usize;
        while query_count < 8 {
            let mut total_time = 0u64;
            for _ in 0..config.trials {
                let window_start = window_rng.random_range(0..=config.raw_size - element_count);
                let window = &raw[window_start..window_start + element_count];

                let start = raw_timestamp();
                let mut found = 0usize;
                for query in &queries[..query_count] {
                    let target = T::from_offset(query.offset() + window_start as u64);
                    let position = std::hint::black_box(find(window, target));
                    if position + window_start == target.offset() as usize {
                        found += 1;
                    }
                }
                let end = raw_timestamp();

                if found != query_count {
                    eprintln!(
                        "find sweep: {found} of {query_count} queries verified at \
                         element_count={element_count}, search function is broken"
                    );
                }
                total_time += end - start;
            }
            table.record(element_count, query_count, total_time / config.trials as u64);
            query_count *= 2;
        }
        element_count *= 2;
    }

    Ok(table)
}

/// Sweep a lower-bound strategy under cold-cache conditions.
///
/// Same skeleton as [`find_sweep`], with the query schedule of the sorted
/// case: query counts grow by 16x up to the element count, and each trial
/// regenerates its batch from a trial-seeded generator with offsets uniform
/// in `[0, element_count]`. On the identity array the insertion point of
/// `window_start + offset` is exactly `offset`, which is the oracle.
pub fn lower_bound_sweep<T, F>(config: &SweepConfig, search: F) -> Result<LatencyTable>
where
    T: Element,
    F: Fn(&[T], T) -> usize,
{
    config.validate()?;

    let raw: Vec<T> = ascending(config.raw_size);
    let mut window_rng = StdRng::from_os_rng();
    let mut table = LatencyTable::new();

    let mut element_count = 8usize;
    while element_count < config.max_elements {
        let mut query_count = 1usize;
        while query_count < element_count {
            let mut total_time = 0u64;
            for trial in 0..config.trials {
                let mut query_rng = StdRng::seed_from_u64(trial as u64);
                let queries: Vec<T> =
                    random_offsets(query_count, element_count as u64, &mut query_rng);
                let window_start = window_rng.random_range(0..=config.raw_size - element_count);
                let window = &raw[window_start..window_start + element_count];

                let start = raw_timestamp();
                let mut found = 0usize;
                for query in &queries {
                    let target = T::from_offset(query.offset() + window_start as u64);
                    let position = std::hint::black_box(search(window, target));
                    if position + window_start == target.offset() as usize {
                        found += 1;
                    }
                }
                let end = raw_timestamp();

                if found != query_count {
                    eprintln!(
                        "lower-bound sweep: {found} of {query_count} queries verified at \
                         element_count={element_count}, search function is broken"
                    );
                }
                total_time += end - start;
            }
            table.record(element_count, query_count, total_time / config.trials as u64);
            query_count *= 16;
        }
        element_count *= 2;
    }

    Ok(table)
}
