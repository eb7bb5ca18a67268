//! Latency tables accumulated by the sweeps and the comparison reporter.

use std::collections::BTreeMap;
use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::error::{ColdfindError, Result};

/// Average elapsed time per `(element_count, query_count)` cell for one
/// search strategy at one element width.
///
/// Cell values are the trial-averaged total time for the whole query batch;
/// rendering divides by the query count to show per-query cost.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LatencyTable {
    cells: BTreeMap<usize, BTreeMap<usize, u64>>,
}

impl LatencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one cell. A later write to the same cell overwrites.
    pub fn record(&mut self, element_count: usize, query_count: usize, avg_time: u64) {
        self.cells
            .entry(element_count)
            .or_default()
            .insert(query_count, avg_time);
    }

    pub fn get(&self, element_count: usize, query_count: usize) -> Option<u64> {
        self.cells.get(&element_count)?.get(&query_count).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Element counts present in the table, ascending.
    pub fn element_counts(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells.keys().copied()
    }

    /// Render the table as comma-separated text.
    ///
    /// The header lists the query counts of the widest row (the largest
    /// element count sweeps the most query counts); each following row holds
    /// the element count and the average per-query times.
    pub fn write_csv<W: Write>(&self, out: &mut W) -> Result<()> {
        let Some(widest) = self.cells.values().next_back() else {
            return Ok(());
        };

        let header: Vec<String> = widest.keys().map(|q| q.to_string()).collect();
        writeln!(out, "query count, {}", header.join(", "))?;

        for (element_count, row) in &self.cells {
            let cells: Vec<String> = row
                .iter()
                .map(|(query_count, time)| format!("{}", *time as f64 / *query_count as f64))
                .collect();
            writeln!(out, "{}, {}", element_count, cells.join(", "))?;
        }
        writeln!(out)?;
        Ok(())
    }
}

/// One strategy's latency tables across element byte-widths.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WidthReport {
    tables: BTreeMap<usize, LatencyTable>,
}

impl WidthReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, width: usize, table: LatencyTable) {
        self.tables.insert(width, table);
    }

    pub fn get(&self, width: usize) -> Option<&LatencyTable> {
        self.tables.get(&width)
    }

    pub fn widths(&self) -> impl Iterator<Item = usize> + '_ {
        self.tables.keys().copied()
    }

    pub fn write_csv<W: Write>(&self, out: &mut W) -> Result<()> {
        for (width, table) in &self.tables {
            writeln!(out, "element size = {width}")?;
            table.write_csv(out)?;
        }
        Ok(())
    }

    /// Build the per-cell ratio report `self / other`.
    ///
    /// Every key of `self` must be present in `other`; a missing width,
    /// element count, or query count is an error rather than a silently
    /// zero-valued cell.
    pub fn compare(&self, other: &WidthReport) -> Result<RatioReport> {
        let mut report = RatioReport::default();
        for (width, table) in &self.tables {
            let other_table = other.tables.get(width).ok_or_else(|| {
                ColdfindError::report(format!("element size {width} missing from second report"))
            })?;

            let mut ratio_table = RatioTable::default();
            for (element_count, row) in &table.cells {
                for (query_count, time) in row {
                    let other_time =
                        other_table
                            .get(*element_count, *query_count)
                            .ok_or_else(|| {
                                ColdfindError::report(format!(
                                    "cell ({element_count}, {query_count}) at element size \
                                     {width} missing from second report"
                                ))
                            })?;
                    // The microsecond clock can legitimately read zero on
                    // tiny workloads.
                    let ratio = if other_time == 0 {
                        if *time == 0 { 1.0 } else { f64::INFINITY }
                    } else {
                        *time as f64 / other_time as f64
                    };
                    ratio_table.record(*element_count, *query_count, ratio);
                }
            }
            report.tables.insert(*width, ratio_table);
        }
        Ok(report)
    }
}

/// Per-cell speedup/slowdown ratios at one element width.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatioTable {
    cells: BTreeMap<usize, BTreeMap<usize, f64>>,
}

impl RatioTable {
    fn record(&mut self, element_count: usize, query_count: usize, ratio: f64) {
        self.cells
            .entry(element_count)
            .or_default()
            .insert(query_count, ratio);
    }

    pub fn get(&self, element_count: usize, query_count: usize) -> Option<f64> {
        self.cells.get(&element_count)?.get(&query_count).copied()
    }

    pub fn write_csv<W: Write>(&self, out: &mut W) -> Result<()> {
        let Some(widest) = self.cells.values().next_back() else {
            return Ok(());
        };

        let header: Vec<String> = widest.keys().map(|q| q.to_string()).collect();
        writeln!(out, "query count, {}", header.join(", "))?;

        for (element_count, row) in &self.cells {
            let cells: Vec<String> = row.values().map(|ratio| format!("{ratio}")).collect();
            writeln!(out, "{}, {}", element_count, cells.join(", "))?;
        }
        writeln!(out)?;
        Ok(())
    }
}

/// Ratio tables across element widths, produced by [`WidthReport::compare`].
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatioReport {
    tables: BTreeMap<usize, RatioTable>,
}

impl RatioReport {
    pub fn get(&self, width: usize) -> Option<&RatioTable> {
        self.tables.get(&width)
    }

    pub fn write_csv<W: Write>(&self, out: &mut W) -> Result<()> {
        for (width, table) in &self.tables {
            writeln!(out, "element size = {width}")?;
            table.write_csv(out)?;
        }
        Ok(())
    }

    /// True when every cell ratio satisfies `predicate`.
    pub fn all_cells<F: Fn(f64) -> bool>(&self, predicate: F) -> bool {
        self.tables
            .values()
            .flat_map(|t| t.cells.values())
            .flat_map(|row| row.values())
            .all(|r| predicate(*r))
    }
}
