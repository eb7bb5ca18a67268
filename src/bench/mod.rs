//! Cold-cache benchmark driver and result tables.

pub mod sweep;
pub mod table;

pub use sweep::{SweepConfig, find_sweep, lower_bound_sweep};
pub use table::{LatencyTable, RatioReport, RatioTable, WidthReport};
