//! Browsing helpers over a dataset snapshot: catalog filtering, side-by-side
//! comparison and aggregate statistics. None of them estimate grant chances.

pub mod compare;
pub mod filter;
pub mod stats;

pub use compare::{compare, ComparisonSummary};
pub use filter::{filter_catalog, CatalogFilter};
pub use stats::{filter_options, statistics, DatasetStatistics, FilterOptions, ScoreRange, Share, ThresholdStatistics};
