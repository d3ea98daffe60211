//! Metric data: static place tables, series storage, and aggregation.

pub mod places;
mod series;

pub use places::{Place, COUNTRIES, REGIONS};
pub use series::{aggregate, generate_sample_table, per_capita, MetricTable, PlaceSeries};
