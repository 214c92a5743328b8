//! Period aggregation and chart series for the financial dashboard.

pub mod aggregate;
pub mod series;

pub use aggregate::{aggregate, DayBucket};
pub use series::ChartSeries;
