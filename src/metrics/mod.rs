//! Metric storage and the calculations derived from it.
//!
//! - `series`: offset- and date-addressed observation vectors
//! - `stock_metrics`: growth percentage and earnings per share
//! - `dividends`: swappable dividend-per-share source

pub mod dividends;
pub mod series;
pub mod stock_metrics;

pub use dividends::{DividendSeries, DividendSource};
pub use series::{DatedSeries, MetricValues};
pub use stock_metrics::{Metrics, PERCENTAGE};
