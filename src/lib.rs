//! `stock-metrics` library crate.
//!
//! The binary (`stocks`) is a thin wrapper around this library so that:
//!
//! - core logic is testable without spawning processes
//! - the metric layer can be reused with other data sources
//! - code stays easy to navigate as the project grows

pub mod app;
pub mod cli;
pub mod config;
pub mod data;
pub mod domain;
pub mod error;
pub mod metrics;
pub mod plot;
pub mod report;
pub mod repository;
pub mod stock;
pub mod usecase;

pub use error::{ErrorKind, MetricsError};
pub use metrics::{DatedSeries, DividendSeries, DividendSource, MetricValues, Metrics};
pub use repository::StockRepository;
pub use stock::{Stock, StockData};
pub use usecase::{CompareStocksInteractor, StockLookup, ViewStockInteractor};
