//! Dividend-per-share lookup.
//!
//! Dividends come from their own data source, kept apart from the price,
//! earnings and volume series so a stock can be given a different source
//! without touching its `Metrics`.

use chrono::NaiveDate;

use crate::error::Result;
use crate::metrics::series::DatedSeries;

/// Source of dividends per share as of a date.
pub trait DividendSource: Send + Sync {
    fn dividends_per_share(&self, date: NaiveDate) -> Result<f64>;
}

/// Dividends per share stored as a dated series (forward-snap lookup).
#[derive(Debug, Clone, PartialEq)]
pub struct DividendSeries {
    series: DatedSeries,
}

impl DividendSeries {
    pub const NAME: &'static str = "dividends";

    pub fn new(series: DatedSeries) -> Self {
        Self { series }
    }

    pub fn from_observations(observations: impl IntoIterator<Item = (NaiveDate, f64)>) -> Result<Self> {
        DatedSeries::from_observations(Self::NAME, observations).map(Self::new)
    }

    /// A stock with no dividend history. Every lookup fails with no data.
    pub fn empty() -> Self {
        Self::new(DatedSeries::empty(Self::NAME))
    }
}

impl DividendSource for DividendSeries {
    fn dividends_per_share(&self, date: NaiveDate) -> Result<f64> {
        self.series.value_at_date(date)
    }
}
