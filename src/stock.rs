//! The `Stock` entity: identity plus the metrics derived from its history.

use std::fmt;

use chrono::NaiveDate;
use tracing::debug;

use crate::error::{MetricsError, Result};
use crate::metrics::{DatedSeries, DividendSeries, DividendSource, Metrics};

/// Raw data for one stock as supplied by a loader.
///
/// Observations are `(date, value)` pairs in chronological order.
pub trait StockData {
    fn company(&self) -> &str;
    fn symbol(&self) -> &str;
    fn share_prices(&self) -> Vec<(NaiveDate, f64)>;
    fn earnings(&self) -> Vec<(NaiveDate, f64)>;
    fn volumes(&self) -> Vec<(NaiveDate, f64)>;

    /// Dividends per share, if the loader has any.
    fn dividends(&self) -> Option<Vec<(NaiveDate, f64)>> {
        None
    }
}

/// A company's stock and its historical metrics.
///
/// Built once from a loader snapshot and never mutated afterwards.
pub struct Stock {
    company: String,
    symbol: String,
    metrics: Metrics,
    dividends: Box<dyn DividendSource>,
}

impl Stock {
    pub fn new(company: impl Into<String>, symbol: impl AsRef<str>, metrics: Metrics) -> Result<Self> {
        let company = company.into().trim().to_string();
        if company.is_empty() {
            return Err(MetricsError::InvalidIdentity {
                reason: "company name cannot be empty".to_string(),
            });
        }
        let symbol = symbol.as_ref().trim().to_ascii_uppercase();
        if symbol.is_empty() {
            return Err(MetricsError::InvalidIdentity {
                reason: format!("symbol for '{company}' cannot be empty"),
            });
        }

        Ok(Self {
            company,
            symbol,
            metrics,
            dividends: Box::new(DividendSeries::empty()),
        })
    }

    /// Build a stock from everything a loader supplies.
    pub fn from_source(source: &impl StockData) -> Result<Self> {
        let metrics = Metrics::new(
            DatedSeries::from_observations("share price", source.share_prices())?,
            DatedSeries::from_observations("earnings", source.earnings())?,
            DatedSeries::from_observations("volume", source.volumes())?,
        );
        let dividends = match source.dividends() {
            Some(observations) => DividendSeries::from_observations(observations)?,
            None => DividendSeries::empty(),
        };

        let stock = Self::new(source.company(), source.symbol(), metrics)?.with_dividend_source(dividends);
        debug!(
            symbol = %stock.symbol,
            prices = stock.metrics.share_prices().len(),
            earnings = stock.metrics.earnings().len(),
            "built stock"
        );
        Ok(stock)
    }

    /// Replace where dividends per share are read from.
    pub fn with_dividend_source(mut self, source: impl DividendSource + 'static) -> Self {
        self.dividends = Box::new(source);
        self
    }

    pub fn company(&self) -> &str {
        &self.company
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    pub fn share_price(&self, date: NaiveDate) -> Result<f64> {
        self.metrics.share_price(date)
    }

    /// Share price `days` observations before today (`1` = latest).
    pub fn share_price_days_ago(&self, days: usize) -> Result<f64> {
        self.metrics.share_prices().values().value_at_offset(days)
    }

    /// The trailing `days` share prices, oldest first.
    pub fn share_prices_window(&self, days: usize) -> Result<Vec<f64>> {
        self.metrics
            .share_prices()
            .values()
            .interval_at_offsets(days, 0)
            .map(<[f64]>::to_vec)
    }

    pub fn volume(&self, date: NaiveDate) -> Result<f64> {
        self.metrics.volume(date)
    }

    pub fn growth_percentage(&self, start: NaiveDate, end: NaiveDate) -> Result<f64> {
        self.metrics.growth_percentage(start, end)
    }

    pub fn earnings_per_share(&self, start: NaiveDate, end: NaiveDate) -> Result<f64> {
        self.metrics.earnings_per_share(start, end)
    }

    pub fn dividends_per_share(&self, date: NaiveDate) -> Result<f64> {
        self.dividends.dividends_per_share(date)
    }
}

impl fmt::Debug for Stock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stock")
            .field("company", &self.company)
            .field("symbol", &self.symbol)
            .field("metrics", &self.metrics)
            .finish_non_exhaustive()
    }
}
