//! Derived metrics for one stock: growth percentage and earnings per share.

use chrono::NaiveDate;

use crate::error::{MetricsError, Result};
use crate::metrics::series::DatedSeries;

/// Multiplier turning a ratio into a percentage.
pub const PERCENTAGE: f64 = 100.0;

/// Price, earnings and volume series of a single stock.
///
/// Nothing is cached: every derived value is recomputed from the series.
#[derive(Debug, Clone, PartialEq)]
pub struct Metrics {
    share_prices: DatedSeries,
    earnings: DatedSeries,
    volumes: DatedSeries,
}

impl Metrics {
    pub fn new(share_prices: DatedSeries, earnings: DatedSeries, volumes: DatedSeries) -> Self {
        Self {
            share_prices,
            earnings,
            volumes,
        }
    }

    pub fn share_prices(&self) -> &DatedSeries {
        &self.share_prices
    }

    pub fn earnings(&self) -> &DatedSeries {
        &self.earnings
    }

    pub fn volumes(&self) -> &DatedSeries {
        &self.volumes
    }

    /// Share price on `date`, or on the next date with a price.
    pub fn share_price(&self, date: NaiveDate) -> Result<f64> {
        self.share_prices.value_at_date(date)
    }

    /// Traded volume on `date`, or on the next date with a volume.
    pub fn volume(&self, date: NaiveDate) -> Result<f64> {
        self.volumes.value_at_date(date)
    }

    /// Start price as a percentage of end price: `price(start) * 100 / price(end)`.
    ///
    /// Both dates snap forward to the next traded day.
    pub fn growth_percentage(&self, start: NaiveDate, end: NaiveDate) -> Result<f64> {
        let start_price = self.share_prices.value_at_date(start)?;
        let end_price = self.share_prices.value_at_date(end)?;
        checked_ratio("growth percentage", start_price * PERCENTAGE, end_price)
    }

    /// Earnings dated in `[start, end]` divided by the latest share price.
    ///
    /// The divisor is the most recent price in the whole history, not the
    /// price at `end`.
    pub fn earnings_per_share(&self, start: NaiveDate, end: NaiveDate) -> Result<f64> {
        let total: f64 = self.earnings.interval_between(start, end)?.iter().sum();
        let latest_price = self.share_prices.latest()?;
        checked_ratio("earnings per share", total, latest_price)
    }
}

fn checked_ratio(quantity: &'static str, numerator: f64, denominator: f64) -> Result<f64> {
    if denominator == 0.0 {
        return Err(MetricsError::DivisionByZero { quantity });
    }
    let value = numerator / denominator;
    if !value.is_finite() {
        return Err(MetricsError::NonFiniteResult { quantity });
    }
    Ok(value)
}
