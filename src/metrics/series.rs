//! Time-indexed metric storage.
//!
//! A metric (share price, earnings, volume, dividends) is one chronological
//! vector of `f64` observations, oldest first. Two ways to address it:
//!
//! - **offset**: "days before today", where offset `d` maps to index `len - d`
//!   (so `d = 1` is the most recent value and `d = 0` is one past the end)
//! - **date**: a calendar date; a date without an observation snaps forward
//!   to the next date that has one
//!
//! Both read the same storage. `DatedSeries` only adds the date index.

use chrono::NaiveDate;

use crate::error::{MetricsError, Result};

/// Ordered observations of one metric, addressed by offset.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MetricValues {
    values: Vec<f64>,
}

impl MetricValues {
    pub fn new(values: Vec<f64>) -> Self {
        Self { values }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    /// Value `day` days before today.
    ///
    /// `day = 1` is the latest observation and `day = len` the oldest.
    pub fn value_at_offset(&self, day: usize) -> Result<f64> {
        self.day_to_index(day)
            .and_then(|index| self.values.get(index).copied())
            .ok_or(MetricsError::OffsetOutOfRange {
                offset: day,
                len: self.len(),
            })
    }

    /// Values in `[start_day, end_day)`, oldest first.
    ///
    /// `start_day` is the inclusive bound further in the past, `end_day` the
    /// exclusive bound nearer to today, so `start_day >= end_day`.
    pub fn interval_at_offsets(&self, start_day: usize, end_day: usize) -> Result<&[f64]> {
        let out_of_range = || MetricsError::IntervalOutOfRange {
            start_day,
            end_day,
            len: self.len(),
        };

        let start_index = self.day_to_index(start_day).ok_or_else(out_of_range)?;
        let end_index = self.day_to_index(end_day).ok_or_else(out_of_range)?;
        if start_index > end_index {
            return Err(out_of_range());
        }

        Ok(&self.values[start_index..end_index])
    }

    pub fn latest(&self) -> Result<f64> {
        self.values.last().copied().ok_or(MetricsError::EmptySeries)
    }

    fn day_to_index(&self, day: usize) -> Option<usize> {
        self.values.len().checked_sub(day)
    }
}

/// A metric whose observations are also keyed by calendar date.
#[derive(Debug, Clone, PartialEq)]
pub struct DatedSeries {
    name: &'static str,
    dates: Vec<NaiveDate>,
    values: MetricValues,
}

impl DatedSeries {
    /// Build a series from `(date, value)` observations.
    ///
    /// Dates must be strictly increasing and every value finite.
    pub fn from_observations(
        name: &'static str,
        observations: impl IntoIterator<Item = (NaiveDate, f64)>,
    ) -> Result<Self> {
        let (dates, values): (Vec<NaiveDate>, Vec<f64>) = observations.into_iter().unzip();

        if let Some(index) = values.iter().position(|v| !v.is_finite()) {
            return Err(MetricsError::InvalidSeries {
                series: name,
                reason: format!("value at {} is not finite", dates[index]),
            });
        }
        if let Some(index) = dates.windows(2).position(|w| w[0] >= w[1]) {
            return Err(MetricsError::InvalidSeries {
                series: name,
                reason: format!(
                    "dates are not strictly increasing ({} is followed by {})",
                    dates[index],
                    dates[index + 1]
                ),
            });
        }

        Ok(Self {
            name,
            dates,
            values: MetricValues::new(values),
        })
    }

    pub fn empty(name: &'static str) -> Self {
        Self {
            name,
            dates: Vec::new(),
            values: MetricValues::default(),
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn values(&self) -> &MetricValues {
        &self.values
    }

    pub fn first_date(&self) -> Option<NaiveDate> {
        self.dates.first().copied()
    }

    pub fn last_date(&self) -> Option<NaiveDate> {
        self.dates.last().copied()
    }

    /// Value on `date`, or on the earliest later date with an observation.
    pub fn value_at_date(&self, date: NaiveDate) -> Result<f64> {
        let index = self.dates.partition_point(|d| *d < date);
        self.values
            .as_slice()
            .get(index)
            .copied()
            .ok_or(MetricsError::NoDataAvailable {
                series: self.name,
                date,
            })
    }

    pub fn latest(&self) -> Result<f64> {
        self.values.latest()
    }

    /// Offsets `[start_day, end_day)` covering every observation dated in
    /// `[start, end]` (both inclusive).
    ///
    /// Fails when `start > end` or the range lies entirely before or after the
    /// covered history. A range inside the history with no observations
    /// resolves to an empty interval.
    pub fn offsets_between(&self, start: NaiveDate, end: NaiveDate) -> Result<(usize, usize)> {
        let (Some(first), Some(last)) = (self.first_date(), self.last_date()) else {
            return Err(MetricsError::EmptySeries);
        };
        if start > end || start > last || end < first {
            return Err(MetricsError::DateRangeOutOfRange {
                series: self.name,
                start,
                end,
            });
        }

        let len = self.len();
        let start_index = self.dates.partition_point(|d| *d < start);
        let end_index = self.dates.partition_point(|d| *d <= end);
        Ok((len - start_index, len - end_index))
    }

    /// Observations dated in `[start, end]`, oldest first.
    pub fn interval_between(&self, start: NaiveDate, end: NaiveDate) -> Result<&[f64]> {
        let (start_day, end_day) = self.offsets_between(start, end)?;
        self.values.interval_at_offsets(start_day, end_day)
    }
}
