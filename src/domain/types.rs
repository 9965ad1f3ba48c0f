//! Shared domain types.
//!
//! Outputs are serializable so the CLI can emit them as JSON as well as text.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{MetricsError, Result};

/// Five years of daily observations, the default span of the stock view.
pub const FIVE_YEARS_DAYS: usize = 5 * 365;

/// Date format used in human-readable summaries (`dd/mm/yyyy`).
pub const DISPLAY_DATE_FORMAT: &str = "%d/%m/%Y";

pub fn format_display_date(date: NaiveDate) -> String {
    date.format(DISPLAY_DATE_FORMAT).to_string()
}

/// Request to view one stock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewStockInput {
    pub symbol: String,
}

impl ViewStockInput {
    pub fn new(symbol: impl Into<String>) -> Self {
        Self { symbol: symbol.into() }
    }
}

/// Trailing share-price window of one stock, oldest price first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewStockOutput {
    pub company: String,
    pub symbol: String,
    pub share_prices: Vec<f64>,
}

/// Request to compare two stocks, by company name, over `[start, end]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompareStocksInput {
    pub first_company: String,
    pub second_company: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl CompareStocksInput {
    /// Create a comparison request. `start` must not be after `end`.
    pub fn new(
        first_company: impl Into<String>,
        second_company: impl Into<String>,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Self> {
        if start > end {
            return Err(MetricsError::DateRangeOutOfRange {
                series: "comparison",
                start,
                end,
            });
        }
        Ok(Self {
            first_company: first_company.into(),
            second_company: second_company.into(),
            start,
            end,
        })
    }
}
