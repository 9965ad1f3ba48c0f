//! Deterministic synthetic market history.
//!
//! Stands in for a real loader: every company in [`UNIVERSE`] gets a daily
//! close on weekdays only (weekends are gaps, so date lookups snap forward),
//! daily volume and quarterly earnings. Dividends per share are a daily
//! series holding the quarterly dividend in force on each trading day
//! (`0.0` for companies that pay none). The same seed, symbol and calendar
//! always give the same data.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use rand::prelude::*;
use rand::rngs::StdRng;
use rand_distr::Normal;

use crate::error::AppError;
use crate::stock::StockData;

/// Trading days per year, used to scale annual drift and volatility.
const TRADING_DAYS_PER_YEAR: f64 = 252.0;

/// Static description of a sample company.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompanyProfile {
    pub company: &'static str,
    pub symbol: &'static str,
    pub start_price: f64,
    /// Annualized drift of the log price.
    pub drift: f64,
    /// Annualized volatility of the log price.
    pub volatility: f64,
    pub base_volume: f64,
    /// Typical quarterly earnings per share.
    pub quarterly_earnings: f64,
    /// Quarterly dividend per share, if the company pays one.
    pub quarterly_dividend: Option<f64>,
}

pub const UNIVERSE: [CompanyProfile; 6] = [
    CompanyProfile {
        company: "Apple Inc.",
        symbol: "AAPL",
        start_price: 95.0,
        drift: 0.18,
        volatility: 0.28,
        base_volume: 60_000_000.0,
        quarterly_earnings: 1.45,
        quarterly_dividend: Some(0.24),
    },
    CompanyProfile {
        company: "Microsoft Corporation",
        symbol: "MSFT",
        start_price: 180.0,
        drift: 0.16,
        volatility: 0.25,
        base_volume: 25_000_000.0,
        quarterly_earnings: 2.6,
        quarterly_dividend: Some(0.68),
    },
    CompanyProfile {
        company: "Alphabet Inc.",
        symbol: "GOOGL",
        start_price: 70.0,
        drift: 0.14,
        volatility: 0.30,
        base_volume: 30_000_000.0,
        quarterly_earnings: 1.5,
        quarterly_dividend: None,
    },
    CompanyProfile {
        company: "The Coca-Cola Company",
        symbol: "KO",
        start_price: 45.0,
        drift: 0.05,
        volatility: 0.15,
        base_volume: 13_000_000.0,
        quarterly_earnings: 0.65,
        quarterly_dividend: Some(0.46),
    },
    CompanyProfile {
        company: "Tesla, Inc.",
        symbol: "TSLA",
        start_price: 60.0,
        drift: 0.25,
        volatility: 0.60,
        base_volume: 100_000_000.0,
        quarterly_earnings: 0.7,
        quarterly_dividend: None,
    },
    CompanyProfile {
        company: "Johnson & Johnson",
        symbol: "JNJ",
        start_price: 140.0,
        drift: 0.04,
        volatility: 0.16,
        base_volume: 7_000_000.0,
        quarterly_earnings: 2.5,
        quarterly_dividend: Some(1.19),
    },
];

/// One generated stock history.
#[derive(Debug, Clone)]
pub struct SampleStock {
    pub company: String,
    pub symbol: String,
    pub prices: Vec<(NaiveDate, f64)>,
    pub earnings: Vec<(NaiveDate, f64)>,
    pub volumes: Vec<(NaiveDate, f64)>,
    /// Quarterly dividend in force on every trading day.
    pub dividends: Vec<(NaiveDate, f64)>,
}

impl StockData for SampleStock {
    fn company(&self) -> &str {
        &self.company
    }

    fn symbol(&self) -> &str {
        &self.symbol
    }

    fn share_prices(&self) -> Vec<(NaiveDate, f64)> {
        self.prices.clone()
    }

    fn earnings(&self) -> Vec<(NaiveDate, f64)> {
        self.earnings.clone()
    }

    fn volumes(&self) -> Vec<(NaiveDate, f64)> {
        self.volumes.clone()
    }

    fn dividends(&self) -> Option<Vec<(NaiveDate, f64)>> {
        Some(self.dividends.clone())
    }
}

/// Generate every company in [`UNIVERSE`].
pub fn generate_universe(as_of: NaiveDate, trading_days: usize, seed: u64) -> Result<Vec<SampleStock>, AppError> {
    UNIVERSE
        .iter()
        .map(|profile| generate_stock(profile, as_of, trading_days, seed))
        .collect()
}

/// Generate `trading_days` weekdays of history ending on or before `as_of`.
pub fn generate_stock(
    profile: &CompanyProfile,
    as_of: NaiveDate,
    trading_days: usize,
    seed: u64,
) -> Result<SampleStock, AppError> {
    if trading_days == 0 {
        return Err(AppError::usage("History length must be > 0 trading days."));
    }
    if !(profile.start_price.is_finite() && profile.start_price > 0.0) {
        return Err(AppError::new(4, format!("Invalid start price for {}.", profile.symbol)));
    }
    if !(profile.volatility.is_finite() && profile.volatility >= 0.0) {
        return Err(AppError::new(4, format!("Invalid volatility for {}.", profile.symbol)));
    }

    let calendar = trading_calendar(as_of, trading_days)?;
    let mut rng = StdRng::seed_from_u64(sample_seed(seed, profile.symbol));
    let normal = Normal::new(0.0, 1.0)
        .map_err(|e| AppError::new(4, format!("Noise distribution error: {e}")))?;

    let dt = 1.0 / TRADING_DAYS_PER_YEAR;
    let step_drift = (profile.drift - 0.5 * profile.volatility * profile.volatility) * dt;
    let step_vol = profile.volatility * dt.sqrt();

    let mut prices = Vec::with_capacity(calendar.len());
    let mut volumes = Vec::with_capacity(calendar.len());
    let mut earnings = Vec::new();
    let mut dividends = Vec::with_capacity(calendar.len());

    let mut price = profile.start_price;
    let mut dividend = profile.quarterly_dividend.unwrap_or(0.0);

    for (i, &date) in calendar.iter().enumerate() {
        if i > 0 {
            let z: f64 = normal.sample(&mut rng);
            price *= (step_drift + step_vol * z).exp();
        }
        prices.push((date, round_cents(price)));

        let z: f64 = normal.sample(&mut rng);
        volumes.push((date, (profile.base_volume * (0.3 * z).exp()).round()));
        dividends.push((date, round_cents(dividend)));

        if is_quarter_end(date) {
            let z: f64 = normal.sample(&mut rng);
            earnings.push((date, round_cents(profile.quarterly_earnings * (1.0 + 0.1 * z))));
            // Payers raise the dividend a little after the December payout.
            if date.month() == 12 {
                dividend *= 1.05;
            }
        }
    }

    Ok(SampleStock {
        company: profile.company.to_string(),
        symbol: profile.symbol.to_string(),
        prices,
        earnings,
        volumes,
        dividends,
    })
}

/// The last `trading_days` weekdays on or before `as_of`, oldest first.
pub fn trading_calendar(as_of: NaiveDate, trading_days: usize) -> Result<Vec<NaiveDate>, AppError> {
    let mut days = Vec::with_capacity(trading_days);
    let mut date = as_of;
    while days.len() < trading_days {
        if !matches!(date.weekday(), Weekday::Sat | Weekday::Sun) {
            days.push(date);
        }
        date = date
            .checked_sub_signed(Duration::days(1))
            .ok_or_else(|| AppError::usage("History reaches before the earliest supported date."))?;
    }
    days.reverse();
    Ok(days)
}

/// Last weekday of March, June, September or December.
fn is_quarter_end(date: NaiveDate) -> bool {
    let next_weekday = match date.weekday() {
        Weekday::Fri => date + Duration::days(3),
        Weekday::Sat => date + Duration::days(2),
        _ => date + Duration::days(1),
    };
    date.month() % 3 == 0 && next_weekday.month() != date.month()
}

fn sample_seed(seed: u64, symbol: &str) -> u64 {
    let mut hasher = DefaultHasher::new();
    seed.hash(&mut hasher);
    symbol.hash(&mut hasher);
    hasher.finish()
}

fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
