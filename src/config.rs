//! Runtime configuration for the `stocks` binary.
//!
//! Values come from the environment (a `.env` file is loaded first when
//! present); command-line flags override them afterwards.

use chrono::NaiveDate;

use crate::domain::FIVE_YEARS_DAYS;
use crate::error::AppError;

pub const ENV_WINDOW_DAYS: &str = "STOCKS_WINDOW_DAYS";
pub const ENV_HISTORY_DAYS: &str = "STOCKS_HISTORY_DAYS";
pub const ENV_SEED: &str = "STOCKS_SEED";
pub const ENV_AS_OF: &str = "STOCKS_AS_OF";

/// Trading days of sample history generated per stock.
pub const DEFAULT_HISTORY_DAYS: usize = 2200;
pub const DEFAULT_SEED: u64 = 42;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Trailing prices shown by the stock view.
    pub window_days: usize,
    /// Trading days of history loaded for every stock.
    pub history_days: usize,
    pub seed: u64,
    /// Last date of the loaded history. `None` means today.
    pub as_of: Option<NaiveDate>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            window_days: FIVE_YEARS_DAYS,
            history_days: DEFAULT_HISTORY_DAYS,
            seed: DEFAULT_SEED,
            as_of: None,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any key/value source, falling back to defaults.
    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let defaults = Self::default();
        let config = Self {
            window_days: parse_var(&get, ENV_WINDOW_DAYS)?.unwrap_or(defaults.window_days),
            history_days: parse_var(&get, ENV_HISTORY_DAYS)?.unwrap_or(defaults.history_days),
            seed: parse_var(&get, ENV_SEED)?.unwrap_or(defaults.seed),
            as_of: get(ENV_AS_OF)
                .map(|raw| parse_date(raw.trim()).map_err(|e| AppError::usage(format!("{ENV_AS_OF}: {e}"))))
                .transpose()?,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if self.window_days == 0 {
            return Err(AppError::usage("View window must be at least one day."));
        }
        if self.history_days < self.window_days {
            return Err(AppError::usage(format!(
                "History of {} days is shorter than the {}-day view window.",
                self.history_days, self.window_days
            )));
        }
        Ok(())
    }
}

/// Parse an ISO `YYYY-MM-DD` date.
pub fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|e| format!("invalid date '{raw}' (expected YYYY-MM-DD): {e}"))
}

fn parse_var<T>(get: &impl Fn(&str) -> Option<String>, key: &str) -> Result<Option<T>, AppError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    let Some(raw) = get(key) else {
        return Ok(None);
    };
    raw.trim()
        .parse()
        .map(Some)
        .map_err(|e| AppError::usage(format!("Invalid {key}='{raw}': {e}")))
}
