//! Shared loading logic used by every subcommand.
//!
//! Keeping this in one place avoids duplicating the workflow:
//! sample history -> `Stock` construction -> published repository
//!
//! The subcommands can then focus on running their use case.

use chrono::{Local, NaiveDate};
use tracing::info;

use crate::config::AppConfig;
use crate::data::generate_universe;
use crate::error::AppError;
use crate::repository::StockRepository;

/// Build every stock of the sample universe and publish it for lookup.
pub fn load_repository(config: &AppConfig) -> Result<StockRepository, AppError> {
    let as_of = config.as_of.unwrap_or_else(today);
    load_repository_as_of(config, as_of)
}

/// Same as [`load_repository`] with an explicit last history date.
pub fn load_repository_as_of(config: &AppConfig, as_of: NaiveDate) -> Result<StockRepository, AppError> {
    config.validate()?;
    let samples = generate_universe(as_of, config.history_days, config.seed)?;
    let repo = StockRepository::from_sources(&samples)?;
    info!(
        stocks = repo.len(),
        history_days = config.history_days,
        %as_of,
        "loaded stock universe"
    );
    Ok(repo)
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}
