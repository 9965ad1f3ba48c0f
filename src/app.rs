//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - installs logging
//! - resolves configuration (environment, then CLI flags)
//! - loads the stock universe
//! - runs the requested use case and prints the result

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Command, CompareArgs, ViewArgs};
use crate::config::AppConfig;
use crate::domain::{CompareStocksInput, ViewStockInput};
use crate::error::AppError;
use crate::report::{ConsolePresenter, ViewFormat, format_company_list};
use crate::repository::StockRepository;
use crate::usecase::{CompareStocksInteractor, ViewStockInteractor};

pub mod pipeline;

/// Entry point for the `stocks` binary.
pub fn run() -> Result<(), AppError> {
    init_tracing();

    let cli = Cli::parse();
    let config = resolve_config(AppConfig::from_env()?, &cli)?;
    let repo = pipeline::load_repository(&config)?;

    let output = match &cli.command {
        Command::List => handle_list(&repo),
        Command::View(args) => handle_view(&repo, &config, args)?,
        Command::Compare(args) => handle_compare(&repo, args)?,
    };
    print!("{output}");
    Ok(())
}

/// Logs go to stderr so stdout only carries reports.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    // A second initialization (e.g. from tests) is harmless.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Apply CLI overrides on top of the environment config.
pub fn resolve_config(mut config: AppConfig, cli: &Cli) -> Result<AppConfig, AppError> {
    if let Some(seed) = cli.seed {
        config.seed = seed;
    }
    if let Some(history_days) = cli.history_days {
        config.history_days = history_days;
    }
    if let Some(as_of) = cli.as_of {
        config.as_of = Some(as_of);
    }
    if let Command::View(ViewArgs {
        window: Some(window), ..
    }) = &cli.command
    {
        config.window_days = *window;
    }
    config.validate()?;
    Ok(config)
}

fn handle_list(repo: &StockRepository) -> String {
    let rows: Vec<(String, String)> = repo
        .stocks()
        .map(|s| (s.symbol().to_string(), s.company().to_string()))
        .collect();
    format_company_list(&rows)
}

fn handle_view(repo: &StockRepository, config: &AppConfig, args: &ViewArgs) -> Result<String, AppError> {
    let format = if args.json {
        ViewFormat::Json
    } else {
        ViewFormat::Text {
            plot: !args.no_plot,
            width: args.width,
            height: args.height,
        }
    };

    let interactor = ViewStockInteractor::with_window(repo, config.window_days);
    let mut presenter = ConsolePresenter::new(format);
    interactor.execute(&ViewStockInput::new(args.symbol.as_str()), &mut presenter)?;
    presenter.finish()
}

fn handle_compare(repo: &StockRepository, args: &CompareArgs) -> Result<String, AppError> {
    let input = CompareStocksInput::new(args.first.as_str(), args.second.as_str(), args.start, args.end)
        .map_err(|e| AppError::usage(e.to_string()))?;

    let interactor = CompareStocksInteractor::new(repo);
    let mut presenter = ConsolePresenter::text();
    interactor.execute(&input, &mut presenter)?;
    presenter.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn config() -> AppConfig {
        AppConfig {
            window_days: 30,
            history_days: 400,
            seed: 11,
            as_of: NaiveDate::from_ymd_opt(2024, 6, 28),
        }
    }

    fn repo() -> StockRepository {
        pipeline::load_repository(&config()).unwrap()
    }

    #[test]
    fn cli_flags_override_environment() {
        let cli = Cli::parse_from(["stocks", "view", "AAPL", "--window", "10", "--seed", "5"]);
        let resolved = resolve_config(config(), &cli).unwrap();
        assert_eq!(resolved.window_days, 10);
        assert_eq!(resolved.seed, 5);
        assert_eq!(resolved.history_days, 400);
    }

    #[test]
    fn view_renders_summary_for_known_symbol() {
        let args = ViewArgs {
            symbol: "aapl".to_string(),
            window: None,
            json: false,
            no_plot: true,
            width: 40,
            height: 10,
        };
        let out = handle_view(&repo(), &config(), &args).unwrap();
        assert!(out.starts_with("=== Apple Inc. (AAPL) ===\n"));
        assert!(out.contains("Window: 30 days"));
    }

    #[test]
    fn view_of_unknown_symbol_exits_not_found() {
        let args = ViewArgs {
            symbol: "NOPE".to_string(),
            window: None,
            json: true,
            no_plot: false,
            width: 40,
            height: 10,
        };
        let err = handle_view(&repo(), &config(), &args).unwrap_err();
        assert_eq!(err.exit_code(), crate::error::EXIT_NOT_FOUND);
    }

    #[test]
    fn compare_two_dividend_payers() {
        let args = CompareArgs {
            first: "Apple Inc.".to_string(),
            second: "Microsoft Corporation".to_string(),
            start: NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
            end: NaiveDate::from_ymd_opt(2024, 3, 28).unwrap(),
        };
        let out = handle_compare(&repo(), &args).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("From 02/01/2024 to 28/03/2024, Apple Inc. earned $"));
        assert!(lines[2].starts_with("On 28/03/2024, Apple Inc. featured "));
    }

    #[test]
    fn compare_with_non_payer_mid_quarter() {
        let args = CompareArgs {
            first: "Apple Inc.".to_string(),
            second: "Alphabet Inc.".to_string(),
            start: NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
            end: NaiveDate::from_ymd_opt(2024, 5, 15).unwrap(),
        };
        let out = handle_compare(&repo(), &args).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[2].starts_with("On 15/05/2024, Apple Inc. featured "));
        assert!(lines[2].ends_with("while Alphabet Inc. featured 0.0 per share."));
    }

    #[test]
    fn compare_ending_on_last_loaded_day() {
        let args = CompareArgs {
            first: "Microsoft Corporation".to_string(),
            second: "Tesla, Inc.".to_string(),
            start: NaiveDate::from_ymd_opt(2024, 4, 1).unwrap(),
            end: NaiveDate::from_ymd_opt(2024, 6, 28).unwrap(),
        };
        assert!(handle_compare(&repo(), &args).is_ok());
    }

    #[test]
    fn compare_with_inverted_range_is_usage_error() {
        let args = CompareArgs {
            first: "Apple Inc.".to_string(),
            second: "Microsoft Corporation".to_string(),
            start: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            end: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        };
        let err = handle_compare(&repo(), &args).unwrap_err();
        assert_eq!(err.exit_code(), crate::error::EXIT_USAGE);
    }
}
