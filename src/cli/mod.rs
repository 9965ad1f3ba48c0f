//! Command-line parsing for the stock viewer.
//!
//! The goal of this module is to keep **argument parsing** separate from the
//! use cases and the analytics core.

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};

use crate::config::parse_date;

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "stocks", version, about = "View and compare stock metrics")]
pub struct Cli {
    /// Seed for the sample market history.
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Trading days of history loaded for every stock.
    #[arg(long, global = true)]
    pub history_days: Option<usize>,

    /// Last date of the loaded history (YYYY-MM-DD, defaults to today).
    #[arg(long, global = true, value_parser = parse_date)]
    pub as_of: Option<NaiveDate>,

    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// List every known company and its symbol.
    List,
    /// Show the trailing share-price window of one stock.
    View(ViewArgs),
    /// Compare two companies by EPS, growth and dividends over a date range.
    Compare(CompareArgs),
}

#[derive(Debug, Args, Clone)]
pub struct ViewArgs {
    /// Ticker symbol, e.g. AAPL.
    pub symbol: String,

    /// Number of trailing daily prices to show.
    #[arg(long)]
    pub window: Option<usize>,

    /// Print the projection as JSON instead of text.
    #[arg(long)]
    pub json: bool,

    /// Disable the terminal plot.
    #[arg(long)]
    pub no_plot: bool,

    /// Plot width (columns).
    #[arg(long, default_value_t = 100)]
    pub width: usize,

    /// Plot height (rows).
    #[arg(long, default_value_t = 20)]
    pub height: usize,
}

#[derive(Debug, Args, Clone)]
pub struct CompareArgs {
    /// First company name, e.g. "Apple Inc.".
    pub first: String,

    /// Second company name.
    pub second: String,

    /// Start of the range (YYYY-MM-DD), inclusive.
    #[arg(long, value_parser = parse_date)]
    pub start: NaiveDate,

    /// End of the range (YYYY-MM-DD), inclusive.
    #[arg(long, value_parser = parse_date)]
    pub end: NaiveDate,
}
