//! Domain types shared by the use cases and their presenters.
//!
//! This module defines:
//!
//! - use-case inputs (`ViewStockInput`, `CompareStocksInput`)
//! - use-case outputs handed to presenters (`ViewStockOutput`)
//! - the default view window and the display date format

pub mod types;

pub use types::*;
