//! Use cases built on top of `Stock`: viewing one stock and comparing two.
//!
//! Interactors depend on two collaborator traits defined here:
//!
//! - `StockLookup` resolves identifiers to built stocks
//! - a presenter trait per use case receives the result
//!
//! Errors are returned to the caller unchanged; presenters only see success.

use std::sync::Arc;

use crate::error::Result;
use crate::stock::Stock;

pub mod compare_stocks;
pub mod view_stock;

pub use compare_stocks::{CompareStocksInteractor, CompareStocksPresenter};
pub use view_stock::{ViewStockInteractor, ViewStockPresenter};

/// Resolves a symbol or company name to a stock.
///
/// Unknown identifiers fail with `MetricsError::NotFound`.
pub trait StockLookup {
    fn stock_by_symbol(&self, symbol: &str) -> Result<Arc<Stock>>;
    fn stock_by_company(&self, company: &str) -> Result<Arc<Stock>>;
    fn company_names(&self) -> Vec<String>;
}

impl<T: StockLookup + ?Sized> StockLookup for &T {
    fn stock_by_symbol(&self, symbol: &str) -> Result<Arc<Stock>> {
        (**self).stock_by_symbol(symbol)
    }

    fn stock_by_company(&self, company: &str) -> Result<Arc<Stock>> {
        (**self).stock_by_company(company)
    }

    fn company_names(&self) -> Vec<String> {
        (**self).company_names()
    }
}
