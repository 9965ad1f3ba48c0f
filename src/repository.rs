//! In-memory stock lookup.
//!
//! Stocks are fully built before insertion and shared as `Arc<Stock>`, so
//! readers never observe a partially constructed stock.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use crate::error::{MetricsError, Result};
use crate::stock::{Stock, StockData};
use crate::usecase::StockLookup;

#[derive(Debug, Default)]
pub struct StockRepository {
    by_symbol: HashMap<String, Arc<Stock>>,
    /// Company names in insertion order, paired with their symbol.
    companies: Vec<(String, String)>,
}

impl StockRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build and insert a stock for every loader snapshot.
    pub fn from_sources<'a, S>(sources: impl IntoIterator<Item = &'a S>) -> Result<Self>
    where
        S: StockData + 'a,
    {
        let mut repo = Self::new();
        for source in sources {
            repo.insert(Stock::from_source(source)?)?;
        }
        Ok(repo)
    }

    /// Publish a stock. Symbols must be unique.
    pub fn insert(&mut self, stock: Stock) -> Result<Arc<Stock>> {
        let key = stock.symbol().to_string();
        if self.by_symbol.contains_key(&key) {
            return Err(MetricsError::InvalidIdentity {
                reason: format!("duplicate symbol '{key}'"),
            });
        }

        let stock = Arc::new(stock);
        self.companies.push((stock.company().to_string(), key.clone()));
        self.by_symbol.insert(key, Arc::clone(&stock));
        debug!(symbol = stock.symbol(), company = stock.company(), "published stock");
        Ok(stock)
    }

    pub fn len(&self) -> usize {
        self.by_symbol.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_symbol.is_empty()
    }

    /// All stocks in insertion order.
    pub fn stocks(&self) -> impl Iterator<Item = &Arc<Stock>> {
        self.companies
            .iter()
            .filter_map(|(_, symbol)| self.by_symbol.get(symbol))
    }
}

impl StockLookup for StockRepository {
    fn stock_by_symbol(&self, symbol: &str) -> Result<Arc<Stock>> {
        let key = symbol.trim().to_ascii_uppercase();
        self.by_symbol
            .get(&key)
            .cloned()
            .ok_or_else(|| MetricsError::not_found(symbol))
    }

    fn stock_by_company(&self, company: &str) -> Result<Arc<Stock>> {
        let wanted = company.trim();
        let symbol = self
            .companies
            .iter()
            .find(|(name, _)| name == wanted)
            .or_else(|| {
                self.companies
                    .iter()
                    .find(|(name, _)| name.eq_ignore_ascii_case(wanted))
            })
            .map(|(_, symbol)| symbol)
            .ok_or_else(|| MetricsError::not_found(company))?;

        self.stock_by_symbol(symbol)
    }

    fn company_names(&self) -> Vec<String> {
        self.companies.iter().map(|(name, _)| name.clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::metrics::{DatedSeries, Metrics};

    fn stock(company: &str, symbol: &str) -> Stock {
        let metrics = Metrics::new(
            DatedSeries::empty("share price"),
            DatedSeries::empty("earnings"),
            DatedSeries::empty("volume"),
        );
        Stock::new(company, symbol, metrics).unwrap()
    }

    fn repo() -> StockRepository {
        let mut repo = StockRepository::new();
        repo.insert(stock("Acme Corp", "ACME")).unwrap();
        repo.insert(stock("Globex", "GBX")).unwrap();
        repo
    }

    #[test]
    fn resolves_symbol_case_insensitively() {
        let repo = repo();
        assert_eq!(repo.stock_by_symbol("acme").unwrap().company(), "Acme Corp");
        assert_eq!(repo.stock_by_symbol(" GBX ").unwrap().company(), "Globex");
    }

    #[test]
    fn resolves_company_exact_then_case_insensitive() {
        let repo = repo();
        assert_eq!(repo.stock_by_company("Globex").unwrap().symbol(), "GBX");
        assert_eq!(repo.stock_by_company("acme corp").unwrap().symbol(), "ACME");
    }

    #[test]
    fn unknown_identifiers_are_not_found() {
        let repo = repo();
        let err = repo.stock_by_symbol("INIT").unwrap_err();
        assert_eq!(err, MetricsError::not_found("INIT"));
        assert_eq!(repo.stock_by_company("Initech").unwrap_err().kind(), ErrorKind::NotFound);
    }

    #[test]
    fn rejects_duplicate_symbols() {
        let mut repo = repo();
        let err = repo.insert(stock("Acme Again", "acme")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidData);
        assert_eq!(repo.len(), 2);
    }

    #[test]
    fn lists_companies_in_insertion_order() {
        let repo = repo();
        assert_eq!(repo.company_names(), vec!["Acme Corp".to_string(), "Globex".to_string()]);
        let symbols: Vec<_> = repo.stocks().map(|s| s.symbol().to_string()).collect();
        assert_eq!(symbols, vec!["ACME", "GBX"]);
    }
}
