//! View one stock: its trailing window of daily share prices.

use tracing::debug;

use crate::domain::{FIVE_YEARS_DAYS, ViewStockInput, ViewStockOutput};
use crate::error::Result;
use crate::usecase::StockLookup;

/// Receives the projection produced by [`ViewStockInteractor`].
pub trait ViewStockPresenter {
    fn present_stock(&mut self, output: &ViewStockOutput);
}

pub struct ViewStockInteractor<L> {
    lookup: L,
    window_days: usize,
}

impl<L: StockLookup> ViewStockInteractor<L> {
    /// Interactor reading the default five-year window.
    pub fn new(lookup: L) -> Self {
        Self::with_window(lookup, FIVE_YEARS_DAYS)
    }

    pub fn with_window(lookup: L, window_days: usize) -> Self {
        Self { lookup, window_days }
    }

    pub fn window_days(&self) -> usize {
        self.window_days
    }

    /// Resolve the stock and read its trailing window, oldest price first.
    ///
    /// A history shorter than the window is an out-of-range error.
    pub fn view(&self, input: &ViewStockInput) -> Result<ViewStockOutput> {
        let stock = self.lookup.stock_by_symbol(&input.symbol)?;
        let share_prices = stock.share_prices_window(self.window_days)?;
        debug!(symbol = stock.symbol(), window = self.window_days, "viewing stock");

        Ok(ViewStockOutput {
            company: stock.company().to_string(),
            symbol: stock.symbol().to_string(),
            share_prices,
        })
    }

    pub fn execute(&self, input: &ViewStockInput, presenter: &mut impl ViewStockPresenter) -> Result<()> {
        let output = self.view(input)?;
        presenter.present_stock(&output);
        Ok(())
    }
}
