//! Console presenters for the use cases.

pub mod format;

pub use format::{format_company_list, format_stock_summary};

use crate::domain::ViewStockOutput;
use crate::error::AppError;
use crate::plot::render_price_plot;
use crate::usecase::{CompareStocksPresenter, ViewStockPresenter};

/// How a stock view is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewFormat {
    /// Summary line plus an optional ASCII chart.
    Text { plot: bool, width: usize, height: usize },
    /// The projection as pretty-printed JSON.
    Json,
}

/// Collects rendered output for the terminal.
///
/// Presenter callbacks cannot fail, so a JSON encoding error is kept and
/// surfaced by [`ConsolePresenter::finish`].
#[derive(Debug)]
pub struct ConsolePresenter {
    format: ViewFormat,
    rendered: String,
    error: Option<AppError>,
}

impl ConsolePresenter {
    pub fn new(format: ViewFormat) -> Self {
        Self {
            format,
            rendered: String::new(),
            error: None,
        }
    }

    pub fn text() -> Self {
        Self::new(ViewFormat::Text {
            plot: false,
            width: 0,
            height: 0,
        })
    }

    /// Everything rendered so far.
    pub fn finish(self) -> Result<String, AppError> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(self.rendered),
        }
    }
}

impl ViewStockPresenter for ConsolePresenter {
    fn present_stock(&mut self, output: &ViewStockOutput) {
        match self.format {
            ViewFormat::Text { plot, width, height } => {
                self.rendered.push_str(&format_stock_summary(output));
                if plot {
                    self.rendered
                        .push_str(&render_price_plot(&output.share_prices, width, height));
                }
            }
            ViewFormat::Json => match serde_json::to_string_pretty(output) {
                Ok(json) => {
                    self.rendered.push_str(&json);
                    self.rendered.push('\n');
                }
                Err(e) => {
                    self.error = Some(AppError::new(4, format!("Failed to encode stock view as JSON: {e}")));
                }
            },
        }
    }
}

impl CompareStocksPresenter for ConsolePresenter {
    fn present_comparison(&mut self, summary: &str) {
        self.rendered.push_str(summary);
        self.rendered.push('\n');
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn output() -> ViewStockOutput {
        ViewStockOutput {
            company: "Acme Corp".to_string(),
            symbol: "ACME".to_string(),
            share_prices: vec![100.0, 110.0],
        }
    }

    #[test]
    fn text_view_with_plot() {
        let mut presenter = ConsolePresenter::new(ViewFormat::Text {
            plot: true,
            width: 10,
            height: 5,
        });
        presenter.present_stock(&output());
        let rendered = presenter.finish().unwrap();
        assert!(rendered.starts_with("=== Acme Corp (ACME) ===\n"));
        assert!(rendered.contains("Plot: days=2 | price=[100.00, 110.00]\n"));
    }

    #[test]
    fn json_view_round_trips() {
        let mut presenter = ConsolePresenter::new(ViewFormat::Json);
        presenter.present_stock(&output());
        let rendered = presenter.finish().unwrap();
        let parsed: ViewStockOutput = serde_json::from_str(&rendered).unwrap();
        assert_eq!(parsed, output());
    }

    #[test]
    fn comparison_is_printed_verbatim() {
        let mut presenter = ConsolePresenter::text();
        presenter.present_comparison("line one\nline two");
        assert_eq!(presenter.finish().unwrap(), "line one\nline two\n");
    }
}
