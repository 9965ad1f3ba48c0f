//! Compare two stocks by earnings per share, growth and dividends.

use chrono::NaiveDate;
use tracing::debug;

use crate::domain::{CompareStocksInput, format_display_date};
use crate::error::Result;
use crate::stock::Stock;
use crate::usecase::StockLookup;

/// Receives the summary produced by [`CompareStocksInteractor`].
pub trait CompareStocksPresenter {
    fn present_comparison(&mut self, summary: &str);
}

/// Figures computed for one side of a comparison.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StockFigures {
    pub earnings_per_share: f64,
    pub growth_percentage: f64,
    pub dividends_per_share: f64,
}

impl StockFigures {
    pub fn compute(stock: &Stock, start: NaiveDate, end: NaiveDate) -> Result<Self> {
        Ok(Self {
            earnings_per_share: stock.earnings_per_share(start, end)?,
            growth_percentage: stock.growth_percentage(start, end)?,
            dividends_per_share: stock.dividends_per_share(end)?,
        })
    }
}

pub struct CompareStocksInteractor<L> {
    lookup: L,
}

impl<L: StockLookup> CompareStocksInteractor<L> {
    pub fn new(lookup: L) -> Self {
        Self { lookup }
    }

    /// Every company name that can be compared.
    pub fn stock_names(&self) -> Vec<String> {
        self.lookup.company_names()
    }

    /// Three-line comparison of both stocks over `[start, end]`.
    ///
    /// Both companies are resolved before any figure is computed.
    pub fn summarize(&self, input: &CompareStocksInput) -> Result<String> {
        let first = self.lookup.stock_by_company(&input.first_company)?;
        let second = self.lookup.stock_by_company(&input.second_company)?;
        debug!(
            first = first.symbol(),
            second = second.symbol(),
            start = %input.start,
            end = %input.end,
            "comparing stocks"
        );

        let first_figures = StockFigures::compute(&first, input.start, input.end)?;
        let second_figures = StockFigures::compute(&second, input.start, input.end)?;

        Ok(comparison_summary(
            first.company(),
            &first_figures,
            second.company(),
            &second_figures,
            input.start,
            input.end,
        ))
    }

    pub fn execute(
        &self,
        input: &CompareStocksInput,
        presenter: &mut impl CompareStocksPresenter,
    ) -> Result<()> {
        let summary = self.summarize(input)?;
        presenter.present_comparison(&summary);
        Ok(())
    }
}

fn comparison_summary(
    first: &str,
    a: &StockFigures,
    second: &str,
    b: &StockFigures,
    start: NaiveDate,
    end: NaiveDate,
) -> String {
    let start = format_display_date(start);
    let end = format_display_date(end);

    let eps = format!(
        "From {start} to {end}, {first} earned ${:.1} earnings per share while {second} earned ${:.1} earnings per share.",
        a.earnings_per_share, b.earnings_per_share
    );
    let growth = format!(
        "From {start} to {end}, {first} grew {:.1}% while {second} grew {:.1}%.",
        a.growth_percentage, b.growth_percentage
    );
    let dividends = format!(
        "On {end}, {first} featured {:.1} dividends per share while {second} featured {:.1} per share.",
        a.dividends_per_share, b.dividends_per_share
    );

    format!("{eps}\n{growth}\n{dividends}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ErrorKind, MetricsError};
    use crate::repository::StockRepository;
    use crate::usecase::fixtures::{daily_stock, date, with_dividends};

    #[derive(Default)]
    struct Recorder {
        summaries: Vec<String>,
    }

    impl CompareStocksPresenter for Recorder {
        fn present_comparison(&mut self, summary: &str) {
            self.summaries.push(summary.to_string());
        }
    }

    fn repo() -> StockRepository {
        let mut repo = StockRepository::new();
        // 2024-01-01 .. 2024-01-05
        let acme = daily_stock("Acme Corp", "ACME", &[10.0, 11.0, 12.0, 13.0, 20.0]);
        let globex = daily_stock("Globex", "GBX", &[50.0, 40.0, 30.0, 20.0, 10.0]);
        repo.insert(with_dividends(acme, vec![(date(2024, 1, 4), 0.5)])).unwrap();
        repo.insert(with_dividends(globex, vec![(date(2024, 1, 3), 1.25), (date(2024, 1, 5), 2.0)]))
            .unwrap();
        repo
    }

    #[test]
    fn summary_has_three_formatted_lines() {
        let repo = repo();
        let interactor = CompareStocksInteractor::new(&repo);
        let input =
            CompareStocksInput::new("Acme Corp", "Globex", date(2024, 1, 1), date(2024, 1, 4)).unwrap();

        let mut presenter = Recorder::default();
        interactor.execute(&input, &mut presenter).unwrap();

        // ACME: eps = 4 / 20 = 0.2, growth = 10 * 100 / 13, dividends on 01-04 = 0.5
        // GBX:  eps = 4 / 10 = 0.4, growth = 50 * 100 / 20, dividends snap to 01-05 = 2.0
        let expected = concat!(
            "From 01/01/2024 to 04/01/2024, Acme Corp earned $0.2 earnings per share while Globex earned $0.4 earnings per share.\n",
            "From 01/01/2024 to 04/01/2024, Acme Corp grew 76.9% while Globex grew 250.0%.\n",
            "On 04/01/2024, Acme Corp featured 0.5 dividends per share while Globex featured 2.0 per share.",
        );
        assert_eq!(presenter.summaries, vec![expected.to_string()]);
    }

    #[test]
    fn unknown_companies_fail_before_any_computation() {
        let repo = repo();
        let interactor = CompareStocksInteractor::new(&repo);
        let input =
            CompareStocksInput::new("Initech", "Hooli", date(2024, 1, 1), date(2024, 1, 4)).unwrap();

        let mut presenter = Recorder::default();
        let err = interactor.execute(&input, &mut presenter).unwrap_err();
        assert_eq!(err, MetricsError::not_found("Initech"));
        assert!(presenter.summaries.is_empty());
    }

    #[test]
    fn second_lookup_happens_before_first_stock_is_computed() {
        let mut repo = StockRepository::new();
        // Latest price zero: computing this stock's EPS would fail with division by zero.
        repo.insert(daily_stock("Zero Co", "ZERO", &[1.0, 0.0])).unwrap();
        let interactor = CompareStocksInteractor::new(&repo);
        let input =
            CompareStocksInput::new("Zero Co", "Hooli", date(2024, 1, 1), date(2024, 1, 2)).unwrap();

        let err = interactor.summarize(&input).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[test]
    fn metric_errors_propagate_instead_of_text() {
        let mut repo = StockRepository::new();
        repo.insert(daily_stock("Zero Co", "ZERO", &[1.0, 0.0])).unwrap();
        repo.insert(daily_stock("Acme Corp", "ACME", &[1.0, 2.0])).unwrap();
        let interactor = CompareStocksInteractor::new(&repo);
        let input =
            CompareStocksInput::new("Zero Co", "Acme Corp", date(2024, 1, 1), date(2024, 1, 2)).unwrap();

        let err = interactor.summarize(&input).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DivisionByZero);
    }

    #[test]
    fn missing_dividends_are_an_error() {
        let mut repo = StockRepository::new();
        repo.insert(daily_stock("Acme Corp", "ACME", &[1.0, 2.0])).unwrap();
        repo.insert(daily_stock("Globex", "GBX", &[3.0, 4.0])).unwrap();
        let interactor = CompareStocksInteractor::new(&repo);
        let input =
            CompareStocksInput::new("Acme Corp", "Globex", date(2024, 1, 1), date(2024, 1, 2)).unwrap();

        let err = interactor.summarize(&input).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NoDataAvailable);
    }

    #[test]
    fn lists_stock_names() {
        let repo = repo();
        let interactor = CompareStocksInteractor::new(&repo);
        assert_eq!(interactor.stock_names(), vec!["Acme Corp", "Globex"]);
    }
}
